use std::collections::HashMap;

/// 并查集（不相交集合），用于 Kruskal 的环检测
///
/// 带路径压缩和按秩合并，摊还复杂度接近 O(1)。
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: HashMap<String, String>,
    rank: HashMap<String, u32>,
}

impl UnionFind {
    /// 每个节点初始自成一个集合
    pub fn new<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parent = HashMap::new();
        let mut rank = HashMap::new();
        for node in nodes {
            let node = node.into();
            parent.insert(node.clone(), node.clone());
            rank.insert(node, 0);
        }
        Self { parent, rank }
    }

    /// 查找 node 所在集合的根，沿途做路径压缩
    ///
    /// node 必须是构造时注册过的节点，否则 panic。
    pub fn find(&mut self, node: &str) -> String {
        // 第一趟：找到根
        let mut root = node.to_string();
        while self.parent[&root] != root {
            root = self.parent[&root].clone();
        }

        // 第二趟：把路径上的节点直接挂到根下
        let mut current = node.to_string();
        while current != root {
            let next = self.parent[&current].clone();
            self.parent.insert(current, root.clone());
            current = next;
        }

        root
    }

    /// 合并两个集合（按秩），已在同一集合时返回 false
    pub fn union(&mut self, a: &str, b: &str) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank[&root_a];
        let rank_b = self.rank[&root_b];
        if rank_a < rank_b {
            self.parent.insert(root_a, root_b);
        } else if rank_a > rank_b {
            self.parent.insert(root_b, root_a);
        } else {
            // 秩相等时任选一边作为新根，秩加一
            self.parent.insert(root_b, root_a.clone());
            *self.rank.get_mut(&root_a).expect("root is registered") += 1;
        }

        true
    }

    /// 两个节点是否在同一集合
    pub fn connected(&mut self, a: &str, b: &str) -> bool {
        self.find(a) == self.find(b)
    }
}
