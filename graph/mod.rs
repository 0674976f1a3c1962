// 图算法模块声明文件

pub mod dijkstra;
#[allow(clippy::module_inception)]
pub mod graph;
pub mod kruskal;
pub mod prim;
pub mod union_find;

// 重新导出常用的类型
pub use dijkstra::ShortestPaths;
pub use graph::{Edge, Graph};
pub use kruskal::Mode;
pub use union_find::UnionFind;

/// 生成树的计算结果，Prim 与 Kruskal 共用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    /// 生成树中的边 (起点, 终点, 权重)，按加入顺序排列
    pub edges: Vec<(String, String, u64)>,
    /// 生成树的总权重
    pub total_weight: u64,
}

impl SpanningTree {
    /// 生成树包含的边数
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
