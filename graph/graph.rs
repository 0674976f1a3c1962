use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AlgoError;

/// 图的一条边，用于 JSON 边表文件的（反）序列化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: u64,
}

/// 无向加权图 - 邻接表存储 {节点: {邻居: 权重}}
///
/// 节点用字符串标签标识，权重为非负整数。
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, HashMap<String, u64>>,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一条无向边，两个端点不存在时自动创建
    ///
    /// 同一对端点重复添加时覆盖旧的权重。
    pub fn add_edge(&mut self, u: &str, v: &str, weight: u64) {
        self.adjacency
            .entry(u.to_string())
            .or_default()
            .insert(v.to_string(), weight);
        self.adjacency
            .entry(v.to_string())
            .or_default()
            .insert(u.to_string(), weight);
    }

    /// 节点是否存在
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// 某个节点的邻居及边权重
    pub fn neighbors(&self, node: &str) -> Option<&HashMap<String, u64>> {
        self.adjacency.get(node)
    }

    /// 所有节点标签，按字典序返回，保证输出稳定
    pub fn nodes(&self) -> Vec<&str> {
        let mut nodes: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        nodes.sort_unstable();
        nodes
    }

    /// 节点数
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// 边数（每条无向边只计一次）
    pub fn edge_count(&self) -> usize {
        self.edge_list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// 去重后的边表：每条无向边只保留 from < to 的方向，按端点排序
    pub fn edge_list(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for (node, neighbors) in &self.adjacency {
            for (neighbor, &weight) in neighbors {
                if neighbor > node {
                    edges.push(Edge {
                        from: node.clone(),
                        to: neighbor.clone(),
                        weight,
                    });
                }
            }
        }
        edges.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
        edges
    }

    /// 从边的集合构建图
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(&edge.from, &edge.to, edge.weight);
        }
        graph
    }

    /// 从 JSON 边表文件加载图
    ///
    /// 文件格式：`[{"from": "A", "to": "B", "weight": 4}, ...]`
    pub fn load_json(path: &Path) -> Result<Self, AlgoError> {
        let content = std::fs::read_to_string(path)?;
        let edges: Vec<Edge> = serde_json::from_str(&content)?;
        Ok(Self::from_edges(edges))
    }

    /// 把图保存为 JSON 边表文件
    pub fn save_json(&self, path: &Path) -> Result<(), AlgoError> {
        let json = serde_json::to_string_pretty(&self.edge_list())?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// 内置的演示图（CLRS 教材中的经典 9 节点加权图）
    pub fn sample() -> Self {
        let mut graph = Self::new();
        graph.add_edge("A", "B", 4);
        graph.add_edge("A", "H", 8);
        graph.add_edge("B", "C", 8);
        graph.add_edge("B", "H", 11);
        graph.add_edge("C", "D", 7);
        graph.add_edge("C", "F", 4);
        graph.add_edge("C", "I", 2);
        graph.add_edge("D", "E", 9);
        graph.add_edge("D", "F", 14);
        graph.add_edge("E", "F", 10);
        graph.add_edge("F", "G", 2);
        graph.add_edge("G", "H", 1);
        graph.add_edge("G", "I", 6);
        graph.add_edge("H", "I", 7);
        graph
    }
}
