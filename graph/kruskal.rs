use derive_more::Display;
use tracing::{debug, trace};

use crate::error::AlgoError;
use crate::graph::{Graph, SpanningTree, UnionFind};

/// 生成树的优化目标：最小或最大总权重
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Mode {
    /// 最小生成树：边按权重升序处理
    #[display(fmt = "minimum")]
    Minimum,
    /// 最大生成树：边按权重降序处理
    #[display(fmt = "maximum")]
    Maximum,
}

impl std::str::FromStr for Mode {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "min" | "minimum" => Ok(Mode::Minimum),
            "max" | "maximum" => Ok(Mode::Maximum),
            other => Err(AlgoError::InvalidParameter {
                name: "mode",
                reason: format!("`{}` is not a spanning tree mode (min|max)", other),
            }),
        }
    }
}

/// Kruskal 生成树 - 按权重排序后逐条尝试，用并查集拒绝成环的边
///
/// 收集到 V-1 条边后提前结束。图不连通时得到的是生成森林
/// （每个连通分量一棵树）。
pub fn spanning_tree(graph: &Graph, mode: Mode) -> Result<SpanningTree, AlgoError> {
    if graph.is_empty() {
        return Err(AlgoError::EmptyGraph);
    }

    // edge_list 已按端点排序，这里的稳定排序保证权重相同时结果确定
    let mut edges = graph.edge_list();
    match mode {
        Mode::Minimum => edges.sort_by(|a, b| a.weight.cmp(&b.weight)),
        Mode::Maximum => edges.sort_by(|a, b| b.weight.cmp(&a.weight)),
    }

    let node_count = graph.node_count();
    let mut uf = UnionFind::new(graph.nodes().into_iter().map(String::from));
    let mut tree_edges: Vec<(String, String, u64)> = Vec::new();
    let mut total_weight = 0u64;

    for edge in edges {
        // union 返回 false 表示两端已连通，这条边会成环
        if uf.union(&edge.from, &edge.to) {
            debug!(from = %edge.from, to = %edge.to, weight = edge.weight, "edge accepted");
            total_weight += edge.weight;
            tree_edges.push((edge.from, edge.to, edge.weight));

            if tree_edges.len() == node_count - 1 {
                break;
            }
        } else {
            trace!(from = %edge.from, to = %edge.to, "edge rejected, would close a cycle");
        }
    }

    Ok(SpanningTree {
        edges: tree_edges,
        total_weight,
    })
}
