use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use tracing::{debug, trace};

use crate::error::AlgoError;
use crate::graph::{Graph, SpanningTree};

/// Prim 最小生成树 - 从起点开始，每次用最小堆取出连接树内外的最轻边
///
/// 堆中保存 (权重, 目标节点, 来源节点)；目标节点已在树中的条目
/// 是过期的，直接跳过。图不连通时只生成起点所在分量的生成树。
pub fn spanning_tree(graph: &Graph, start: &str) -> Result<SpanningTree, AlgoError> {
    if !graph.contains(start) {
        return Err(AlgoError::UnknownNode(start.to_string()));
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut edges: Vec<(String, String, u64)> = Vec::new();
    let mut total_weight = 0u64;

    // 起点以权重 0、无来源入堆
    let mut queue = BinaryHeap::new();
    queue.push(Reverse((0u64, start.to_string(), None::<String>)));

    while let Some(Reverse((weight, node, origin))) = queue.pop() {
        if visited.contains(&node) {
            trace!(%node, weight, "node already in tree, candidate edge skipped");
            continue;
        }
        visited.insert(node.clone());

        // 起点没有来源，不产生树边
        if let Some(origin) = origin {
            debug!(from = %origin, to = %node, weight, "edge added to spanning tree");
            edges.push((origin, node.clone(), weight));
            total_weight += weight;
        }

        if let Some(neighbors) = graph.neighbors(&node) {
            for (neighbor, &edge_weight) in neighbors {
                if !visited.contains(neighbor) {
                    queue.push(Reverse((edge_weight, neighbor.clone(), Some(node.clone()))));
                }
            }
        }
    }

    Ok(SpanningTree {
        edges,
        total_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_graph_mst_cost() {
        // CLRS 教材图的最小生成树总权重是 37
        let graph = Graph::sample();
        let tree = spanning_tree(&graph, "A").unwrap();

        assert_eq!(tree.total_weight, 37);
        assert_eq!(tree.edge_count(), graph.node_count() - 1);
    }

    #[test]
    fn test_start_node_does_not_change_cost() {
        let graph = Graph::sample();
        let from_a = spanning_tree(&graph, "A").unwrap();
        let from_e = spanning_tree(&graph, "E").unwrap();
        assert_eq!(from_a.total_weight, from_e.total_weight);
    }

    #[test]
    fn test_tree_edges_exist_in_graph() {
        let graph = Graph::sample();
        let tree = spanning_tree(&graph, "A").unwrap();

        for (from, to, weight) in &tree.edges {
            assert_eq!(graph.neighbors(from).unwrap().get(to), Some(weight));
        }
    }

    #[test]
    fn test_triangle() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "C", 2);
        graph.add_edge("A", "C", 3);

        let tree = spanning_tree(&graph, "A").unwrap();
        assert_eq!(tree.total_weight, 3);
        assert_eq!(tree.edge_count(), 2);
    }

    #[test]
    fn test_unknown_start() {
        let graph = Graph::sample();
        assert!(matches!(
            spanning_tree(&graph, "Z").unwrap_err(),
            AlgoError::UnknownNode(_)
        ));
    }

    #[test]
    fn test_disconnected_graph_spans_start_component() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1);
        graph.add_edge("X", "Y", 5);

        let tree = spanning_tree(&graph, "A").unwrap();
        assert_eq!(tree.edge_count(), 1);
        assert_eq!(tree.total_weight, 1);
    }

    #[test]
    fn test_single_edge_graph() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 7);
        let tree = spanning_tree(&graph, "B").unwrap();
        assert_eq!(tree.edges, vec![("B".to_string(), "A".to_string(), 7)]);
        assert_eq!(tree.total_weight, 7);
    }
}
