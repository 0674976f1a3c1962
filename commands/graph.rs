use std::fmt::Write as _;
use std::sync::Arc;

use crate::commands::Command;
use crate::graph::{dijkstra, kruskal, prim, Graph, Mode, SpanningTree};
use crate::Result;

/// 生成树结果的统一渲染，Prim 和 Kruskal 共用
fn format_spanning_tree(title: &str, tree: &SpanningTree) -> String {
    let mut output = format!("{}:\n", title);
    for (from, to, weight) in &tree.edges {
        let _ = writeln!(output, "  {} - {} (weight {})", from, to, weight);
    }
    let _ = write!(
        output,
        "total weight: {} ({} edges)",
        tree.total_weight,
        tree.edge_count()
    );
    output
}

/// 没有显式给出起点时，取字典序最小的节点
fn default_start(graph: &Graph) -> Result<String> {
    graph
        .nodes()
        .first()
        .map(|node| node.to_string())
        .ok_or_else(|| "graph has no nodes".into())
}

/// GRAPH 命令 - 显示当前演示图的节点与边
pub struct GraphCommand {
    graph: Arc<Graph>,
}

impl GraphCommand {
    pub fn new(graph: Arc<Graph>) -> Self {
        Self { graph }
    }
}

impl Command for GraphCommand {
    fn name(&self) -> &'static str {
        "graph"
    }

    fn about(&self) -> &'static str {
        "show the current demo graph"
    }

    fn execute(&self, _args: &[String]) -> Result<String> {
        let mut output = format!(
            "{} nodes, {} edges\nnodes: {}\n",
            self.graph.node_count(),
            self.graph.edge_count(),
            self.graph.nodes().join(", ")
        );
        for edge in self.graph.edge_list() {
            let _ = writeln!(output, "  {} - {} (weight {})", edge.from, edge.to, edge.weight);
        }
        Ok(output.trim_end().to_string())
    }
}

/// DIJKSTRA 命令 - 单源最短路径演示
///
/// 用法：DIJKSTRA [start]
pub struct DijkstraCommand {
    graph: Arc<Graph>,
}

impl DijkstraCommand {
    pub fn new(graph: Arc<Graph>) -> Self {
        Self { graph }
    }
}

impl Command for DijkstraCommand {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn about(&self) -> &'static str {
        "single-source shortest paths - [start]"
    }

    fn execute(&self, args: &[String]) -> Result<String> {
        let start = match args.first() {
            Some(node) => node.clone(),
            None => default_start(&self.graph)?,
        };

        let paths = dijkstra::shortest_paths(&self.graph, &start)?;

        let mut output = format!("shortest paths from {}:\n", start);
        let mut unreachable = Vec::new();
        for node in self.graph.nodes() {
            if node == start {
                continue;
            }
            match (paths.distance_to(node), paths.path_to(node)) {
                (Some(distance), Some(path)) => {
                    let _ = writeln!(
                        output,
                        "  {}: distance {}, path {}",
                        node,
                        distance,
                        path.join(" -> ")
                    );
                }
                _ => unreachable.push(node),
            }
        }
        if !unreachable.is_empty() {
            let _ = writeln!(output, "unreachable: {}", unreachable.join(", "));
        }
        Ok(output.trim_end().to_string())
    }
}

/// PRIM 命令 - 最小生成树演示
///
/// 用法：PRIM [start]
pub struct PrimCommand {
    graph: Arc<Graph>,
}

impl PrimCommand {
    pub fn new(graph: Arc<Graph>) -> Self {
        Self { graph }
    }
}

impl Command for PrimCommand {
    fn name(&self) -> &'static str {
        "prim"
    }

    fn about(&self) -> &'static str {
        "minimum spanning tree (Prim) - [start]"
    }

    fn execute(&self, args: &[String]) -> Result<String> {
        let start = match args.first() {
            Some(node) => node.clone(),
            None => default_start(&self.graph)?,
        };

        let tree = prim::spanning_tree(&self.graph, &start)?;
        Ok(format_spanning_tree(
            &format!("minimum spanning tree from {} (prim)", start),
            &tree,
        ))
    }
}

/// KRUSKAL 命令 - 最小/最大生成树演示
///
/// 用法：KRUSKAL [min|max]
pub struct KruskalCommand {
    graph: Arc<Graph>,
}

impl KruskalCommand {
    pub fn new(graph: Arc<Graph>) -> Self {
        Self { graph }
    }
}

impl Command for KruskalCommand {
    fn name(&self) -> &'static str {
        "kruskal"
    }

    fn about(&self) -> &'static str {
        "minimum/maximum spanning tree (Kruskal) - [min|max]"
    }

    fn execute(&self, args: &[String]) -> Result<String> {
        let mode = match args.first() {
            Some(raw) => raw.parse::<Mode>()?,
            None => Mode::Minimum,
        };

        let tree = kruskal::spanning_tree(&self.graph, mode)?;
        Ok(format_spanning_tree(
            &format!("{} spanning tree (kruskal)", mode),
            &tree,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Arc<Graph> {
        Arc::new(Graph::sample())
    }

    #[test]
    fn test_graph_command_lists_edges() {
        let cmd = GraphCommand::new(sample());
        let output = cmd.execute(&[]).unwrap();
        assert!(output.contains("9 nodes, 14 edges"));
        assert!(output.contains("A - B (weight 4)"));
    }

    #[test]
    fn test_dijkstra_with_explicit_start() {
        let cmd = DijkstraCommand::new(sample());
        let output = cmd.execute(&strings(&["A"])).unwrap();
        assert!(output.contains("shortest paths from A"));
        assert!(output.contains("G: distance 9, path A -> H -> G"));
    }

    #[test]
    fn test_dijkstra_defaults_to_first_node() {
        let cmd = DijkstraCommand::new(sample());
        let output = cmd.execute(&[]).unwrap();
        assert!(output.contains("shortest paths from A"));
    }

    #[test]
    fn test_dijkstra_unknown_start() {
        let cmd = DijkstraCommand::new(sample());
        assert!(cmd.execute(&strings(&["Z"])).is_err());
    }

    #[test]
    fn test_dijkstra_reports_unreachable() {
        let mut graph = Graph::sample();
        graph.add_edge("X", "Y", 1);
        let cmd = DijkstraCommand::new(Arc::new(graph));
        let output = cmd.execute(&strings(&["A"])).unwrap();
        assert!(output.contains("unreachable: X, Y"));
    }

    #[test]
    fn test_prim_reports_cost() {
        let cmd = PrimCommand::new(sample());
        let output = cmd.execute(&strings(&["A"])).unwrap();
        assert!(output.contains("total weight: 37 (8 edges)"));
    }

    #[test]
    fn test_kruskal_min_and_max() {
        let cmd = KruskalCommand::new(sample());

        let min = cmd.execute(&strings(&["min"])).unwrap();
        assert!(min.contains("minimum spanning tree"));
        assert!(min.contains("total weight: 37"));

        let max = cmd.execute(&strings(&["max"])).unwrap();
        assert!(max.contains("maximum spanning tree"));
        assert!(max.contains("total weight: 71"));
    }

    #[test]
    fn test_kruskal_defaults_to_min() {
        let cmd = KruskalCommand::new(sample());
        let output = cmd.execute(&[]).unwrap();
        assert!(output.contains("minimum spanning tree"));
    }

    #[test]
    fn test_kruskal_invalid_mode() {
        let cmd = KruskalCommand::new(sample());
        assert!(cmd.execute(&strings(&["median"])).is_err());
    }
}
