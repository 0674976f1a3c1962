pub mod args;
pub mod external;
pub mod graph;
pub mod registry;
pub mod sort;

use crate::Result;

use external::{MultiwayCommand, PolyphaseCommand, RunsCommand};
use graph::{DijkstraCommand, GraphCommand, KruskalCommand, PrimCommand};
use sort::SortCommand;

// 重新导出常用的类型
pub use args::ArgumentParser;
pub use registry::CommandRegistry;
pub use sort::SortKind;

/// 演示命令统一接口
pub trait Command {
    fn name(&self) -> &'static str;
    fn about(&self) -> &'static str;
    fn execute(&self, args: &[String]) -> Result<String>;
}

/// 所有已注册命令的静态分发
pub enum CommandType {
    Sort(SortCommand),
    Runs(RunsCommand),
    Multiway(MultiwayCommand),
    Polyphase(PolyphaseCommand),
    Graph(GraphCommand),
    Dijkstra(DijkstraCommand),
    Prim(PrimCommand),
    Kruskal(KruskalCommand),
}

impl CommandType {
    pub fn name(&self) -> &'static str {
        match self {
            CommandType::Sort(cmd) => cmd.name(),
            CommandType::Runs(cmd) => cmd.name(),
            CommandType::Multiway(cmd) => cmd.name(),
            CommandType::Polyphase(cmd) => cmd.name(),
            CommandType::Graph(cmd) => cmd.name(),
            CommandType::Dijkstra(cmd) => cmd.name(),
            CommandType::Prim(cmd) => cmd.name(),
            CommandType::Kruskal(cmd) => cmd.name(),
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            CommandType::Sort(cmd) => cmd.about(),
            CommandType::Runs(cmd) => cmd.about(),
            CommandType::Multiway(cmd) => cmd.about(),
            CommandType::Polyphase(cmd) => cmd.about(),
            CommandType::Graph(cmd) => cmd.about(),
            CommandType::Dijkstra(cmd) => cmd.about(),
            CommandType::Prim(cmd) => cmd.about(),
            CommandType::Kruskal(cmd) => cmd.about(),
        }
    }

    pub fn execute(&self, args: &[String]) -> Result<String> {
        match self {
            CommandType::Sort(cmd) => cmd.execute(args),
            CommandType::Runs(cmd) => cmd.execute(args),
            CommandType::Multiway(cmd) => cmd.execute(args),
            CommandType::Polyphase(cmd) => cmd.execute(args),
            CommandType::Graph(cmd) => cmd.execute(args),
            CommandType::Dijkstra(cmd) => cmd.execute(args),
            CommandType::Prim(cmd) => cmd.execute(args),
            CommandType::Kruskal(cmd) => cmd.execute(args),
        }
    }
}
