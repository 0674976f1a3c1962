use std::collections::HashMap;
use std::sync::Arc;

use crate::commands::external::{MultiwayCommand, PolyphaseCommand, RunsCommand};
use crate::commands::graph::{DijkstraCommand, GraphCommand, KruskalCommand, PrimCommand};
use crate::commands::sort::{SortCommand, SortKind};
use crate::commands::CommandType;
use crate::config::DemoConfig;
use crate::graph::Graph;
use crate::Result;

/// 命令注册表，管理所有可用的演示命令
pub struct CommandRegistry {
    commands: HashMap<String, CommandType>,
}

impl CommandRegistry {
    /// 创建新的命令注册表
    pub fn new(graph: Arc<Graph>, defaults: DemoConfig) -> Self {
        let mut registry = Self {
            commands: HashMap::new(),
        };

        // 注册排序命令，每种算法一个
        for &kind in SortKind::all() {
            registry.register(CommandType::Sort(SortCommand::new(kind, defaults.clone())));
        }

        // 注册外部排序模拟命令
        registry.register(CommandType::Runs(RunsCommand::new(defaults.clone())));
        registry.register(CommandType::Multiway(MultiwayCommand::new(defaults.clone())));
        registry.register(CommandType::Polyphase(PolyphaseCommand::new(defaults)));

        // 注册图算法命令
        registry.register(CommandType::Graph(GraphCommand::new(Arc::clone(&graph))));
        registry.register(CommandType::Dijkstra(DijkstraCommand::new(Arc::clone(&graph))));
        registry.register(CommandType::Prim(PrimCommand::new(Arc::clone(&graph))));
        registry.register(CommandType::Kruskal(KruskalCommand::new(graph)));

        registry
    }

    /// 注册一个命令
    pub fn register(&mut self, command: CommandType) {
        let name = command.name().to_uppercase();
        self.commands.insert(name, command);
    }

    /// 执行指定的命令
    pub fn execute(&self, command_name: &str, args: &[String]) -> Result<String> {
        let name = command_name.to_uppercase();
        match self.commands.get(&name) {
            Some(command) => command.execute(args),
            None => Ok(format!(
                "(error) unknown command '{}', type HELP for available commands",
                command_name
            )),
        }
    }

    /// 获取所有注册的命令名称（按字典序）
    pub fn command_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .commands
            .values()
            .map(|command| command.name())
            .collect();
        names.sort_unstable();
        names
    }

    /// 检查命令是否存在
    pub fn has_command(&self, command_name: &str) -> bool {
        let name = command_name.to_uppercase();
        self.commands.contains_key(&name)
    }

    /// 帮助文本：命令名与用法说明，按字典序
    pub fn help_text(&self) -> String {
        let mut entries: Vec<(&str, &str)> = self
            .commands
            .values()
            .map(|command| (command.name(), command.about()))
            .collect();
        entries.sort_unstable();

        let mut text = String::from("available commands:\n");
        for (name, about) in entries {
            text.push_str(&format!("  {:<10} {}\n", name.to_uppercase(), about));
        }
        text.push_str("  HELP       show this message\n");
        text.push_str("  QUIT       exit interactive mode");
        text
    }
}
