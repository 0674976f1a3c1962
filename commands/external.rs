use std::fmt::Write as _;

use crate::commands::sort::random_dataset;
use crate::commands::{ArgumentParser, Command};
use crate::config::DemoConfig;
use crate::external::{self, Distribution};
use crate::Result;

/// RUNS 命令 - 演示初始段的创建与分布
///
/// 用法：RUNS [buffer devices balanced|polyphase [ints...]]
pub struct RunsCommand {
    defaults: DemoConfig,
}

impl RunsCommand {
    pub fn new(defaults: DemoConfig) -> Self {
        Self { defaults }
    }
}

impl Command for RunsCommand {
    fn name(&self) -> &'static str {
        "runs"
    }

    fn about(&self) -> &'static str {
        "distribute initial runs - [buffer devices balanced|polyphase [ints...]]"
    }

    fn execute(&self, args: &[String]) -> Result<String> {
        let (buffer_size, num_devices, strategy, data) = if args.is_empty() {
            (
                self.defaults.buffer_size,
                self.defaults.devices,
                Distribution::Balanced,
                random_dataset(self.defaults.dataset_size, self.defaults.seed),
            )
        } else if args.len() >= 3 {
            let buffer = ArgumentParser::parse_usize(&args[0], 0)?;
            let devices = ArgumentParser::parse_usize(&args[1], 1)?;
            let strategy: Distribution = args[2].parse()?;
            let data = if args.len() > 3 {
                ArgumentParser::parse_integers(&args[3..])?
            } else {
                random_dataset(self.defaults.dataset_size, self.defaults.seed)
            };
            (buffer, devices, strategy, data)
        } else {
            return Err("usage: RUNS [buffer devices balanced|polyphase [ints...]]".into());
        };

        let devices = external::distribute(&data, buffer_size, num_devices, strategy)?;

        let mut output = format!(
            "strategy: {}, buffer: {}, devices: {}\n",
            strategy, buffer_size, num_devices
        );
        for (idx, device) in devices.iter().enumerate() {
            let _ = writeln!(output, "device {} ({} runs): {:?}", idx, device.len(), device);
        }
        Ok(output.trim_end().to_string())
    }
}

/// MULTIWAY 命令 - 演示平衡多路归并排序
///
/// 用法：MULTIWAY [k [ints...]]
pub struct MultiwayCommand {
    defaults: DemoConfig,
}

impl MultiwayCommand {
    pub fn new(defaults: DemoConfig) -> Self {
        Self { defaults }
    }
}

impl Command for MultiwayCommand {
    fn name(&self) -> &'static str {
        "multiway"
    }

    fn about(&self) -> &'static str {
        "balanced multiway merge sort - [k [ints...]]"
    }

    fn execute(&self, args: &[String]) -> Result<String> {
        let (k, data) = if args.is_empty() {
            (
                self.defaults.multiway_fanin,
                random_dataset(self.defaults.dataset_size, self.defaults.seed),
            )
        } else {
            let k = ArgumentParser::parse_usize(&args[0], 0)?;
            let data = if args.len() > 1 {
                ArgumentParser::parse_integers(&args[1..])?
            } else {
                random_dataset(self.defaults.dataset_size, self.defaults.seed)
            };
            (k, data)
        };

        let sorted = external::multiway::merge_sort(&data, k);
        Ok(format!(
            "fan-in: {}\ninput : {:?}\nsorted: {:?} (multiway)",
            k, data, sorted
        ))
    }
}

/// POLYPHASE 命令 - 演示多相归并排序
///
/// 用法：POLYPHASE [buffer tapes [ints...]]
pub struct PolyphaseCommand {
    defaults: DemoConfig,
}

impl PolyphaseCommand {
    pub fn new(defaults: DemoConfig) -> Self {
        Self { defaults }
    }
}

impl Command for PolyphaseCommand {
    fn name(&self) -> &'static str {
        "polyphase"
    }

    fn about(&self) -> &'static str {
        "polyphase merge sort - [buffer tapes [ints...]]"
    }

    fn execute(&self, args: &[String]) -> Result<String> {
        let (buffer_size, num_tapes, data) = if args.is_empty() {
            (
                self.defaults.buffer_size,
                self.defaults.devices,
                random_dataset(self.defaults.dataset_size, self.defaults.seed),
            )
        } else if args.len() >= 2 {
            let buffer = ArgumentParser::parse_usize(&args[0], 0)?;
            let tapes = ArgumentParser::parse_usize(&args[1], 1)?;
            let data = if args.len() > 2 {
                ArgumentParser::parse_integers(&args[2..])?
            } else {
                random_dataset(self.defaults.dataset_size, self.defaults.seed)
            };
            (buffer, tapes, data)
        } else {
            return Err("usage: POLYPHASE [buffer tapes [ints...]]".into());
        };

        let sorted = external::polyphase::sort(&data, buffer_size, num_tapes)?;
        Ok(format!(
            "buffer: {}, tapes: {}\ninput : {:?}\nsorted: {:?} (polyphase)",
            buffer_size, num_tapes, data, sorted
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_runs_with_explicit_args() {
        let cmd = RunsCommand::new(DemoConfig::default());
        let output = cmd
            .execute(&strings(&["2", "2", "balanced", "4", "3", "2", "1"]))
            .unwrap();
        assert!(output.contains("strategy: balanced"));
        assert!(output.contains("device 0"));
        assert!(output.contains("device 1"));
        assert!(output.contains("[3, 4]"));
    }

    #[test]
    fn test_runs_defaults() {
        let cmd = RunsCommand::new(DemoConfig::default());
        let output = cmd.execute(&[]).unwrap();
        assert!(output.contains("strategy: balanced"));
        assert!(output.contains("device 2"));
    }

    #[test]
    fn test_runs_usage_error() {
        let cmd = RunsCommand::new(DemoConfig::default());
        assert!(cmd.execute(&strings(&["4"])).is_err());
    }

    #[test]
    fn test_runs_polyphase_strategy() {
        let cmd = RunsCommand::new(DemoConfig::default());
        let output = cmd
            .execute(&strings(&["2", "3", "polyphase", "6", "5", "4", "3", "2", "1"]))
            .unwrap();
        assert!(output.contains("strategy: polyphase"));
        // 偏斜分布：最后一台设备留空
        assert!(output.contains("device 2 (0 runs)"));
    }

    #[test]
    fn test_multiway_sorts() {
        let cmd = MultiwayCommand::new(DemoConfig::default());
        let output = cmd.execute(&strings(&["3", "9", "1", "7", "3", "5"])).unwrap();
        assert!(output.contains("fan-in: 3"));
        assert!(output.contains("sorted: [1, 3, 5, 7, 9]"));
    }

    #[test]
    fn test_polyphase_sorts() {
        let cmd = PolyphaseCommand::new(DemoConfig::default());
        let output = cmd
            .execute(&strings(&["2", "3", "9", "1", "7", "3", "5", "2"]))
            .unwrap();
        assert!(output.contains("sorted: [1, 2, 3, 5, 7, 9]"));
    }

    #[test]
    fn test_polyphase_rejects_single_tape() {
        let cmd = PolyphaseCommand::new(DemoConfig::default());
        assert!(cmd.execute(&strings(&["4", "1", "3", "2", "1"])).is_err());
    }
}
