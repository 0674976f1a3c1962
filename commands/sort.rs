use derive_more::Display;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::commands::{ArgumentParser, Command};
use crate::config::DemoConfig;
use crate::Result;
use crate::{external, sort};

/// 排序算法种类，每种算法注册为一个同名命令
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SortKind {
    #[display(fmt = "insertion")]
    Insertion,
    #[display(fmt = "bubble")]
    Bubble,
    #[display(fmt = "selection")]
    Selection,
    #[display(fmt = "quick")]
    Quick,
    #[display(fmt = "merge")]
    Merge,
    #[display(fmt = "tree")]
    Tree,
    #[display(fmt = "radix")]
    Radix,
    #[display(fmt = "straight")]
    Straight,
    #[display(fmt = "natural")]
    Natural,
}

impl SortKind {
    /// 全部排序算法，注册命令时遍历
    pub fn all() -> &'static [SortKind] {
        &[
            SortKind::Insertion,
            SortKind::Bubble,
            SortKind::Selection,
            SortKind::Quick,
            SortKind::Merge,
            SortKind::Tree,
            SortKind::Radix,
            SortKind::Straight,
            SortKind::Natural,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            SortKind::Insertion => "insertion",
            SortKind::Bubble => "bubble",
            SortKind::Selection => "selection",
            SortKind::Quick => "quick",
            SortKind::Merge => "merge",
            SortKind::Tree => "tree",
            SortKind::Radix => "radix",
            SortKind::Straight => "straight",
            SortKind::Natural => "natural",
        }
    }

    fn about(self) -> &'static str {
        match self {
            SortKind::Insertion => "insertion sort - [ints...]",
            SortKind::Bubble => "bubble sort with early exit - [ints...]",
            SortKind::Selection => "selection sort - [ints...]",
            SortKind::Quick => "quicksort (Lomuto partition) - [ints...]",
            SortKind::Merge => "top-down merge sort - [ints...]",
            SortKind::Tree => "binary search tree sort - [ints...]",
            SortKind::Radix => "LSD radix sort - [non-negative ints...]",
            SortKind::Straight => "bottom-up (straight) merge sort - [ints...]",
            SortKind::Natural => "natural merge sort - [ints...]",
        }
    }
}

/// 按种子生成可复现的随机数据集
pub(crate) fn random_dataset(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(0..1000)).collect()
}

/// 排序演示命令：参数是整数数据集，省略时用配置的种子随机生成
pub struct SortCommand {
    kind: SortKind,
    defaults: DemoConfig,
}

impl SortCommand {
    pub fn new(kind: SortKind, defaults: DemoConfig) -> Self {
        Self { kind, defaults }
    }

    /// 基数排序只接受非负整数，单独走 u32 通道
    fn execute_radix(&self, args: &[String]) -> Result<String> {
        let mut data: Vec<u32> = if args.is_empty() {
            random_dataset(self.defaults.dataset_size, self.defaults.seed)
                .into_iter()
                .map(|v| v as u32)
                .collect()
        } else {
            ArgumentParser::parse_unsigned(args)?
        };

        let input = format!("{:?}", data);
        sort::radix::sort(&mut data);
        Ok(format!("input : {}\nsorted: {:?} ({})", input, data, self.kind))
    }
}

impl Command for SortCommand {
    fn name(&self) -> &'static str {
        self.kind.name()
    }

    fn about(&self) -> &'static str {
        self.kind.about()
    }

    fn execute(&self, args: &[String]) -> Result<String> {
        if self.kind == SortKind::Radix {
            return self.execute_radix(args);
        }

        let mut data: Vec<i64> = if args.is_empty() {
            random_dataset(self.defaults.dataset_size, self.defaults.seed)
        } else {
            ArgumentParser::parse_integers(args)?
        };

        let input = format!("{:?}", data);
        match self.kind {
            SortKind::Insertion => sort::insertion::sort(&mut data),
            SortKind::Bubble => sort::bubble::sort(&mut data),
            SortKind::Selection => sort::selection::sort(&mut data),
            SortKind::Quick => sort::quick::sort(&mut data),
            SortKind::Merge => data = sort::merge::sort(&data),
            SortKind::Tree => data = sort::tree::sort(&data),
            SortKind::Straight => external::straight::sort(&mut data),
            SortKind::Natural => external::natural::sort(&mut data),
            SortKind::Radix => unreachable!("radix handled above"),
        }

        Ok(format!("input : {}\nsorted: {:?} ({})", input, data, self.kind))
    }
}
