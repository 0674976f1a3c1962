pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod external;
pub mod graph;
pub mod sort;

use std::error::Error;

// 重新导出主要的公共接口
pub use error::AlgoError;
pub use graph::{Edge, Graph, ShortestPaths, SpanningTree};

// 重新导出常用类型，便于二进制文件使用
pub use client::{CliArgs, OutputFormatter};
pub use commands::CommandRegistry;
pub use config::Algo42Config;

pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;
