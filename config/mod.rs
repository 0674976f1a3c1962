use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// algo42 演示程序配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Algo42Config {
    /// 演示命令的默认参数
    pub demo: DemoConfig,

    /// 日志配置
    pub logging: LoggingConfig,
}

/// 演示命令的默认参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// 未显式给出数据时随机生成的数据集大小
    #[serde(default = "default_dataset_size")]
    pub dataset_size: usize,

    /// 随机数据集的种子，保证演示可复现
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// 平衡多路归并的默认路数
    #[serde(default = "default_multiway_fanin")]
    pub multiway_fanin: usize,

    /// 外部排序模拟的内存缓冲区大小（元素个数）
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    /// 外部排序模拟的输出设备/磁带数量
    #[serde(default = "default_devices")]
    pub devices: usize,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别：trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 日志输出：stdout, file
    #[serde(default = "default_log_output")]
    pub output: String,

    /// 日志文件路径（当 output = file 时）
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// 默认值函数
// ============================================================================

fn default_dataset_size() -> usize {
    32
}

fn default_seed() -> u64 {
    42
}

fn default_multiway_fanin() -> usize {
    3
}

fn default_buffer_size() -> usize {
    4
}

fn default_devices() -> usize {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_output() -> String {
    "stdout".to_string()
}

// ============================================================================
// 实现
// ============================================================================

impl Default for Algo42Config {
    fn default() -> Self {
        Self {
            demo: DemoConfig::default(),
            logging: LoggingConfig {
                level: default_log_level(),
                output: default_log_output(),
                log_file: None,
            },
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            dataset_size: default_dataset_size(),
            seed: default_seed(),
            multiway_fanin: default_multiway_fanin(),
            buffer_size: default_buffer_size(),
            devices: default_devices(),
        }
    }
}

impl Algo42Config {
    /// 从文件加载配置
    ///
    /// 配置加载顺序（优先级从低到高）：
    /// 1. 默认配置（内嵌的 default.toml）
    /// 2. 用户配置文件（可选）
    /// 3. 环境变量（ALGO42__ 前缀，使用双下划线分隔嵌套）
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            // 1. 加载默认配置（内嵌）
            .add_source(config::File::from_str(
                include_str!("default.toml"),
                config::FileFormat::Toml,
            ))
            // 2. 加载用户配置（可选，不存在不报错）
            .add_source(config::File::with_name(path).required(false))
            // 3. 加载环境变量（ALGO42__ 前缀，双下划线分隔嵌套）
            .add_source(config::Environment::with_prefix("ALGO42").separator("__"))
            .build()
            .map_err(|e| format!("Failed to load config: {}", e))?;

        Ok(settings
            .try_deserialize()
            .map_err(|e| format!("Failed to parse config: {}", e))?)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &str) -> crate::Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, toml_string)
            .map_err(|e| format!("Failed to write config file: {}", e))?;
        Ok(())
    }

    /// 验证配置
    pub fn validate(&self) -> Result<(), String> {
        // 验证日志级别
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(format!(
                    "Invalid log level `{}` (expected trace|debug|info|warn|error)",
                    other
                ));
            }
        }

        // 验证日志输出
        match self.logging.output.as_str() {
            "stdout" => {}
            "file" => {
                if self.logging.log_file.is_none() {
                    return Err("Log output is `file` but no log_file is set".to_string());
                }
            }
            other => {
                return Err(format!(
                    "Invalid log output `{}` (expected stdout|file)",
                    other
                ));
            }
        }

        // 验证演示参数
        if self.demo.dataset_size == 0 {
            return Err("demo.dataset_size must be greater than 0".to_string());
        }
        if self.demo.buffer_size == 0 {
            return Err("demo.buffer_size must be greater than 0".to_string());
        }
        if self.demo.devices < 2 {
            return Err("demo.devices must be at least 2".to_string());
        }
        if self.demo.multiway_fanin < 2 {
            return Err("demo.multiway_fanin must be at least 2".to_string());
        }

        Ok(())
    }

    /// 打印配置摘要
    pub fn print_summary(&self) {
        println!("📋 Configuration:");
        println!(
            "   demo: size={}, seed={}, fan-in={}, buffer={}, devices={}",
            self.demo.dataset_size,
            self.demo.seed,
            self.demo.multiway_fanin,
            self.demo.buffer_size,
            self.demo.devices
        );
        println!(
            "   logging: level={}, output={}",
            self.logging.level, self.logging.output
        );
    }
}
