use thiserror::Error;

/// 算法与演示命令相关的错误类型
#[derive(Debug, Error)]
pub enum AlgoError {
    /// 无效的参数（包含参数名和原因）
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// 无效的命令参数（包含位置和原因）
    #[error("Invalid argument at position {index}: {reason}")]
    InvalidArgument { index: usize, reason: String },

    /// 图中不存在的节点
    #[error("Unknown node `{0}`")]
    UnknownNode(String),

    /// 空图无法计算生成树
    #[error("Graph has no nodes")]
    EmptyGraph,

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 序列化错误
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
