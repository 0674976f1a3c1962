use crate::error::AlgoError;

/// 命令参数解析辅助
pub struct ArgumentParser;

impl ArgumentParser {
    /// 把一串参数解析为有符号整数数据集
    pub fn parse_integers(args: &[String]) -> Result<Vec<i64>, AlgoError> {
        args.iter()
            .enumerate()
            .map(|(index, raw)| {
                raw.parse::<i64>().map_err(|_| AlgoError::InvalidArgument {
                    index,
                    reason: format!("`{}` is not an integer", raw),
                })
            })
            .collect()
    }

    /// 把一串参数解析为非负整数数据集（基数排序用）
    pub fn parse_unsigned(args: &[String]) -> Result<Vec<u32>, AlgoError> {
        args.iter()
            .enumerate()
            .map(|(index, raw)| {
                raw.parse::<u32>().map_err(|_| AlgoError::InvalidArgument {
                    index,
                    reason: format!("`{}` is not a non-negative integer", raw),
                })
            })
            .collect()
    }

    /// 解析单个 usize 参数（缓冲区大小、设备数等）
    pub fn parse_usize(raw: &str, index: usize) -> Result<usize, AlgoError> {
        raw.parse::<usize>().map_err(|_| AlgoError::InvalidArgument {
            index,
            reason: format!("`{}` is not a positive integer", raw),
        })
    }
}
