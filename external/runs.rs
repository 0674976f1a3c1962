use derive_more::Display;
use tracing::trace;

use crate::error::AlgoError;
use crate::external::Device;

/// 初始段的分布策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Distribution {
    /// 轮转分布到所有设备，各设备段数尽量均衡（用于平衡多路归并）
    #[display(fmt = "balanced")]
    Balanced,
    /// 偏斜分布：只轮转前 k-1 台设备，最后一台留空作为归并输出。
    /// 真正的多相归并按广义斐波那契比例分布，这里是简化模拟。
    #[display(fmt = "polyphase")]
    PolyphaseSkewed,
}

impl std::str::FromStr for Distribution {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "balanced" => Ok(Distribution::Balanced),
            "polyphase" => Ok(Distribution::PolyphaseSkewed),
            other => Err(AlgoError::InvalidParameter {
                name: "strategy",
                reason: format!("`{}` is not a distribution strategy (balanced|polyphase)", other),
            }),
        }
    }
}

/// 创建并分布初始段
///
/// 把输入按 buffer_size 切块，每块在内存中排序成一个段，
/// 再按策略把段分布到 num_devices 台输出设备上。
/// 输入为空时返回 num_devices 台空设备。
pub fn distribute<T: Ord + Clone>(
    data: &[T],
    buffer_size: usize,
    num_devices: usize,
    strategy: Distribution,
) -> Result<Vec<Device<T>>, AlgoError> {
    if buffer_size == 0 {
        return Err(AlgoError::InvalidParameter {
            name: "buffer_size",
            reason: "must be greater than 0".to_string(),
        });
    }
    if num_devices == 0 {
        return Err(AlgoError::InvalidParameter {
            name: "num_devices",
            reason: "need at least one output device".to_string(),
        });
    }

    let mut devices: Vec<Device<T>> = vec![Vec::new(); num_devices];
    if data.is_empty() {
        return Ok(devices);
    }

    // cursor 是轮转游标，两种策略都用它决定下一台目标设备
    let mut cursor = 0;
    for (run_idx, block) in data.chunks(buffer_size).enumerate() {
        // 内存中的"内部排序"阶段：真实场景是读入-排序-写回磁盘
        let mut run = block.to_vec();
        run.sort();

        let target = match strategy {
            Distribution::Balanced => {
                let t = cursor % num_devices;
                cursor += 1;
                t
            }
            Distribution::PolyphaseSkewed => {
                if num_devices == 1 {
                    0
                } else {
                    let t = cursor % (num_devices - 1);
                    cursor += 1;
                    t
                }
            }
        };

        trace!(run = run_idx, device = target, len = run.len(), "distributed initial run");
        devices[target].push(run);
    }

    Ok(devices)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIG_DATA: [i32; 20] = [
        38, 27, 43, 3, 9, 82, 10, 1, 56, 74, 15, 34, 61, 8, 99, 21, 5, 49, 7, 20,
    ];

    #[test]
    fn test_balanced_round_robin() {
        let devices = distribute(&BIG_DATA, 4, 3, Distribution::Balanced).unwrap();
        assert_eq!(devices.len(), 3);
        // 20 个元素、缓冲区 4 → 5 个段，轮转后段数为 2/2/1
        assert_eq!(devices[0].len(), 2);
        assert_eq!(devices[1].len(), 2);
        assert_eq!(devices[2].len(), 1);
        // 每个段内部有序
        for device in &devices {
            for run in device {
                assert!(run.windows(2).all(|w| w[0] <= w[1]));
            }
        }
        // 第一个段是前 4 个元素排序后的结果
        assert_eq!(devices[0][0], vec![3, 27, 38, 43]);
    }

    #[test]
    fn test_polyphase_leaves_last_device_empty() {
        let devices = distribute(&BIG_DATA, 4, 3, Distribution::PolyphaseSkewed).unwrap();
        assert_eq!(devices.len(), 3);
        assert!(devices[2].is_empty());
        assert_eq!(devices[0].len() + devices[1].len(), 5);
    }

    #[test]
    fn test_polyphase_single_device() {
        let devices = distribute(&BIG_DATA, 10, 1, Distribution::PolyphaseSkewed).unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].len(), 2);
    }

    #[test]
    fn test_larger_buffer_fewer_runs() {
        let devices = distribute(&BIG_DATA, 10, 2, Distribution::Balanced).unwrap();
        let total_runs: usize = devices.iter().map(Vec::len).sum();
        assert_eq!(total_runs, 2);
    }

    #[test]
    fn test_empty_input() {
        let devices = distribute::<i32>(&[], 4, 3, Distribution::Balanced).unwrap();
        assert_eq!(devices.len(), 3);
        assert!(devices.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_zero_buffer_rejected() {
        let err = distribute(&BIG_DATA, 0, 3, Distribution::Balanced).unwrap_err();
        assert!(matches!(err, AlgoError::InvalidParameter { name: "buffer_size", .. }));
    }

    #[test]
    fn test_zero_devices_rejected() {
        let err = distribute(&BIG_DATA, 4, 0, Distribution::Balanced).unwrap_err();
        assert!(matches!(err, AlgoError::InvalidParameter { name: "num_devices", .. }));
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("balanced".parse::<Distribution>().unwrap(), Distribution::Balanced);
        assert_eq!("POLYPHASE".parse::<Distribution>().unwrap(), Distribution::PolyphaseSkewed);
        assert!("fibonacci".parse::<Distribution>().is_err());
    }
}
