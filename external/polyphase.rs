use tracing::debug;

use crate::error::AlgoError;
use crate::external::{multiway, runs, Distribution, Run};

/// 多相归并的单个归并阶段 - 把每条输入磁带贡献的一个段合并成一个输出段
pub fn merge_phase<T: Ord + Clone>(tapes: &[Run<T>]) -> Run<T> {
    multiway::merge_runs(tapes)
}

/// 多相归并排序（简化模拟）
///
/// 先做偏斜分布（最后一条磁带留空作为输出），然后反复执行归并阶段：
/// 每个阶段取每条非空磁带的队首段合并成一个更长的段，追加到当前
/// 段数最少的磁带上，直到只剩一个段。真实的多相归并按斐波那契
/// 比例分布以便各磁带同步清空，这里沿用简化的轮转分布。
pub fn sort<T: Ord + Clone>(
    data: &[T],
    buffer_size: usize,
    num_tapes: usize,
) -> Result<Vec<T>, AlgoError> {
    if num_tapes < 2 {
        return Err(AlgoError::InvalidParameter {
            name: "num_tapes",
            reason: "polyphase merging needs at least 2 tapes".to_string(),
        });
    }

    let mut tapes = runs::distribute(data, buffer_size, num_tapes, Distribution::PolyphaseSkewed)?;
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let mut phase = 0;
    loop {
        // 每条非空磁带贡献队首的一个段
        let mut phase_inputs: Vec<Run<T>> = Vec::new();
        for tape in tapes.iter_mut() {
            if !tape.is_empty() {
                phase_inputs.push(tape.remove(0));
            }
        }

        // 只剩一个段时排序完成
        if phase_inputs.len() == 1 {
            return Ok(phase_inputs.swap_remove(0));
        }

        let merged = merge_phase(&phase_inputs);
        debug!(
            phase,
            inputs = phase_inputs.len(),
            merged_len = merged.len(),
            "polyphase merge phase complete"
        );

        // 结果追加到当前段数最少的磁带，模拟"输出磁带"轮换
        let target = tapes
            .iter()
            .enumerate()
            .min_by_key(|(_, tape)| tape.len())
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        tapes[target].push(merged);
        phase += 1;
    }
}
