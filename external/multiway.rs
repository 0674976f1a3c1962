use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::warn;

use crate::external::Run;

/// 平衡多路归并排序 - 把输入切成 k 个段分别排序，再一次 k 路归并
///
/// 模拟外部排序的平衡归并阶段：k 台设备各提供一个有序段，
/// 用最小堆挑选全局最小元素。k <= 1 时回退为二路归并。
pub fn merge_sort<T: Ord + Clone>(data: &[T], k: usize) -> Vec<T> {
    let n = data.len();
    if n <= 1 {
        return data.to_vec();
    }

    let k = if k <= 1 {
        warn!(k, "invalid fan-in for multiway merging, falling back to 2");
        2
    } else {
        k
    };

    // 每段大小向上取整，保证恰好 k 个（或更少）段
    let chunk_size = (n + k - 1) / k;
    let runs: Vec<Run<T>> = data
        .chunks(chunk_size)
        .map(|chunk| {
            let mut run = chunk.to_vec();
            run.sort();
            run
        })
        .collect();

    merge_runs(&runs)
}

/// k 路归并内核 - 用最小堆在所有段之间反复选出下一个最小元素
///
/// 堆中保存 (值, 段下标, 段内偏移)，值相等时按段下标先后出堆。
/// 空段在建堆时被跳过。
pub fn merge_runs<T: Ord + Clone>(runs: &[Run<T>]) -> Vec<T> {
    let total: usize = runs.iter().map(Vec::len).sum();
    let mut result = Vec::with_capacity(total);

    let mut heap = BinaryHeap::new();
    for (run_idx, run) in runs.iter().enumerate() {
        if let Some(first) = run.first() {
            heap.push(Reverse((first.clone(), run_idx, 0usize)));
        }
    }

    while let Some(Reverse((value, run_idx, offset))) = heap.pop() {
        result.push(value);

        // 该段还有剩余元素时，把下一个补进堆里
        let next = offset + 1;
        if let Some(v) = runs[run_idx].get(next) {
            heap.push(Reverse((v.clone(), run_idx, next)));
        }
    }

    result
}
