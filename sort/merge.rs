/// 归并排序 - 自顶向下递归，返回新分配的有序 Vec
///
/// 稳定排序，额外空间 O(n)。原地的自底向上版本见 `external::straight`。
pub fn sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }

    let mid = arr.len() / 2;
    let left = sort(&arr[..mid]);
    let right = sort(&arr[mid..]);

    merge(&left, &right)
}

/// 合并两个有序切片为一个新的有序 Vec
///
/// 相等时先取左侧元素，保证稳定性。
fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            result.push(left[i].clone());
            i += 1;
        } else {
            result.push(right[j].clone());
            j += 1;
        }
    }

    // 两侧最多只有一侧还有剩余，直接接上
    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);

    result
}
