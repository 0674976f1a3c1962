use crate::external::utils::merge_adjacent;

/// 直接归并排序（自底向上）- 段宽从 1 开始每趟翻倍
///
/// 每趟把相邻的两个宽度为 width 的子段归并，log n 趟后整体有序。
/// 模拟外部排序中对定长段的逐趟归并。
pub fn sort<T: Ord + Clone>(arr: &mut [T]) {
    let n = arr.len();
    if n <= 1 {
        return;
    }

    let mut temp = arr.to_vec();
    let mut width = 1;

    while width < n {
        // left 指向每一对待归并子段中左段的开头
        let mut left = 0;
        while left + width < n {
            let mid = left + width - 1;
            let right = usize::min(left + 2 * width - 1, n - 1);
            merge_adjacent(arr, &mut temp, left, mid, right);
            left += 2 * width;
        }
        width *= 2;
    }
}
