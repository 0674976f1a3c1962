/// 冒泡排序 - 相邻交换，每趟把最大的剩余元素"冒"到末尾
///
/// 带提前退出优化：某一趟没有发生任何交换时说明已经有序。
pub fn sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    if n <= 1 {
        return;
    }

    for i in 0..n - 1 {
        let mut swapped = false;

        // 每趟之后 arr[n - 1 - i..] 已经就位，不再比较
        for j in 0..n - 1 - i {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}
