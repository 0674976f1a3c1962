use crate::external::utils::merge_adjacent;

/// 自然归并排序 - 利用输入中已经存在的升序段
///
/// 每趟扫描找出相邻的两个自然段并归并；某一趟没有发生任何归并时
/// 说明只剩一个段，排序完成。对接近有序的输入趟数远少于 log n。
pub fn sort<T: Ord + Clone>(arr: &mut [T]) {
    let n = arr.len();
    if n <= 1 {
        return;
    }

    let mut temp = arr.to_vec();

    loop {
        let mut merged_any = false;
        let mut left = 0;

        while left < n - 1 {
            // 第一个自然段：arr[left..=mid]，升序关系断开处结束
            let mut mid = left;
            while mid < n - 1 && arr[mid] <= arr[mid + 1] {
                mid += 1;
            }

            // 第一个段已经到达末尾，本趟没有可配对的第二段了
            if mid == n - 1 {
                break;
            }

            // 第二个自然段：arr[mid+1..=right]
            let mut right = mid + 1;
            while right < n - 1 && arr[right] <= arr[right + 1] {
                right += 1;
            }

            merge_adjacent(arr, &mut temp, left, mid, right);
            merged_any = true;

            // 继续寻找下一对自然段
            left = right + 1;
        }

        if !merged_any {
            break;
        }
    }
}
