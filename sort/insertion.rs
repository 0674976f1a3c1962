/// 插入排序 - 把每个元素插入到左侧已排序部分的正确位置
///
/// 时间复杂度 O(n^2)，对接近有序的输入退化为接近 O(n)。
pub fn sort<T: Ord>(arr: &mut [T]) {
    // 从第二个元素开始，左侧 arr[..i] 始终保持有序
    for i in 1..arr.len() {
        let mut j = i;
        // 向左交换，直到 arr[j] 落在正确位置
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}
