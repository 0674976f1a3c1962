/// 基数排序 - 对非负整数按十进制位从低到高做稳定的计数排序
///
/// 每一轮按当前位（个位、十位、百位……）重排，位数处理完后整体有序。
pub fn sort(arr: &mut [u32]) {
    let Some(&max) = arr.iter().max() else {
        return;
    };

    // exp 依次取 1, 10, 100, ...，用 u64 避免最后一次乘 10 溢出
    let mut exp: u64 = 1;
    while u64::from(max) / exp > 0 {
        counting_sort_by_digit(arr, exp);
        exp *= 10;
    }
}

/// 按 (v / exp) % 10 这一位做稳定的计数排序
fn counting_sort_by_digit(arr: &mut [u32], exp: u64) {
    let digit = |v: u32| (u64::from(v) / exp % 10) as usize;

    // 统计每个数字出现的次数
    let mut count = [0usize; 10];
    for &v in arr.iter() {
        count[digit(v)] += 1;
    }

    // 前缀和：count[d] 变成数字 d 在输出中的结束位置
    for d in 1..10 {
        count[d] += count[d - 1];
    }

    // 从后向前放置，保证同一位相等的元素保持原有顺序（稳定性）
    let mut output = vec![0u32; arr.len()];
    for &v in arr.iter().rev() {
        let d = digit(v);
        count[d] -= 1;
        output[count[d]] = v;
    }

    arr.copy_from_slice(&output);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut arr = vec![170, 45, 75, 90, 802, 24, 2, 66];
        sort(&mut arr);
        assert_eq!(arr, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn test_mixed_digit_lengths() {
        let mut arr = vec![100, 4, 10, 5000, 2, 70];
        sort(&mut arr);
        assert_eq!(arr, vec![2, 4, 10, 70, 100, 5000]);
    }

    #[test]
    fn test_larger() {
        let mut arr = vec![88, 1, 999, 10, 5, 202, 345, 12, 777];
        sort(&mut arr);
        assert_eq!(arr, vec![1, 5, 10, 12, 88, 202, 345, 777, 999]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<u32> = vec![];
        sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![42];
        sort(&mut single);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_all_zero() {
        let mut arr = vec![0, 0, 0];
        sort(&mut arr);
        assert_eq!(arr, vec![0, 0, 0]);
    }

    #[test]
    fn test_max_value() {
        // u32::MAX 有 10 位十进制数字，exp 的最后一轮不能溢出
        let mut arr = vec![u32::MAX, 0, 1, u32::MAX - 1];
        sort(&mut arr);
        assert_eq!(arr, vec![0, 1, u32::MAX - 1, u32::MAX]);
    }

    #[test]
    fn test_duplicates() {
        let mut arr = vec![5, 3, 5, 3, 5];
        sort(&mut arr);
        assert_eq!(arr, vec![3, 3, 5, 5, 5]);
    }
}
