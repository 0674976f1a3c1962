/// 快速排序 - 递归分治，Lomuto 分区，以区间最后一个元素为枢轴
///
/// 平均 O(n log n)；对已经有序的输入这种枢轴选择会退化到 O(n^2)，
/// 这里保留教科书写法，不做三数取中等改进。
pub fn sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let high = arr.len() - 1;
    quick_sort_recursive(arr, 0, high);
}

fn quick_sort_recursive<T: Ord>(arr: &mut [T], low: usize, high: usize) {
    if low < high {
        // pi 是分区后枢轴的最终位置，arr[pi] 已经就位
        let pi = partition(arr, low, high);

        // 分别递归枢轴左右两侧；pi == low 时左侧为空
        if pi > low {
            quick_sort_recursive(arr, low, pi - 1);
        }
        if pi < high {
            quick_sort_recursive(arr, pi + 1, high);
        }
    }
}

/// Lomuto 分区 - 把小于等于枢轴的元素换到左侧，返回枢轴的最终下标
fn partition<T: Ord>(arr: &mut [T], low: usize, high: usize) -> usize {
    // i 指向下一个"小于等于枢轴"元素应放的位置
    let mut i = low;
    for j in low..high {
        if arr[j] <= arr[high] {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, high);
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut arr = vec![10, 7, 8, 9, 1, 5];
        sort(&mut arr);
        assert_eq!(arr, vec![1, 5, 7, 8, 9, 10]);
    }

    #[test]
    fn test_larger() {
        let mut arr = vec![64, 25, 12, 22, 11, 90, 78, 34, 45, 56, 1, 89];
        sort(&mut arr);
        assert_eq!(arr, vec![1, 11, 12, 22, 25, 34, 45, 56, 64, 78, 89, 90]);
    }

    #[test]
    fn test_already_sorted_worst_case() {
        // 已排序输入是这种枢轴选择的最坏情况，但结果必须仍然正确
        let mut arr: Vec<i32> = (1..=100).collect();
        sort(&mut arr);
        assert_eq!(arr, (1..=100).collect::<Vec<i32>>());
    }

    #[test]
    fn test_reverse_sorted() {
        let mut arr: Vec<i32> = (1..=50).rev().collect();
        sort(&mut arr);
        assert_eq!(arr, (1..=50).collect::<Vec<i32>>());
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i32> = vec![];
        sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![7];
        sort(&mut single);
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn test_all_equal() {
        let mut arr = vec![5; 20];
        sort(&mut arr);
        assert_eq!(arr, vec![5; 20]);
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut arr = vec![3, 8, 1, 5];
        let pi = partition(&mut arr, 0, 3);
        // 枢轴 5 就位，左侧都不大于它，右侧都大于它
        assert_eq!(arr[pi], 5);
        assert!(arr[..pi].iter().all(|&v| v <= 5));
        assert!(arr[pi + 1..].iter().all(|&v| v > 5));
    }
}
