/// 把 arr[left..=mid] 与 arr[mid+1..=right] 两个有序子段归并
///
/// 先归并到 temp 的对应区间，再整体拷回 arr。相等时先取左侧，
/// straight 与 natural 两种归并共用这一内核。
pub(crate) fn merge_adjacent<T: Ord + Clone>(
    arr: &mut [T],
    temp: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
) {
    let mut i = left;
    let mut j = mid + 1;
    let mut k = left;

    while i <= mid && j <= right {
        if arr[i] <= arr[j] {
            temp[k] = arr[i].clone();
            i += 1;
        } else {
            temp[k] = arr[j].clone();
            j += 1;
        }
        k += 1;
    }

    while i <= mid {
        temp[k] = arr[i].clone();
        i += 1;
        k += 1;
    }

    while j <= right {
        temp[k] = arr[j].clone();
        j += 1;
        k += 1;
    }

    arr[left..=right].clone_from_slice(&temp[left..=right]);
}
