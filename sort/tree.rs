/// 二叉搜索树节点
#[derive(Debug)]
struct Node<T> {
    key: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

/// 树排序 - 把所有元素插入二叉搜索树，再做中序遍历收集
///
/// 不做平衡，退化输入（已有序）会形成链表导致 O(n^2)。
/// 重复元素插入右子树，中序遍历后保持原有相对顺序。
pub fn sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    if arr.is_empty() {
        return Vec::new();
    }

    let mut root: Option<Box<Node<T>>> = None;
    for item in arr {
        insert(&mut root, item.clone());
    }

    let mut sorted = Vec::with_capacity(arr.len());
    in_order(&root, &mut sorted);
    sorted
}

fn insert<T: Ord>(node: &mut Option<Box<Node<T>>>, key: T) {
    match node {
        None => {
            *node = Some(Box::new(Node {
                key,
                left: None,
                right: None,
            }));
        }
        Some(n) => {
            if key < n.key {
                insert(&mut n.left, key);
            } else {
                insert(&mut n.right, key);
            }
        }
    }
}

/// 中序遍历：左子树、当前节点、右子树
fn in_order<T: Clone>(node: &Option<Box<Node<T>>>, out: &mut Vec<T>) {
    if let Some(n) = node {
        in_order(&n.left, out);
        out.push(n.key.clone());
        in_order(&n.right, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let arr = vec![7, 3, 9, 1, 5, 8, 2];
        assert_eq!(sort(&arr), vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_larger() {
        let arr = vec![64, 25, 12, 22, 11, 90, 78, 34, 45, 56, 1, 89];
        assert_eq!(
            sort(&arr),
            vec![1, 11, 12, 22, 25, 34, 45, 56, 64, 78, 89, 90]
        );
    }

    #[test]
    fn test_already_sorted_degenerate_tree() {
        let arr = vec![1, 2, 3, 4, 5];
        assert_eq!(sort(&arr), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_duplicates() {
        let arr = vec![4, 2, 4, 1, 2];
        assert_eq!(sort(&arr), vec![1, 2, 2, 4, 4]);
    }

    #[test]
    fn test_empty_and_single() {
        let empty: Vec<i32> = vec![];
        assert!(sort(&empty).is_empty());
        assert_eq!(sort(&[7]), vec![7]);
    }
}
