use avl_forest::util::{insert_left, insert_right};
use avl_forest::{equal_paths, AvlTree, BinarySearchTree, TreeNode};

type N = TreeNode<i32, ()>;

/// Arena of `len` detached nodes keyed `0..len`.
fn nodes(len: usize) -> Vec<N> {
    (0..len as i32).map(|k| TreeNode::new(k, ())).collect()
}

#[test]
fn single_node_matrix() {
    let a = nodes(1);
    assert!(equal_paths(&a, Some(0)));
    assert!(equal_paths::<N>(&[], None));
}

#[test]
fn single_child_matrix() {
    let mut a = nodes(2);
    insert_left(&mut a, 1, 0);
    assert!(equal_paths(&a, Some(0)));

    let mut a = nodes(2);
    insert_right(&mut a, 1, 0);
    assert!(equal_paths(&a, Some(0)));
}

#[test]
fn two_leaves_matrix() {
    let mut a = nodes(3);
    insert_left(&mut a, 1, 0);
    insert_right(&mut a, 2, 0);
    assert!(equal_paths(&a, Some(0)));
}

#[test]
fn perfect_three_levels_matrix() {
    let mut a = nodes(7);
    insert_left(&mut a, 1, 0);
    insert_right(&mut a, 2, 0);
    insert_left(&mut a, 3, 1);
    insert_right(&mut a, 4, 1);
    insert_left(&mut a, 5, 2);
    insert_right(&mut a, 6, 2);
    assert!(equal_paths(&a, Some(0)));
}

#[test]
fn shallow_leaf_matrix() {
    // 0 -> (1 leaf, 2 -> (3, 4))
    let mut a = nodes(5);
    insert_left(&mut a, 1, 0);
    insert_right(&mut a, 2, 0);
    insert_left(&mut a, 3, 2);
    insert_right(&mut a, 4, 2);
    assert!(!equal_paths(&a, Some(0)));

    // 0 -> (1 -> (-, 3), 2 leaf)
    let mut a = nodes(4);
    insert_left(&mut a, 1, 0);
    insert_right(&mut a, 2, 0);
    insert_right(&mut a, 3, 1);
    assert!(!equal_paths(&a, Some(0)));
}

#[test]
fn deep_mismatch_matrix() {
    //  0
    //   \
    //    1
    //   / \
    //  2   3
    //     / \
    //    4   5
    //   / \
    //  6   7
    //  /
    // 8
    let mut a = nodes(9);
    insert_right(&mut a, 1, 0);
    insert_left(&mut a, 2, 1);
    insert_right(&mut a, 3, 1);
    insert_left(&mut a, 4, 3);
    insert_right(&mut a, 5, 3);
    insert_left(&mut a, 6, 4);
    insert_right(&mut a, 7, 4);
    insert_left(&mut a, 8, 6);
    assert!(!equal_paths(&a, Some(0)));
}

#[test]
fn tree_method_matrix() {
    let full: AvlTree<i32, ()> = (1..=15).map(|k| (k, ())).collect();
    assert!(full.has_equal_paths());

    let lopsided: AvlTree<i32, ()> = (1..=5).map(|k| (k, ())).collect();
    assert!(!lopsided.has_equal_paths());

    let chain: BinarySearchTree<i32, ()> = (1..=5).map(|k| (k, ())).collect();
    assert!(chain.has_equal_paths());
    assert!(BinarySearchTree::<i32, ()>::new().has_equal_paths());
}
