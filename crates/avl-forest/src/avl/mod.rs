//! Height-balanced (AVL) tree.

pub mod rebalance;
pub mod tree;

pub use rebalance::{insert_fix, insert_leaf, remove_fix, rotate_left, rotate_right, swap_positions};
pub use tree::AvlTree;
