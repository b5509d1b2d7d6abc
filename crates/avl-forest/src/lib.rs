//! Arena-based ordered maps: an unbalanced binary search tree and an AVL tree
//! built on the same node storage.
//!
//! Nodes live in a `Vec` owned by the tree; parent and child links are
//! `Option<u32>` indices into it. Removing a node moves the last arena slot
//! into the hole, so indices are only stable between mutations.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`], [`KvNode`], [`AvlNodeLike`] traits and [`Side`] |
//! [`node`] | [`TreeNode`], the one node type both trees use |
//! [`util`] | navigation, lookup, attach/splice, position swap, heights |
//! [`bst`] | [`BinarySearchTree`] |
//! [`avl`] | [`AvlTree`], rotations and retrace ([`avl::rebalance`]) |
//! [`cursor`] | [`Cursor`] and the in-order [`Iter`] |
//! [`equal_paths`] | leaf-depth check for any binary tree |
//! [`print`] | box-drawing dumps |
//! [`validate`] | invariant checkers used by tests |
//!
//! ```
//! use avl_forest::{AvlTree, BinarySearchTree};
//!
//! let avl: AvlTree<_, _> = (1..=7).map(|k| (k, ())).collect();
//! let bst: BinarySearchTree<_, _> = (1..=7).map(|k| (k, ())).collect();
//! assert_eq!(avl.height(), 3);
//! assert_eq!(bst.height(), 7);
//! assert!(avl.has_equal_paths());
//! ```

#[macro_use]
mod macros;

pub mod avl;
pub mod bst;
pub mod cursor;
pub mod equal_paths;
pub mod error;
pub mod node;
pub mod print;
mod raw;
pub mod types;
pub mod util;
pub mod validate;

pub use avl::AvlTree;
pub use bst::BinarySearchTree;
pub use cursor::{Cursor, Iter};
pub use equal_paths::equal_paths;
pub use error::{InvariantError, TreeError};
pub use node::TreeNode;
pub use types::{AvlNodeLike, KvNode, Node, Side};
