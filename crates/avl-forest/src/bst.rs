use std::fmt::Debug;
use std::mem;

use crate::cursor::{Cursor, Iter};
use crate::error::{InvariantError, TreeError};
use crate::raw::RawTree;
use crate::util::{self, Probe};
use crate::validate;

/// Unbalanced binary search tree.
///
/// Same storage and API as [`AvlTree`](crate::AvlTree), but nodes stay where
/// insertion put them, so the height follows the insertion order.
#[derive(Clone)]
pub struct BinarySearchTree<K, V> {
    raw: RawTree<K, V>,
}

impl<K, V> BinarySearchTree<K, V> {
    pub fn new() -> Self {
        Self {
            raw: RawTree::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn empty(&self) -> bool {
        self.is_empty()
    }

    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Cursor on the smallest key, or the end cursor when empty.
    pub fn begin(&self) -> Cursor<'_, K, V> {
        self.raw.begin()
    }

    pub fn end(&self) -> Cursor<'_, K, V> {
        self.raw.end()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.raw.iter()
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first_key_value()
    }

    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last_key_value()
    }

    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Recomputes heights and checks `|h(l) - h(r)| <= 1` everywhere.
    pub fn is_balanced(&self) -> bool {
        self.raw.is_balanced()
    }

    pub fn has_equal_paths(&self) -> bool {
        self.raw.has_equal_paths()
    }

    pub fn print(&self) -> String
    where
        K: Debug,
    {
        self.raw.print("BinarySearchTree", &|n| format!("{:?}", n.k))
    }
}

impl<K: Ord, V> BinarySearchTree<K, V> {
    /// Inserts or overwrites. Returns the previous value for an existing key.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.raw.probe(&key) {
            Probe::Found(i) => Some(mem::replace(&mut self.raw.arena[i as usize].v, value)),
            Probe::Empty => {
                let n = self.raw.push_node(key, value);
                self.raw.root = Some(n);
                None
            }
            Probe::Vacant { parent, side } => {
                let n = self.raw.push_node(key, value);
                util::attach(&mut self.raw.arena, n, parent, side);
                None
            }
        }
    }

    /// Removes `key`, returning its value; absent keys are a no-op.
    ///
    /// A node with two children first trades places with its in-order
    /// predecessor, so the actual unlink always happens at a node with at
    /// most one child.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let node = self.raw.find_node(key)?;
        let mut root = self.raw.root?;
        if self.raw.has_two_children(node) {
            let pred = util::prev(&self.raw.arena, node).expect("left subtree is non-empty");
            root = util::swap(&mut self.raw.arena, root, node, pred);
        }
        let (root, _) = util::splice(&mut self.raw.arena, root, node);
        self.raw.root = root;
        Some(self.raw.release(node).v)
    }

    /// Cursor on `key`, or the end cursor if absent.
    pub fn find(&self, key: &K) -> Cursor<'_, K, V> {
        self.raw.find(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.raw.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.raw.get_mut(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.raw.find_node(key).is_some()
    }

    /// Checked keyed access; fails with [`TreeError::KeyNotFound`].
    pub fn at(&self, key: &K) -> Result<&V, TreeError> {
        self.raw.at(key)
    }

    pub fn at_mut(&mut self, key: &K) -> Result<&mut V, TreeError> {
        self.raw.at_mut(key)
    }

    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        validate::assert_bst(&self.raw.arena, self.raw.root)
    }
}

tree_traits!(BinarySearchTree);
