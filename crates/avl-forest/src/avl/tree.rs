use std::fmt::Debug;
use std::mem;

use super::rebalance;
use crate::cursor::{Cursor, Iter};
use crate::error::{InvariantError, TreeError};
use crate::raw::RawTree;
use crate::util::{self, Probe};
use crate::validate;

/// Ordered map kept height-balanced by AVL rotations.
///
/// Every node's balance factor stays in `-1..=1` between operations, so
/// lookups, inserts and removals are `O(log n)`.
///
/// ```
/// use avl_forest::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for k in [10, 20, 30] {
///     tree.insert(k, k * 2);
/// }
/// assert_eq!(tree.first_key_value(), Some((&10, &20)));
/// assert_eq!(tree[&30], 60);
/// assert_eq!(tree.balance(&20), Some(0));
/// assert!(tree.is_balanced());
/// ```
#[derive(Clone)]
pub struct AvlTree<K, V> {
    raw: RawTree<K, V>,
}

impl<K, V> AvlTree<K, V> {
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

    /// Recomputes subtree heights from scratch; independent of the stored
    /// balance factors.
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
        self.raw
            .print("AvlTree", &|n| format!("{:?} [bf={}]", n.k, n.bf))
    }
}

impl<K: Ord, V> AvlTree<K, V> {
    /// Inserts or overwrites. Returns the previous value for an existing key;
    /// overwriting never changes the shape of the tree.
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
                let root = self.raw.root.expect("vacant slot implies a root");
                let root = rebalance::insert_leaf(&mut self.raw.arena, root, n, parent, side);
                self.raw.root = Some(root);
                None
            }
        }
    }

    /// Removes `key`, returning its value; absent keys are a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let node = self.raw.find_node(key)?;
        let mut root = self.raw.root?;
        if self.raw.has_two_children(node) {
            let pred = util::prev(&self.raw.arena, node).expect("left subtree is non-empty");
            root = rebalance::swap_positions(&mut self.raw.arena, root, node, pred);
        }
        let arena = &mut self.raw.arena;
        self.raw.root = match util::splice(arena, root, node) {
            (Some(root), Some((p, side))) => {
                Some(rebalance::remove_fix(arena, root, p, side.shrink_delta()))
            }
            (root, _) => root,
        };
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

    /// Stored balance factor of the node holding `key`.
    pub fn balance(&self, key: &K) -> Option<i8> {
        self.raw.find_node(key).map(|i| self.raw.arena[i as usize].bf)
    }

    /// Full structural check: links, order, stored balance factors against
    /// recomputed heights, and the AVL bound.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        validate::assert_avl(&self.raw.arena, self.raw.root)
    }
}

tree_traits!(AvlTree);

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(keys: &[i32]) -> AvlTree<i32, i32> {
        keys.iter().map(|&k| (k, k)).collect()
    }

    fn keys(t: &AvlTree<i32, i32>) -> Vec<i32> {
        t.keys().copied().collect()
    }

    fn root_key(t: &AvlTree<i32, i32>) -> Option<i32> {
        t.raw.root.map(|r| t.raw.arena[r as usize].k)
    }

    #[test]
    fn ascending_insert_rotates_left() {
        let t = tree(&[10, 20, 30]);
        assert_eq!(root_key(&t), Some(20));
        assert_eq!(keys(&t), vec![10, 20, 30]);
        for k in [10, 20, 30] {
            assert_eq!(t.balance(&k), Some(0));
        }
        t.assert_valid().unwrap();
    }

    #[test]
    fn kinked_insert_rotates_twice() {
        let t = tree(&[30, 10, 20]);
        assert_eq!(root_key(&t), Some(20));
        for k in [10, 20, 30] {
            assert_eq!(t.balance(&k), Some(0));
        }
        t.assert_valid().unwrap();
    }

    #[test]
    fn upsert_keeps_shape() {
        let mut t = tree(&[5, 3, 8]);
        let before = t.print();
        assert_eq!(t.insert(3, 33), Some(3));
        assert_eq!(t.len(), 3);
        assert_eq!(t[&3], 33);
        assert_eq!(t.print(), before);
    }

    #[test]
    fn remove_rotates_over_leaning_child() {
        //     20
        //    /  \              30
        //  10    30     =>    /  \
        //          \        20    40
        //          40
        let mut t = tree(&[20, 10, 30, 40]);
        assert_eq!(t.remove(&10), Some(10));
        assert_eq!(root_key(&t), Some(30));
        assert_eq!(keys(&t), vec![20, 30, 40]);
        t.assert_valid().unwrap();
    }

    #[test]
    fn remove_with_even_heavy_child() {
        // Removing 10 leaves 20 right-heavy by two with child 40 at bf 0:
        // single rotation, both end at ±1 and the height is preserved.
        let mut t = tree(&[20, 10, 40, 30, 50]);
        t.remove(&10);
        assert_eq!(root_key(&t), Some(40));
        assert_eq!(t.balance(&40), Some(-1));
        assert_eq!(t.balance(&20), Some(1));
        t.assert_valid().unwrap();
    }

    #[test]
    fn remove_two_children_uses_predecessor() {
        let mut t = tree(&[50, 25, 75, 10, 30, 60, 90, 27]);
        assert_eq!(t.remove(&50), Some(50));
        assert_eq!(root_key(&t), Some(30));
        assert_eq!(keys(&t), vec![10, 25, 27, 30, 60, 75, 90]);
        t.assert_valid().unwrap();
    }

    #[test]
    fn remove_root_with_single_child() {
        let mut t = tree(&[1, 2]);
        assert_eq!(t.remove(&1), Some(1));
        assert_eq!(root_key(&t), Some(2));
        assert_eq!(t.len(), 1);
        t.assert_valid().unwrap();
        assert_eq!(t.remove(&2), Some(2));
        assert!(t.empty());
        assert_eq!(t.remove(&2), None);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut t = tree(&[1, 2, 3]);
        assert_eq!(t.remove(&4), None);
        assert_eq!(keys(&t), vec![1, 2, 3]);
    }

    #[test]
    fn print_shows_balance() {
        let t = tree(&[20, 10, 30, 40]);
        assert_eq!(
            t.print(),
            "AvlTree\n└─ 20 [bf=1]\n   ├─ 10 [bf=0]\n   └─ 30 [bf=1]\n      ├─ ∅\n      └─ 40 [bf=0]"
        );
        assert_eq!(AvlTree::<i32, i32>::new().print(), "AvlTree ∅");
    }
}
