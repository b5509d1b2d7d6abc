//! Node trait definitions.
//!
//! Nodes live in a [`Vec`]-backed arena owned by the tree. Every link
//! (`p`, `l`, `r`) is an `Option<u32>` index into that arena, so the
//! parent/child graph never owns anything and teardown is a plain `Vec` drop.
//! All tree-manipulation functions take the arena as a slice and work with
//! indices.

/// Parent / left / right links.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Key/value node interface used by the map-like trees.
///
/// The key is fixed once the node is created; only the value can change.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;
}

/// Balance-factor access for AVL rebalancing.
///
/// The balance factor is `height(right) - height(left)`.
pub trait AvlNodeLike<K, V>: KvNode<K, V> {
    fn bf(&self) -> i8;
    fn set_bf(&mut self, bf: i8);
}

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Balance change a parent sees when this side grows by one level.
    pub fn grow_delta(self) -> i8 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }

    /// Balance change a parent sees when this side shrinks by one level.
    pub fn shrink_delta(self) -> i8 {
        -self.grow_delta()
    }
}
