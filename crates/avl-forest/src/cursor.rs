use std::iter::FusedIterator;

use crate::node::TreeNode;
use crate::util;

/// A read-only position in a tree.
///
/// A cursor either points at a node or sits on the end sentinel. Two cursors
/// are equal when they come from the same tree and point at the same node;
/// every end cursor of a tree equals every other end cursor of that tree.
pub struct Cursor<'a, K, V> {
    arena: &'a [TreeNode<K, V>],
    current: Option<u32>,
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) fn new(arena: &'a [TreeNode<K, V>], current: Option<u32>) -> Self {
        Self { arena, current }
    }

    /// Arena index of the current node; only meaningful until the tree changes.
    pub fn index(&self) -> Option<u32> {
        self.current
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        let arena = self.arena;
        self.current.map(|i| {
            let n = &arena[i as usize];
            (&n.k, &n.v)
        })
    }

    pub fn key(&self) -> Option<&'a K> {
        self.get().map(|(k, _)| k)
    }

    pub fn value(&self) -> Option<&'a V> {
        self.get().map(|(_, v)| v)
    }

    /// Moves to the in-order successor; past the largest key this is the end.
    pub fn move_next(&mut self) {
        self.current = self.current.and_then(|i| util::next(self.arena, i));
    }

    /// Moves to the in-order predecessor; before the smallest key this is the end.
    pub fn move_prev(&mut self) {
        self.current = self.current.and_then(|i| util::prev(self.arena, i));
    }
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Cursor<'_, K, V> {}

impl<K, V> PartialEq for Cursor<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena.as_ptr(), other.arena.as_ptr()) && self.current == other.current
    }
}

impl<K, V> Eq for Cursor<'_, K, V> {}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for Cursor<'_, K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.get() {
            Some((k, v)) => f.debug_tuple("Cursor").field(k).field(v).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}

/// In-order iterator over `(&K, &V)`.
pub struct Iter<'a, K, V> {
    arena: &'a [TreeNode<K, V>],
    head: Option<u32>,
    tail: Option<u32>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(arena: &'a [TreeNode<K, V>], head: Option<u32>, tail: Option<u32>) -> Self {
        Self { arena, head, tail }
    }

    fn entry(&self, i: u32) -> (&'a K, &'a V) {
        let n = &self.arena[i as usize];
        (&n.k, &n.v)
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let head = self.head?;
        if Some(head) == self.tail {
            self.head = None;
            self.tail = None;
        } else {
            self.head = util::next(self.arena, head);
        }
        Some(self.entry(head))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let tail = self.tail?;
        if Some(tail) == self.head {
            self.head = None;
            self.tail = None;
        } else {
            self.tail = util::prev(self.arena, tail);
        }
        Some(self.entry(tail))
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
