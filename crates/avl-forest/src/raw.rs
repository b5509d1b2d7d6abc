use crate::cursor::{Cursor, Iter};
use crate::equal_paths::equal_paths;
use crate::error::TreeError;
use crate::node::TreeNode;
use crate::print::print_subtree;
use crate::types::{Node, Side};
use crate::util::{self, get_l, probe, set_child, set_p, Probe};

/// Arena and root shared by both tree flavours.
///
/// Owns every node. Structural edits are done by the tree types through the
/// [`util`] helpers; this type only handles allocation, release and the
/// read-only queries both trees expose unchanged.
#[derive(Clone)]
pub(crate) struct RawTree<K, V> {
    pub(crate) root: Option<u32>,
    pub(crate) arena: Vec<TreeNode<K, V>>,
}

impl<K, V> RawTree<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            root: None,
            arena: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.arena.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node exactly once and resets the root.
    pub(crate) fn clear(&mut self) {
        log::debug!("clearing tree of {} nodes", self.arena.len());
        self.arena.clear();
        self.root = None;
    }

    pub(crate) fn push_node(&mut self, key: K, value: V) -> u32 {
        self.arena.push(TreeNode::new(key, value));
        (self.arena.len() - 1) as u32
    }

    /// Frees the slot of a node that has already been unlinked.
    ///
    /// The last arena node is moved into the hole, so its neighbours (and the
    /// root, if it was the root) are re-pointed at `idx`.
    pub(crate) fn release(&mut self, idx: u32) -> TreeNode<K, V> {
        debug_assert!(self.arena[idx as usize].p.is_none());
        debug_assert!(self.arena[idx as usize].is_leaf());
        debug_assert_ne!(self.root, Some(idx));

        let last = (self.arena.len() - 1) as u32;
        let node = self.arena.swap_remove(idx as usize);
        if idx == last {
            return node;
        }

        log::trace!("arena slot {last} relocated to {idx}");
        let moved = &self.arena[idx as usize];
        let (p, l, r) = (moved.p(), moved.l(), moved.r());
        match p {
            Some(p) => {
                let side = if get_l(&self.arena, p) == Some(last) {
                    Side::Left
                } else {
                    Side::Right
                };
                set_child(&mut self.arena, p, side, Some(idx));
            }
            None => self.root = Some(idx),
        }
        for c in [l, r].into_iter().flatten() {
            set_p(&mut self.arena, c, Some(idx));
        }
        node
    }

    pub(crate) fn cursor(&self, current: Option<u32>) -> Cursor<'_, K, V> {
        Cursor::new(&self.arena, current)
    }

    pub(crate) fn begin(&self) -> Cursor<'_, K, V> {
        self.cursor(util::first(&self.arena, self.root))
    }

    pub(crate) fn end(&self) -> Cursor<'_, K, V> {
        self.cursor(None)
    }

    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(
            &self.arena,
            util::first(&self.arena, self.root),
            util::last(&self.arena, self.root),
        )
    }

    pub(crate) fn first_key_value(&self) -> Option<(&K, &V)> {
        util::first(&self.arena, self.root).map(|i| self.entry(i))
    }

    pub(crate) fn last_key_value(&self) -> Option<(&K, &V)> {
        util::last(&self.arena, self.root).map(|i| self.entry(i))
    }

    pub(crate) fn entry(&self, idx: u32) -> (&K, &V) {
        let n = &self.arena[idx as usize];
        (&n.k, &n.v)
    }

    pub(crate) fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    pub(crate) fn is_balanced(&self) -> bool {
        util::is_balanced(&self.arena, self.root)
    }

    pub(crate) fn has_equal_paths(&self) -> bool {
        equal_paths(&self.arena, self.root)
    }

    /// Whether `node` has both children, i.e. must be swapped before splicing.
    pub(crate) fn has_two_children(&self, node: u32) -> bool {
        self.arena[node as usize].has_two_children()
    }

    pub(crate) fn print(&self, title: &str, label: &dyn Fn(&TreeNode<K, V>) -> String) -> String {
        match self.root {
            Some(root) => format!("{title}{}", print_subtree(&self.arena, root, label)),
            None => format!("{title} ∅"),
        }
    }
}

impl<K: Ord, V> RawTree<K, V> {
    pub(crate) fn probe(&self, key: &K) -> Probe {
        probe(&self.arena, self.root, key)
    }

    pub(crate) fn find_node(&self, key: &K) -> Option<u32> {
        util::find(&self.arena, self.root, key)
    }

    pub(crate) fn find(&self, key: &K) -> Cursor<'_, K, V> {
        self.cursor(self.find_node(key))
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        self.find_node(key).map(|i| &self.arena[i as usize].v)
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.find_node(key).map(|i| &mut self.arena[i as usize].v)
    }

    pub(crate) fn at(&self, key: &K) -> Result<&V, TreeError> {
        self.get(key).ok_or(TreeError::KeyNotFound)
    }

    pub(crate) fn at_mut(&mut self, key: &K) -> Result<&mut V, TreeError> {
        self.get_mut(key).ok_or(TreeError::KeyNotFound)
    }
}
