//! Arena-level binary tree helpers (p / l / r links).
//!
//! Everything here is generic over [`Node`] and knows nothing about balance
//! factors; both trees and the equal-paths checker are built on top.

pub mod swap;

use std::cmp::Ordering;

use crate::types::{KvNode, Node, Side};

pub use swap::swap;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

#[inline]
pub(crate) fn get_child<N: Node>(arena: &[N], idx: u32, side: Side) -> Option<u32> {
    match side {
        Side::Left => get_l(arena, idx),
        Side::Right => get_r(arena, idx),
    }
}

#[inline]
pub(crate) fn set_child<N: Node>(arena: &mut [N], idx: u32, side: Side, v: Option<u32>) {
    match side {
        Side::Left => set_l(arena, idx, v),
        Side::Right => set_r(arena, idx, v),
    }
}

/// Side of `parent` that holds `child`.
#[inline]
pub(crate) fn side_of<N: Node>(arena: &[N], parent: u32, child: u32) -> Side {
    if get_l(arena, parent) == Some(child) {
        Side::Left
    } else {
        Side::Right
    }
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    while let Some(p) = get_p(arena, curr) {
        if get_l(arena, p) == Some(curr) {
            return Some(p);
        }
        curr = p;
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        return last(arena, Some(l));
    }
    let mut curr = node;
    while let Some(p) = get_p(arena, curr) {
        if get_r(arena, p) == Some(curr) {
            return Some(p);
        }
        curr = p;
    }
    None
}

/// Result of descending the tree towards a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    /// The key is stored at this index.
    Found(u32),
    /// The key is absent; a new leaf belongs on `side` of `parent`.
    Vacant { parent: u32, side: Side },
    /// The tree has no nodes.
    Empty,
}

/// Descends from `root` comparing against `key`.
pub fn probe<K, V, N>(arena: &[N], root: Option<u32>, key: &K) -> Probe
where
    K: Ord,
    N: KvNode<K, V>,
{
    let Some(mut curr) = root else {
        return Probe::Empty;
    };
    loop {
        let side = match key.cmp(arena[curr as usize].key()) {
            Ordering::Equal => return Probe::Found(curr),
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
        };
        match get_child(arena, curr, side) {
            Some(child) => curr = child,
            None => return Probe::Vacant { parent: curr, side },
        }
    }
}

/// Finds a node by key.
pub fn find<K, V, N>(arena: &[N], root: Option<u32>, key: &K) -> Option<u32>
where
    K: Ord,
    N: KvNode<K, V>,
{
    match probe(arena, root, key) {
        Probe::Found(idx) => Some(idx),
        _ => None,
    }
}

/// Hangs the detached node `n` under `p` on `side`.
pub fn attach<N: Node>(arena: &mut [N], n: u32, p: u32, side: Side) {
    debug_assert!(get_child(arena, p, side).is_none());
    set_child(arena, p, side, Some(n));
    set_p(arena, n, Some(p));
}

/// Hangs `n` as the left child of `p`.
pub fn insert_left<N: Node>(arena: &mut [N], n: u32, p: u32) {
    attach(arena, n, p, Side::Left);
}

/// Hangs `n` as the right child of `p`.
pub fn insert_right<N: Node>(arena: &mut [N], n: u32, p: u32) {
    attach(arena, n, p, Side::Right);
}

/// Unlinks a node with at most one child, promoting that child into its slot.
///
/// Returns the new root and the `(parent, side)` slot the node vacated. The
/// node itself is left fully detached.
pub fn splice<N: Node>(
    arena: &mut [N],
    root: u32,
    n: u32,
) -> (Option<u32>, Option<(u32, Side)>) {
    let p = get_p(arena, n);
    let l = get_l(arena, n);
    let r = get_r(arena, n);
    debug_assert!(l.is_none() || r.is_none(), "splice needs at most one child");
    let child = l.or(r);

    set_p(arena, n, None);
    set_l(arena, n, None);
    set_r(arena, n, None);
    if let Some(c) = child {
        set_p(arena, c, p);
    }

    let Some(p) = p else {
        return (child, None);
    };
    let side = side_of(arena, p, n);
    set_child(arena, p, side, child);
    (Some(root), Some((p, side)))
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    post_order(arena, root).len()
}

/// Indices under `root` in post-order (children before parents).
///
/// Uses an explicit stack so degenerate chains do not deepen the call stack.
pub fn post_order<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        out.push(i);
        if let Some(l) = get_l(arena, i) {
            stack.push(l);
        }
        if let Some(r) = get_r(arena, i) {
            stack.push(r);
        }
    }
    out.reverse();
    out
}

/// Height of every subtree under `root`, indexed by arena slot.
///
/// Slots outside the tree read as 0, as does an absent child.
pub fn heights<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut h = vec![0u32; arena.len()];
    for i in post_order(arena, root) {
        let lh = get_l(arena, i).map_or(0, |l| h[l as usize]);
        let rh = get_r(arena, i).map_or(0, |r| h[r as usize]);
        h[i as usize] = 1 + lh.max(rh);
    }
    h
}

/// Height of the tree, 0 when empty.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| heights(arena, Some(r))[r as usize] as usize)
}

/// Whether `|height(l) - height(r)| <= 1` holds at every node.
///
/// Heights are recomputed from the structure; stored balance factors are
/// never consulted.
pub fn is_balanced<N: Node>(arena: &[N], root: Option<u32>) -> bool {
    let h = heights(arena, root);
    post_order(arena, root).into_iter().all(|i| {
        let lh = get_l(arena, i).map_or(0, |l| h[l as usize]);
        let rh = get_r(arena, i).map_or(0, |r| h[r as usize]);
        lh.abs_diff(rh) <= 1
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────
