//! AVL rotations and the bottom-up retrace after insert and remove.
//!
//! Balance factors are `height(right) - height(left)`. Rotations only rewire
//! links; every caller sets the resulting balance factors explicitly.

use crate::types::{AvlNodeLike, Node, Side};
use crate::util::{
    attach, get_child, get_l, get_p, get_r, set_child, set_l, set_p, set_r, side_of, swap,
};

#[inline]
fn bf<K, V, N>(arena: &[N], i: u32) -> i8
where
    N: AvlNodeLike<K, V>,
{
    arena[i as usize].bf()
}

#[inline]
fn set_bf<K, V, N>(arena: &mut [N], i: u32, v: i8)
where
    N: AvlNodeLike<K, V>,
{
    arena[i as usize].set_bf(v);
}

/// Puts `y` where `x` used to hang: under `x`'s old parent, or at the root.
fn replace_in_parent<N: Node>(arena: &mut [N], root: u32, x: u32, y: u32, p: Option<u32>) -> u32 {
    set_p(arena, y, p);
    match p {
        Some(p) => {
            let side = side_of(arena, p, x);
            set_child(arena, p, side, Some(y));
            root
        }
        None => y,
    }
}

/// Lifts the left child of `x` into `x`'s place. Returns the new root.
pub fn rotate_right<N: Node>(arena: &mut [N], root: u32, x: u32) -> u32 {
    let y = get_l(arena, x).expect("rotate_right needs a left child");
    log::trace!("rotate right at {x}");
    let p = get_p(arena, x);
    let yr = get_r(arena, y);

    set_l(arena, x, yr);
    if let Some(yr) = yr {
        set_p(arena, yr, Some(x));
    }
    let root = replace_in_parent(arena, root, x, y, p);
    set_r(arena, y, Some(x));
    set_p(arena, x, Some(y));
    root
}

/// Lifts the right child of `x` into `x`'s place. Returns the new root.
pub fn rotate_left<N: Node>(arena: &mut [N], root: u32, x: u32) -> u32 {
    let y = get_r(arena, x).expect("rotate_left needs a right child");
    log::trace!("rotate left at {x}");
    let p = get_p(arena, x);
    let yl = get_l(arena, y);

    set_r(arena, x, yl);
    if let Some(yl) = yl {
        set_p(arena, yl, Some(x));
    }
    let root = replace_in_parent(arena, root, x, y, p);
    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
    root
}

/// Lifts the child of `x` on `side` into `x`'s place.
fn lift<N: Node>(arena: &mut [N], root: u32, x: u32, side: Side) -> u32 {
    match side {
        Side::Left => rotate_right(arena, root, x),
        Side::Right => rotate_left(arena, root, x),
    }
}

/// Double rotation: lifts `mid`'s inner child `pivot` over `mid`, then over
/// `top`, where `mid` is `top`'s child on `heavy`.
///
/// Returns the new root and the balance factors `(top, mid)` end up with,
/// keyed on `pivot`'s balance before the rotation. `pivot` always ends at 0.
fn rotate_double<K, V, N>(
    arena: &mut [N],
    root: u32,
    top: u32,
    mid: u32,
    heavy: Side,
) -> (u32, i8, i8)
where
    N: AvlNodeLike<K, V>,
{
    let pivot = get_child(arena, mid, heavy.opposite()).expect("zig-zag needs an inner grandchild");
    let pivot_bf = bf(arena, pivot);

    let root = lift(arena, root, mid, heavy.opposite());
    let root = lift(arena, root, top, heavy);

    let (top_bf, mid_bf) = match (heavy, pivot_bf) {
        (Side::Left, -1) => (1, 0),
        (Side::Left, 1) => (0, -1),
        (Side::Right, 1) => (-1, 0),
        (Side::Right, -1) => (0, 1),
        _ => (0, 0),
    };
    set_bf(arena, pivot, 0);
    (root, top_bf, mid_bf)
}

/// Exchanges the tree positions of `x` and `y` together with their balance
/// factors, so each position keeps the balance it had.
pub fn swap_positions<K, V, N>(arena: &mut [N], root: u32, x: u32, y: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    let root = swap(arena, root, x, y);
    let xbf = bf(arena, x);
    set_bf(arena, x, bf(arena, y));
    set_bf(arena, y, xbf);
    root
}

/// Hangs the fresh leaf `n` under `p` on `side` and restores the AVL
/// property. Returns the new root.
pub fn insert_leaf<K, V, N>(arena: &mut [N], root: u32, n: u32, p: u32, side: Side) -> u32
where
    N: AvlNodeLike<K, V>,
{
    attach(arena, n, p, side);
    let pbf = bf(arena, p) + side.grow_delta();
    set_bf(arena, p, pbf);
    if pbf == 0 {
        return root;
    }
    insert_fix(arena, root, p, n)
}

/// Retrace after `p`'s subtree grew by one level through its child `n`.
///
/// Stops at the root, when an ancestor's balance settles to 0, or after the
/// single rotation (or pair) that absorbs the growth.
pub fn insert_fix<K, V, N>(arena: &mut [N], root: u32, mut p: u32, mut n: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    while let Some(g) = get_p(arena, p) {
        let p_side = side_of(arena, g, p);
        let gbf = bf(arena, g) + p_side.grow_delta();
        set_bf(arena, g, gbf);
        log::trace!("insert retrace at {g}: bf={gbf}");

        match gbf {
            0 => return root,
            -1 | 1 => {
                n = p;
                p = g;
            }
            _ => {
                let n_side = side_of(arena, p, n);
                if n_side == p_side {
                    // zig-zig
                    let root = lift(arena, root, g, p_side);
                    set_bf(arena, p, 0);
                    set_bf(arena, g, 0);
                    return root;
                }
                // zig-zag
                let (root, g_bf, p_bf) = rotate_double(arena, root, g, p, p_side);
                set_bf(arena, g, g_bf);
                set_bf(arena, p, p_bf);
                return root;
            }
        }
    }
    root
}

/// Retrace after one side of `node` lost a level; `diff` is the balance
/// change `node` sees (+1 when its left side shrank, -1 for the right).
///
/// Continues upward while the subtree height keeps decreasing: after a
/// balance of 0, a same-sign single rotation, or a double rotation. Stops on
/// a balance of ±1 or a single rotation over a child with balance 0.
pub fn remove_fix<K, V, N>(arena: &mut [N], mut root: u32, node: u32, diff: i8) -> u32
where
    N: AvlNodeLike<K, V>,
{
    let mut curr = Some(node);
    let mut diff = diff;
    while let Some(n) = curr {
        let parent = get_p(arena, n);
        let ndiff = parent.map_or(0, |p| side_of(arena, p, n).shrink_delta());

        let nbf = bf(arena, n) + diff;
        set_bf(arena, n, nbf);
        log::trace!("remove retrace at {n}: bf={nbf}");

        let shrank = match nbf {
            0 => true,
            -1 | 1 => false,
            _ => {
                let (new_root, shrank) = resolve_removal(arena, root, n, nbf);
                root = new_root;
                shrank
            }
        };
        if !shrank {
            break;
        }
        curr = parent;
        diff = ndiff;
    }
    root
}

/// Rebalances `n` whose balance hit ±2 during a removal retrace.
///
/// Returns the new root and whether the subtree lost a level overall.
fn resolve_removal<K, V, N>(arena: &mut [N], root: u32, n: u32, nbf: i8) -> (u32, bool)
where
    N: AvlNodeLike<K, V>,
{
    let heavy = if nbf < 0 { Side::Left } else { Side::Right };
    let lean = heavy.grow_delta();
    let c = get_child(arena, n, heavy).expect("heavy side has a child");
    let cbf = bf(arena, c);

    if cbf == lean {
        // zig-zig, child leans the same way: height drops
        let root = lift(arena, root, n, heavy);
        set_bf(arena, n, 0);
        set_bf(arena, c, 0);
        (root, true)
    } else if cbf == 0 {
        // zig-zig, child even: height preserved
        let root = lift(arena, root, n, heavy);
        set_bf(arena, n, lean);
        set_bf(arena, c, -lean);
        (root, false)
    } else {
        // zig-zag
        let (root, n_bf, c_bf) = rotate_double(arena, root, n, c, heavy);
        set_bf(arena, n, n_bf);
        set_bf(arena, c, c_bf);
        (root, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::TreeNode;
    use crate::util::{first, insert_left, insert_right, next};

    type N = TreeNode<i32, ()>;

    fn nodes(keys: &[i32]) -> Vec<N> {
        keys.iter().map(|&k| TreeNode::new(k, ())).collect()
    }

    fn inorder(arena: &[N], root: u32) -> Vec<i32> {
        let mut out = Vec::new();
        let mut curr = first(arena, Some(root));
        while let Some(i) = curr {
            out.push(arena[i as usize].k);
            curr = next(arena, i);
        }
        out
    }

    #[test]
    fn rotate_right_at_root() {
        //      0:30            1:20
        //      /              /   \
        //    1:20     =>    2:10  0:30
        //    /  \                 /
        //  2:10 3:25            3:25
        let mut arena = nodes(&[30, 20, 10, 25]);
        insert_left(&mut arena, 1, 0);
        insert_left(&mut arena, 2, 1);
        insert_right(&mut arena, 3, 1);

        let root = rotate_right(&mut arena, 0, 0);
        assert_eq!(root, 1);
        assert_eq!(arena[1].p, None);
        assert_eq!(arena[1].r, Some(0));
        assert_eq!(arena[0].p, Some(1));
        assert_eq!(arena[0].l, Some(3));
        assert_eq!(arena[3].p, Some(0));
        assert_eq!(inorder(&arena, root), vec![10, 20, 25, 30]);
    }

    #[test]
    fn rotate_left_below_parent() {
        //  0:5                0:5
        //    \                  \
        //    1:10     =>        2:20
        //      \                /
        //      2:20           1:10
        let mut arena = nodes(&[5, 10, 20]);
        insert_right(&mut arena, 1, 0);
        insert_right(&mut arena, 2, 1);

        let root = rotate_left(&mut arena, 0, 1);
        assert_eq!(root, 0);
        assert_eq!(arena[0].r, Some(2));
        assert_eq!(arena[2].p, Some(0));
        assert_eq!(arena[2].l, Some(1));
        assert_eq!(arena[1].p, Some(2));
        assert_eq!(arena[1].r, None);
        assert_eq!(inorder(&arena, root), vec![5, 10, 20]);
    }

    #[test]
    fn rotations_leave_balance_factors_alone() {
        let mut arena = nodes(&[1, 2]);
        insert_right(&mut arena, 1, 0);
        arena[0].bf = 1;
        let root = rotate_left(&mut arena, 0, 0);
        assert_eq!(root, 1);
        assert_eq!(arena[0].bf, 1);
        assert_eq!(arena[1].bf, 0);
    }

    #[test]
    fn insert_leaf_zig_zag_right() {
        // 10 -> 30 -> 20 forms a right-left kink.
        let mut arena = nodes(&[10, 30, 20]);
        let root = insert_leaf(&mut arena, 0, 1, 0, Side::Right);
        assert_eq!(root, 0);
        assert_eq!(arena[0].bf, 1);
        let root = insert_leaf(&mut arena, root, 2, 1, Side::Left);
        assert_eq!(root, 2);
        assert_eq!(inorder(&arena, root), vec![10, 20, 30]);
        assert!(arena.iter().all(|n| n.bf == 0));
    }

    #[test]
    fn swap_positions_keeps_balance_with_position() {
        let mut arena = nodes(&[10, 5]);
        insert_left(&mut arena, 1, 0);
        arena[0].bf = -1;
        let root = swap_positions(&mut arena, 0, 0, 1);
        assert_eq!(root, 1);
        assert_eq!(arena[1].bf, -1);
        assert_eq!(arena[0].bf, 0);
    }
}
