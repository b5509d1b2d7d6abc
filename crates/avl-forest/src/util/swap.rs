use crate::types::{Node, Side};

use super::{get_l, get_p, get_r, set_child, set_l, set_p, set_r, side_of};

/// Links of one node captured before a swap rewires anything.
#[derive(Clone, Copy)]
struct Snapshot {
    p: Option<u32>,
    l: Option<u32>,
    r: Option<u32>,
    side: Option<Side>,
}

impl Snapshot {
    fn of<N: Node>(arena: &[N], idx: u32) -> Self {
        let p = get_p(arena, idx);
        Self {
            p,
            l: get_l(arena, idx),
            r: get_r(arena, idx),
            side: p.map(|p| side_of(arena, p, idx)),
        }
    }
}

/// Exchanges the tree positions of nodes `x` and `y`.
///
/// Node records keep their identity (key, value and arena slot); only the
/// topology moves. Handles the case where one node is the other's parent.
/// Returns the new root.
pub fn swap<N: Node>(arena: &mut [N], root: u32, x: u32, y: u32) -> u32 {
    if x == y {
        return root;
    }

    let xs = Snapshot::of(arena, x);
    let ys = Snapshot::of(arena, y);

    // A link aimed at one of the pair now has to aim at the other.
    let flip = |v: Option<u32>| match v {
        Some(i) if i == x => Some(y),
        Some(i) if i == y => Some(x),
        other => other,
    };

    set_p(arena, x, flip(ys.p));
    set_l(arena, x, flip(ys.l));
    set_r(arena, x, flip(ys.r));
    set_p(arena, y, flip(xs.p));
    set_l(arena, y, flip(xs.l));
    set_r(arena, y, flip(xs.r));

    for (snap, to) in [(xs, y), (ys, x)] {
        if let (Some(p), Some(side)) = (snap.p, snap.side) {
            if p != to {
                set_child(arena, p, side, Some(to));
            }
        }
        for c in [snap.l, snap.r].into_iter().flatten() {
            if c != to {
                set_p(arena, c, Some(to));
            }
        }
    }

    if root == x {
        y
    } else if root == y {
        x
    } else {
        root
    }
}
