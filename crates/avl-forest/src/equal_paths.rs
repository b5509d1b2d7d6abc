//! Equal leaf-depth predicate for plain binary trees.

use crate::types::Node;
use crate::util::{get_l, get_r, post_order};

/// Returns `true` iff every leaf under `root` sits at the same depth.
///
/// Works on any arena of [`Node`]s; ordering and balance are irrelevant.
/// Empty and single-node trees trivially pass. A node with one child passes
/// iff that child's subtree passes; a node with two children additionally
/// needs both subtrees to bottom out at the same depth.
pub fn equal_paths<N: Node>(arena: &[N], root: Option<u32>) -> bool {
    // Distance from each visited node down to its leaves.
    let mut depth = vec![0u32; arena.len()];
    for i in post_order(arena, root) {
        depth[i as usize] = match (get_l(arena, i), get_r(arena, i)) {
            (None, None) => 0,
            (Some(c), None) | (None, Some(c)) => depth[c as usize] + 1,
            (Some(l), Some(r)) => {
                if depth[l as usize] != depth[r as usize] {
                    return false;
                }
                depth[l as usize] + 1
            }
        };
    }
    true
}
