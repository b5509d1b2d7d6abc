//! Whole-tree invariant checks.

use crate::error::InvariantError;
use crate::types::{AvlNodeLike, KvNode};
use crate::util::{first, get_l, get_p, get_r, heights, next, post_order};

/// Checks links, ownership and strict key order.
pub fn assert_bst<K, V, N>(arena: &[N], root: Option<u32>) -> Result<(), InvariantError>
where
    K: Ord,
    N: KvNode<K, V>,
{
    if let Some(root) = root {
        if get_p(arena, root).is_some() {
            return Err(InvariantError::RootHasParent);
        }
    }

    let nodes = post_order(arena, root);
    for &i in &nodes {
        for c in [get_l(arena, i), get_r(arena, i)].into_iter().flatten() {
            if get_p(arena, c) != Some(i) {
                return Err(InvariantError::BrokenParentLink { node: i });
            }
        }
    }
    if nodes.len() != arena.len() {
        return Err(InvariantError::SizeMismatch {
            reachable: nodes.len(),
            owned: arena.len(),
        });
    }

    let mut prev: Option<u32> = None;
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        if let Some(p) = prev {
            if arena[p as usize].key() >= arena[i as usize].key() {
                return Err(InvariantError::OrderViolated { node: i });
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

/// [`assert_bst`] plus stored balance factors against recomputed heights.
pub fn assert_avl<K, V, N>(arena: &[N], root: Option<u32>) -> Result<(), InvariantError>
where
    K: Ord,
    N: AvlNodeLike<K, V>,
{
    assert_bst(arena, root)?;

    let h = heights(arena, root);
    for i in post_order(arena, root) {
        let lh = get_l(arena, i).map_or(0, |l| i64::from(h[l as usize]));
        let rh = get_r(arena, i).map_or(0, |r| i64::from(h[r as usize]));
        let expected = rh - lh;
        let actual = arena[i as usize].bf();
        if i64::from(actual) != expected {
            return Err(InvariantError::BalanceMismatch {
                node: i,
                expected,
                actual,
            });
        }
        if !(-1..=1).contains(&expected) {
            return Err(InvariantError::Unbalanced {
                node: i,
                balance: expected,
            });
        }
    }

    Ok(())
}
