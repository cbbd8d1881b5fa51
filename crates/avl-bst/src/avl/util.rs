//! AVL rebalancing over a node arena.
//!
//! Balance factors follow `height(right) - height(left)`. Every function
//! threads the root index through and returns the root after the change,
//! since rotations may lift a new node to the top.

use log::{debug, trace};

use crate::error::ValidationError;
use crate::types::{BalancedNode, Node};
use crate::util::{
    child, first, get_l, get_p, get_r, height, last, next, replace_child, set_child, side_of,
    splice, swap, Side,
};

#[inline]
fn balance<N: BalancedNode>(arena: &[N], i: u32) -> i8 {
    arena[i as usize].balance()
}

#[inline]
fn set_balance<N: BalancedNode>(arena: &mut [N], i: u32, v: i8) {
    arena[i as usize].set_balance(v);
}

/// Balance delta a node receives when its `side` subtree grows.
#[inline]
fn grow(side: Side) -> i8 {
    match side {
        Side::Left => -1,
        Side::Right => 1,
    }
}

/// Left rotation around `x`; `x.r` takes its place. Balances are untouched.
pub fn rotate_left<N: BalancedNode>(arena: &mut [N], root: u32, x: u32) -> u32 {
    let y = get_r(arena, x).expect("rotate_left requires a right child");
    let b = get_l(arena, y);
    trace!("rotate_left: node {x} under {y}");

    let root = replace_child(arena, Some(root), x, Some(y)).unwrap_or(y);
    set_child(arena, y, Side::Left, Some(x));
    set_child(arena, x, Side::Right, b);
    root
}

/// Right rotation around `z`; `z.l` takes its place. Balances are untouched.
pub fn rotate_right<N: BalancedNode>(arena: &mut [N], root: u32, z: u32) -> u32 {
    let y = get_l(arena, z).expect("rotate_right requires a left child");
    let c = get_r(arena, y);
    trace!("rotate_right: node {z} under {y}");

    let root = replace_child(arena, Some(root), z, Some(y)).unwrap_or(y);
    set_child(arena, y, Side::Right, Some(z));
    set_child(arena, z, Side::Left, c);
    root
}

/// Rotates `node` down towards `side`.
#[inline]
fn rotate<N: BalancedNode>(arena: &mut [N], root: u32, node: u32, side: Side) -> u32 {
    match side {
        Side::Left => rotate_left(arena, root, node),
        Side::Right => rotate_right(arena, root, node),
    }
}

/// Hangs the detached `node` in the empty `side` slot of `parent` and
/// restores balance. Returns the new root.
pub fn insert_leaf<N: BalancedNode>(
    arena: &mut [N],
    root: u32,
    node: u32,
    parent: u32,
    side: Side,
) -> u32 {
    set_child(arena, parent, side, Some(node));
    set_balance(arena, node, 0);

    if balance(arena, parent) != 0 {
        // The parent was leaning the other way; its height is unchanged.
        set_balance(arena, parent, 0);
        return root;
    }

    let rh = height(arena, get_r(arena, parent)) as i32;
    let lh = height(arena, get_l(arena, parent)) as i32;
    set_balance(arena, parent, (rh - lh) as i8);
    insert_fix(arena, root, parent, node)
}

/// Walks up from `parent` (whose subtree just grew by one level through
/// `node`) adjusting balances, rotating once if an ancestor tips to ±2.
pub fn insert_fix<N: BalancedNode>(arena: &mut [N], root: u32, parent: u32, node: u32) -> u32 {
    let Some(grand) = get_p(arena, parent) else {
        return root;
    };

    let side = side_of(arena, grand, parent);
    let delta = grow(side);
    arena[grand as usize].update_balance(delta);

    match balance(arena, grand) {
        0 => {
            trace!("insert_fix: absorbed at {grand}");
            root
        }
        b if b == delta => insert_fix(arena, root, grand, parent),
        _ => {
            if child(arena, parent, side) == Some(node) {
                // zig-zig
                let root = rotate(arena, root, grand, side.opposite());
                set_balance(arena, parent, 0);
                set_balance(arena, grand, 0);
                root
            } else {
                // zig-zag
                let root = rotate(arena, root, parent, side);
                let root = rotate(arena, root, grand, side.opposite());
                let nb = balance(arena, node);
                let (pb, gb) = if nb == delta {
                    (0, -delta)
                } else if nb == -delta {
                    (delta, 0)
                } else {
                    (0, 0)
                };
                set_balance(arena, parent, pb);
                set_balance(arena, grand, gb);
                set_balance(arena, node, 0);
                root
            }
        }
    }
}

/// Exchanges the positions of `x` and `y` together with their balances.
pub fn node_swap<N: BalancedNode>(arena: &mut [N], root: u32, x: u32, y: u32) -> u32 {
    debug!("node_swap: {x} <-> {y}");
    let root = swap(arena, root, x, y);
    let bx = balance(arena, x);
    let by = balance(arena, y);
    set_balance(arena, x, by);
    set_balance(arena, y, bx);
    root
}

/// Unlinks `node` and rebalances. Returns the new root, `None` once the
/// tree is empty. The node's arena slot is left for the caller to release.
pub fn remove<N: BalancedNode>(arena: &mut [N], root: u32, node: u32) -> Option<u32> {
    let mut root = root;
    if let (Some(l), Some(_)) = (get_l(arena, node), get_r(arena, node)) {
        let pred = last(arena, Some(l)).unwrap_or(l);
        root = node_swap(arena, root, node, pred);
    }

    let spliced = splice(arena, Some(root), node);
    match spliced.parent {
        None => spliced.root,
        Some((p, side)) => {
            let diff = -grow(side);
            spliced.root.map(|root| remove_fix(arena, root, Some(p), diff))
        }
    }
}

/// Walks up from `node`, one of whose subtrees just lost a level; `diff` is
/// the resulting change to `node`'s balance (`+1` left shrank, `-1` right
/// shrank). Stops once a level absorbs the change.
pub fn remove_fix<N: BalancedNode>(
    arena: &mut [N],
    root: u32,
    node: Option<u32>,
    diff: i8,
) -> u32 {
    let Some(n) = node else {
        return root;
    };
    let parent = get_p(arena, n);
    let ndiff = parent.map_or(0, |p| -grow(side_of(arena, p, n)));

    let nb = balance(arena, n) + diff;
    if nb == diff {
        trace!("remove_fix: absorbed at {n}");
        set_balance(arena, n, nb);
        return root;
    }
    if nb == 0 {
        set_balance(arena, n, 0);
        return remove_fix(arena, root, parent, ndiff);
    }

    // |nb| == 2: the side opposite the shrink is now two levels taller.
    let tall = if diff < 0 { Side::Left } else { Side::Right };
    let c = child(arena, n, tall).expect("taller subtree is not empty");
    let cb = balance(arena, c);

    if cb == diff {
        // zig-zig
        let root = rotate(arena, root, n, tall.opposite());
        set_balance(arena, n, 0);
        set_balance(arena, c, 0);
        remove_fix(arena, root, parent, ndiff)
    } else if cb == 0 {
        // zig-zig, subtree height unchanged
        let root = rotate(arena, root, n, tall.opposite());
        set_balance(arena, n, diff);
        set_balance(arena, c, -diff);
        trace!("remove_fix: height kept at {c}");
        root
    } else {
        // zig-zag
        let g = child(arena, c, tall.opposite()).expect("inner grandchild exists");
        let root = rotate(arena, root, c, tall);
        let root = rotate(arena, root, n, tall.opposite());
        let gb = balance(arena, g);
        let (nb, cb) = if gb == -diff {
            (0, diff)
        } else if gb == diff {
            (-diff, 0)
        } else {
            (0, 0)
        };
        set_balance(arena, n, nb);
        set_balance(arena, c, cb);
        set_balance(arena, g, 0);
        remove_fix(arena, root, parent, ndiff)
    }
}

/// Checks links, balances and ordering of the tree at `root`.
pub fn assert_avl_tree<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key_of: F,
    comparator: &C,
) -> Result<(), ValidationError>
where
    N: BalancedNode,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };
    if get_p(arena, root).is_some() {
        return Err(ValidationError::RootHasParent(root));
    }

    // Returns the subtree height so each node is measured once.
    fn validate<N: BalancedNode>(arena: &[N], node: u32) -> Result<i32, ValidationError> {
        let mut heights = [0i32; 2];
        for (slot, (side, c)) in [("left", get_l(arena, node)), ("right", get_r(arena, node))]
            .into_iter()
            .enumerate()
        {
            if let Some(c) = c {
                if get_p(arena, c) != Some(node) {
                    return Err(ValidationError::BrokenParentLink {
                        node,
                        child: c,
                        side,
                    });
                }
                heights[slot] = validate(arena, c)?;
            }
        }

        let expected = heights[1] - heights[0];
        let actual = balance(arena, node);
        if i32::from(actual) != expected {
            return Err(ValidationError::BalanceMismatch {
                node,
                expected,
                actual,
            });
        }
        if !(-1..=1).contains(&actual) {
            return Err(ValidationError::Unbalanced {
                node,
                balance: actual,
            });
        }
        Ok(1 + heights[0].max(heights[1]))
    }

    validate(arena, root)?;

    let mut curr = first(arena, Some(root));
    let mut prev: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(p) = prev {
            if comparator(key_of(&arena[p as usize]), key_of(&arena[i as usize])) >= 0 {
                return Err(ValidationError::OrderViolated { prev: p, next: i });
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree_node::TreeNode;
    use crate::util::{insert_left, insert_right};

    fn nodes(keys: &[i32]) -> Vec<TreeNode<i32, ()>> {
        keys.iter().map(|k| TreeNode::new(*k, ())).collect()
    }

    #[test]
    fn rotate_left_reattaches_inner_subtree() {
        //  0(1)            1(3)
        //    \            /   \
        //    1(3)   =>  0(1)  3(4)
        //   /  \          \
        // 2(2) 3(4)       2(2)
        let mut a = nodes(&[1, 3, 2, 4]);
        insert_right(&mut a, 1, 0);
        insert_left(&mut a, 2, 1);
        insert_right(&mut a, 3, 1);
        let root = rotate_left(&mut a, 0, 0);
        assert_eq!(root, 1);
        assert_eq!(a[1].p, None);
        assert_eq!(a[1].l, Some(0));
        assert_eq!(a[1].r, Some(3));
        assert_eq!(a[0].p, Some(1));
        assert_eq!(a[0].r, Some(2));
        assert_eq!(a[2].p, Some(0));
    }

    #[test]
    fn rotate_right_below_root_keeps_root() {
        // 0(5) -> l: 1(3) -> l: 2(2)
        let mut a = nodes(&[5, 3, 2]);
        insert_left(&mut a, 1, 0);
        insert_left(&mut a, 2, 1);
        let root = rotate_right(&mut a, 0, 1);
        assert_eq!(root, 0);
        assert_eq!(a[0].l, Some(2));
        assert_eq!(a[2].p, Some(0));
        assert_eq!(a[2].r, Some(1));
        assert_eq!(a[1].p, Some(2));
        assert_eq!(a[1].l, None);
    }

    #[test]
    fn rotations_leave_balances_alone() {
        let mut a = nodes(&[1, 2]);
        insert_right(&mut a, 1, 0);
        a[0].balance = 1;
        let root = rotate_left(&mut a, 0, 0);
        assert_eq!(root, 1);
        assert_eq!(a[0].balance, 1);
        assert_eq!(a[1].balance, 0);
    }

    #[test]
    fn node_swap_exchanges_balances() {
        let mut a = nodes(&[2, 1]);
        insert_left(&mut a, 1, 0);
        a[0].balance = -1;
        let root = node_swap(&mut a, 0, 0, 1);
        assert_eq!(root, 1);
        assert_eq!(a[1].balance, -1);
        assert_eq!(a[0].balance, 0);
        assert_eq!(a[1].l, Some(0));
    }

    #[test]
    fn validator_reports_bad_balance() {
        let mut a = nodes(&[1, 2]);
        insert_right(&mut a, 1, 0);
        let cmp = |x: &i32, y: &i32| x.cmp(y) as i32;
        let err = assert_avl_tree(&a, Some(0), |n| &n.k, &cmp).unwrap_err();
        assert_eq!(
            err,
            ValidationError::BalanceMismatch {
                node: 0,
                expected: 1,
                actual: 0
            }
        );
    }
}
