//! Child/parent link surgery shared by the plain and the balanced tree.

use crate::types::Node;

use super::{get_l, get_p, get_r, last, set_child, set_l, set_p, set_r, side_of, swap, Side};

/// Attaches a detached `node` as the empty left child of `parent`.
pub fn insert_left<N: Node>(arena: &mut [N], node: u32, parent: u32) {
    debug_assert!(get_l(arena, parent).is_none(), "left slot is occupied");
    set_child(arena, parent, Side::Left, Some(node));
}

/// Attaches a detached `node` as the empty right child of `parent`.
pub fn insert_right<N: Node>(arena: &mut [N], node: u32, parent: u32) {
    debug_assert!(get_r(arena, parent).is_none(), "right slot is occupied");
    set_child(arena, parent, Side::Right, Some(node));
}

/// Points whatever referenced `old` at `new` instead.
///
/// That is `old`'s parent link, or the root when `old` has no parent.
/// `new` inherits `old`'s parent. Returns the root afterwards. The links of
/// `old` itself are left untouched.
pub fn replace_child<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    old: u32,
    new: Option<u32>,
) -> Option<u32> {
    let p = get_p(arena, old);
    if let Some(new) = new {
        set_p(arena, new, p);
    }
    match p {
        Some(p) => {
            match side_of(arena, p, old) {
                Side::Left => set_l(arena, p, new),
                Side::Right => set_r(arena, p, new),
            }
            root
        }
        None => new,
    }
}

/// Result of unlinking a node from the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spliced {
    /// Root after the unlink.
    pub root: Option<u32>,
    /// Former parent of the unlinked node and the slot it occupied there.
    pub parent: Option<(u32, Side)>,
}

/// Unlinks `node`, which must have at most one child, promoting that child
/// into its slot. The unlinked node ends up with no links at all.
pub fn splice<N: Node>(arena: &mut [N], root: Option<u32>, node: u32) -> Spliced {
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    debug_assert!(l.is_none() || r.is_none(), "splice requires at most one child");

    let parent = get_p(arena, node).map(|p| (p, side_of(arena, p, node)));
    let root = replace_child(arena, root, node, l.or(r));
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);
    Spliced { root, parent }
}

/// Unbalanced removal of `node`. Returns the new root.
///
/// A leaf is dropped, a node with one child is replaced by it, and a node
/// with two children first trades places with its in-order predecessor so
/// that the node actually unlinked has at most one child.
pub fn remove<N: Node>(arena: &mut [N], root: Option<u32>, node: u32) -> Option<u32> {
    let mut root = root;
    if let (Some(l), Some(_)) = (get_l(arena, node), get_r(arena, node)) {
        if let (Some(r), Some(pred)) = (root, last(arena, Some(l))) {
            root = Some(swap(arena, r, node, pred));
        }
    }
    splice(arena, root, node).root
}

/// Rewrites every link that refers to slot `from` so it refers to `to`.
///
/// Called after `Vec::swap_remove(to)` moved the node formerly stored at
/// `from` into slot `to`. Nothing may still reference the removed node.
pub fn relocate<N: Node>(arena: &mut [N], root: Option<u32>, from: u32, to: u32) -> Option<u32> {
    if from == to {
        return root;
    }
    if let Some(p) = get_p(arena, to) {
        if get_l(arena, p) == Some(from) {
            set_l(arena, p, Some(to));
        } else {
            set_r(arena, p, Some(to));
        }
    }
    if let Some(l) = get_l(arena, to) {
        set_p(arena, l, Some(to));
    }
    if let Some(r) = get_r(arena, to) {
        set_p(arena, r, Some(to));
    }
    if root == Some(from) {
        Some(to)
    } else {
        root
    }
}
