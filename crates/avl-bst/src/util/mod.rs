//! Structural (p / l / r) utility functions over a node arena.
//!
//! - traversal: [`first`], [`last`], [`next`], [`prev`], [`size`], [`height`]
//! - lookup: [`find`], [`descend`]
//! - link surgery: [`link`] (attach, splice, unbalanced remove, compaction)
//! - position exchange: [`swap`]
//!
//! Key-based helpers accept a `key_of` accessor closure so any arena node
//! layout can be used, not only [`TreeNode`](crate::tree_node::TreeNode).

pub mod link;
pub mod swap;

use crate::types::Node;

pub use link::{insert_left, insert_right, relocate, remove, replace_child, splice};
pub use swap::swap;

/// Which child slot of a parent a node occupies.
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
}

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
pub(crate) fn child<N: Node>(arena: &[N], parent: u32, side: Side) -> Option<u32> {
    match side {
        Side::Left => get_l(arena, parent),
        Side::Right => get_r(arena, parent),
    }
}

/// Sets `parent`'s child slot and, if present, the child's back link.
#[inline]
pub(crate) fn set_child<N: Node>(arena: &mut [N], parent: u32, side: Side, node: Option<u32>) {
    match side {
        Side::Left => set_l(arena, parent, node),
        Side::Right => set_r(arena, parent, node),
    }
    if let Some(node) = node {
        set_p(arena, node, Some(parent));
    }
}

/// Side of `parent` on which `node` hangs.
#[inline]
pub fn side_of<N: Node>(arena: &[N], parent: u32, node: u32) -> Side {
    if get_l(arena, parent) == Some(node) {
        Side::Left
    } else {
        debug_assert_eq!(get_r(arena, parent), Some(node), "node is not a child of parent");
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
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| {
        1 + size(arena, get_l(arena, r)) + size(arena, get_r(arena, r))
    })
}

/// Height of the subtree at `node`: an empty subtree is 0, a leaf is 1.
pub fn height<N: Node>(arena: &[N], node: Option<u32>) -> usize {
    match node {
        None => 0,
        Some(i) => 1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i))),
    }
}

/// Finds a node by key.
pub fn find<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    match descend(arena, root, key, key_of, comparator) {
        Descent::Found(i) => Some(i),
        _ => None,
    }
}

/// Outcome of walking down from the root towards `key`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Descent {
    /// The tree has no nodes.
    Empty,
    /// A node with an equal key exists.
    Found(u32),
    /// The key belongs in the empty `side` slot of `parent`.
    Vacant { parent: u32, side: Side },
}

/// Standard BST descent comparing `key` against each visited node.
pub fn descend<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Descent
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        return Descent::Empty;
    };
    loop {
        let cmp = comparator(key, key_of(&arena[curr as usize]));
        if cmp == 0 {
            return Descent::Found(curr);
        }
        let side = if cmp < 0 { Side::Left } else { Side::Right };
        match child(arena, curr, side) {
            Some(c) => curr = c,
            None => return Descent::Vacant { parent: curr, side },
        }
    }
}
