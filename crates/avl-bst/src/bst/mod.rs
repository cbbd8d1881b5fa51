//! Unbalanced binary search tree.
//!
//! Owns the node arena and the root. Used directly as a plain ordered map
//! and as the storage layer of [`AvlTree`](crate::avl::AvlTree), which
//! replaces `insert` / `remove` but reuses everything else here.

use std::fmt::{self, Debug};

use crate::error::{KeyError, ValidationError};
use crate::iter::{Iter, Keys, Values};
use crate::print::print;
use crate::tree_node::TreeNode;
use crate::types::{default_comparator, KvNode};
use crate::util::{self, descend, find, first, get_l, get_p, get_r, last, next, Descent, Side};

/// Arena-backed ordered map without rebalancing.
pub struct BinarySearchTree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    pub(crate) root: Option<u32>,
    pub(crate) arena: Vec<TreeNode<K, V>>,
    comparator: C,
}

impl<K, V> BinarySearchTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for BinarySearchTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> BinarySearchTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            arena: Vec::new(),
            comparator,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub(crate) fn locate(&self, key: &K) -> Descent {
        descend(&self.arena, self.root, key, |n| &n.k, |a, b| (self.comparator)(a, b))
    }

    pub(crate) fn find(&self, key: &K) -> Option<u32> {
        find(&self.arena, self.root, key, |n| &n.k, |a, b| (self.comparator)(a, b))
    }

    pub(crate) fn alloc(&mut self, key: K, value: V) -> u32 {
        self.arena.push(TreeNode::new(key, value));
        (self.arena.len() - 1) as u32
    }

    /// Drops the detached node at `idx` from the arena, moving the last slot
    /// into the hole so the arena stays dense.
    pub(crate) fn release(&mut self, idx: u32) -> (K, V) {
        let moved = (self.arena.len() - 1) as u32;
        let node = self.arena.swap_remove(idx as usize);
        self.root = util::relocate(&mut self.arena, self.root, moved, idx);
        node.into_entry()
    }

    /// Inserts or overwrites. Returns the previous value for an existing key.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.locate(&key) {
            Descent::Found(i) => Some(self.arena[i as usize].set_value(value)),
            Descent::Empty => {
                self.root = Some(self.alloc(key, value));
                None
            }
            Descent::Vacant { parent, side } => {
                let node = self.alloc(key, value);
                match side {
                    Side::Left => util::insert_left(&mut self.arena, node, parent),
                    Side::Right => util::insert_right(&mut self.arena, node, parent),
                }
                None
            }
        }
    }

    /// Removes `key`, returning its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let node = self.find(key)?;
        self.root = util::remove(&mut self.arena, self.root, node);
        Some(self.release(node).1)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| &self.arena[i as usize].v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let i = self.find(key)?;
        Some(self.arena[i as usize].value_mut())
    }

    /// Like [`get`](Self::get), but reports why the lookup failed.
    pub fn at(&self, key: &K) -> Result<&V, KeyError> {
        if self.is_empty() {
            return Err(KeyError::EmptyTree);
        }
        self.get(key).ok_or(KeyError::NotFound)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    pub fn min(&self) -> Result<(&K, &V), KeyError> {
        first(&self.arena, self.root)
            .map(|i| self.entry(i))
            .ok_or(KeyError::EmptyTree)
    }

    pub fn max(&self) -> Result<(&K, &V), KeyError> {
        last(&self.arena, self.root)
            .map(|i| self.entry(i))
            .ok_or(KeyError::EmptyTree)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Height of the whole tree; empty is 0, a single node is 1.
    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    pub fn root_key(&self) -> Option<&K> {
        self.root.map(|i| &self.arena[i as usize].k)
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.arena, self.root)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Keys with their balance factors in pre-order, which pins down the
    /// exact shape of the tree.
    pub fn pre_order(&self) -> Vec<(&K, i8)> {
        let mut out = Vec::with_capacity(self.arena.len());
        let mut stack: Vec<u32> = self.root.into_iter().collect();
        while let Some(i) = stack.pop() {
            let n = &self.arena[i as usize];
            out.push((&n.k, n.balance));
            stack.extend(n.r);
            stack.extend(n.l);
        }
        out
    }

    pub(crate) fn entry(&self, i: u32) -> (&K, &V) {
        let n = &self.arena[i as usize];
        (&n.k, &n.v)
    }

    pub fn dump(&self) -> String
    where
        K: Debug,
        V: Debug,
    {
        print::<K, V, TreeNode<K, V>>(&self.arena, self.root, "")
    }

    /// Checks parent links, key order and that every arena slot is reachable.
    pub fn assert_valid(&self) -> Result<(), ValidationError> {
        if let Some(root) = self.root {
            if get_p(&self.arena, root).is_some() {
                return Err(ValidationError::RootHasParent(root));
            }
        }

        let mut reachable = 0;
        let mut stack: Vec<u32> = self.root.into_iter().collect();
        while let Some(node) = stack.pop() {
            reachable += 1;
            for (side, c) in [("left", get_l(&self.arena, node)), ("right", get_r(&self.arena, node))] {
                let Some(c) = c else { continue };
                if get_p(&self.arena, c) != Some(node) {
                    return Err(ValidationError::BrokenParentLink {
                        node,
                        child: c,
                        side,
                    });
                }
                stack.push(c);
            }
        }
        if reachable != self.arena.len() {
            return Err(ValidationError::SizeMismatch {
                reachable,
                stored: self.arena.len(),
            });
        }

        let mut curr = first(&self.arena, self.root);
        let mut prev: Option<u32> = None;
        while let Some(i) = curr {
            if let Some(p) = prev {
                if (self.comparator)(&self.arena[p as usize].k, &self.arena[i as usize].k) >= 0 {
                    return Err(ValidationError::OrderViolated { prev: p, next: i });
                }
            }
            prev = Some(i);
            curr = next(&self.arena, i);
        }
        Ok(())
    }
}

impl<K: Debug, V: Debug, C> Debug for BinarySearchTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, C> IntoIterator for &'a BinarySearchTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(keys: &[i32]) -> BinarySearchTree<i32, i32> {
        let mut t = BinarySearchTree::new();
        for k in keys {
            t.insert(*k, k * 10);
        }
        t
    }

    #[test]
    fn insert_builds_unbalanced_chain() {
        let t = tree(&[1, 2, 3, 4]);
        assert_eq!(t.height(), 4);
        assert_eq!(t.root_key(), Some(&1));
        t.assert_valid().unwrap();
    }

    #[test]
    fn remove_each_shape() {
        let mut t = tree(&[4, 2, 6, 1, 3, 5]);
        // leaf
        assert_eq!(t.remove(&1), Some(10));
        t.assert_valid().unwrap();
        // one child
        assert_eq!(t.remove(&6), Some(60));
        t.assert_valid().unwrap();
        // two children: predecessor 3 replaces the root
        assert_eq!(t.remove(&4), Some(40));
        t.assert_valid().unwrap();
        assert_eq!(t.root_key(), Some(&3));
        assert_eq!(t.keys().copied().collect::<Vec<_>>(), vec![2, 3, 5]);
        assert_eq!(t.remove(&4), None);
    }

    #[test]
    fn release_keeps_arena_dense() {
        let mut t = tree(&[5, 3, 8, 1, 4]);
        t.remove(&3);
        assert_eq!(t.len(), 4);
        assert_eq!(t.arena.len(), 4);
        t.assert_valid().unwrap();
        assert_eq!(t.get(&4), Some(&40));
        assert_eq!(t.get(&1), Some(&10));
    }
}
