use std::fmt::{self, Debug};

use crate::bst::BinarySearchTree;
use crate::error::{KeyError, ValidationError};
use crate::iter::{Iter, Keys, Values};
use crate::types::{default_comparator, KvNode};
use crate::util::Descent;

use super::util;

/// Height-balanced ordered map.
///
/// Storage, lookup and iteration come from [`BinarySearchTree`]; `insert`
/// and `remove` additionally maintain per-node balance factors and rotate
/// so that no node's subtrees differ in height by more than one.
pub struct AvlTree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    inner: BinarySearchTree<K, V, C>,
}

impl<K, V> AvlTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for AvlTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: BinarySearchTree::with_comparator(comparator),
        }
    }

    /// Inserts or overwrites. Overwriting changes neither shape nor balances.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let bst = &mut self.inner;
        match bst.locate(&key) {
            Descent::Found(i) => Some(bst.arena[i as usize].set_value(value)),
            Descent::Empty => {
                bst.root = Some(bst.alloc(key, value));
                None
            }
            Descent::Vacant { parent, side } => {
                let node = bst.alloc(key, value);
                let root = bst.root.unwrap_or(parent);
                bst.root = Some(util::insert_leaf(&mut bst.arena, root, node, parent, side));
                None
            }
        }
    }

    /// Removes `key`, returning its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let bst = &mut self.inner;
        let node = bst.find(key)?;
        let root = bst.root?;
        bst.root = util::remove(&mut bst.arena, root, node);
        Some(bst.release(node).1)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.inner.get_mut(key)
    }

    pub fn at(&self, key: &K) -> Result<&V, KeyError> {
        self.inner.at(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    pub fn min(&self) -> Result<(&K, &V), KeyError> {
        self.inner.min()
    }

    pub fn max(&self) -> Result<(&K, &V), KeyError> {
        self.inner.max()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn height(&self) -> usize {
        self.inner.height()
    }

    pub fn root_key(&self) -> Option<&K> {
        self.inner.root_key()
    }

    /// Balance factor of the node holding `key`.
    pub fn balance_of(&self, key: &K) -> Option<i8> {
        self.inner
            .find(key)
            .map(|i| self.inner.arena[i as usize].balance)
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.inner.iter()
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        self.inner.keys()
    }

    pub fn values(&self) -> Values<'_, K, V> {
        self.inner.values()
    }

    pub fn pre_order(&self) -> Vec<(&K, i8)> {
        self.inner.pre_order()
    }

    pub fn comparator(&self) -> &C {
        self.inner.comparator()
    }

    pub fn dump(&self) -> String
    where
        K: Debug,
        V: Debug,
    {
        self.inner.dump()
    }

    pub fn assert_valid(&self) -> Result<(), ValidationError> {
        self.inner.assert_valid()?;
        util::assert_avl_tree(
            &self.inner.arena,
            self.inner.root,
            |n| &n.k,
            self.inner.comparator(),
        )
    }
}

impl<K: Debug, V: Debug, C> Debug for AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, C> IntoIterator for &'a AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> Extend<(K, V)> for AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for AvlTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(keys: &[i32]) -> AvlTree<i32, i32> {
        keys.iter().map(|k| (*k, *k)).collect()
    }

    #[test]
    fn ascending_insert_rotates_once() {
        let t = tree(&[1, 2, 3]);
        assert_eq!(t.pre_order(), vec![(&2, 0), (&1, 0), (&3, 0)]);
        t.assert_valid().unwrap();
    }

    #[test]
    fn zig_zag_insert() {
        let t = tree(&[3, 1, 2]);
        assert_eq!(t.pre_order(), vec![(&2, 0), (&1, 0), (&3, 0)]);
        t.assert_valid().unwrap();
    }

    #[test]
    fn insert_into_leaning_parent_stops() {
        let mut t = tree(&[2, 1]);
        assert_eq!(t.balance_of(&2), Some(-1));
        t.insert(3, 3);
        assert_eq!(t.pre_order(), vec![(&2, 0), (&1, 0), (&3, 0)]);
    }

    #[test]
    fn remove_with_unchanged_height_rotation() {
        //   2              4
        //  / \            / \
        // 1   4    =>    2   5
        //    / \          \
        //   3   5          3
        let mut t = tree(&[2, 1, 4, 3, 5]);
        t.remove(&1);
        t.assert_valid().unwrap();
        assert_eq!(t.root_key(), Some(&4));
        assert_eq!(t.balance_of(&4), Some(-1));
        assert_eq!(t.balance_of(&2), Some(1));
    }
}
