//! Node trait definitions.
//!
//! Nodes are stored in a [`Vec`]-backed arena and every link is an
//! `Option<u32>` index into that arena. All structural functions take the
//! arena as a slice and work with indices, so the parent link is a plain
//! non-owning index and never forms an ownership cycle.

/// Structural links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Key/value node interface used by the map-like trees.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;
    fn set_value(&mut self, value: V) -> V;
}

/// Node carrying an AVL balance factor, `height(right) - height(left)`.
///
/// At rest the factor is always in `-1..=1`; `-2` and `2` only exist
/// transiently while a fix-up is running.
pub trait BalancedNode: Node {
    fn balance(&self) -> i8;
    fn set_balance(&mut self, balance: i8);

    fn update_balance(&mut self, diff: i8) {
        let balance = self.balance() + diff;
        self.set_balance(balance);
    }
}

/// Default comparator for `PartialOrd` keys.
pub fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}
