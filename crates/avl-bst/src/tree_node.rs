use crate::types::{BalancedNode, KvNode, Node};

/// Arena node shared by the plain and the balanced tree.
///
/// The balance field is always present; the unbalanced tree leaves it at 0.
#[derive(Clone, Debug)]
pub struct TreeNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    pub balance: i8,
}

impl<K, V> TreeNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            balance: 0,
        }
    }

    pub fn into_entry(self) -> (K, V) {
        (self.k, self.v)
    }
}

impl<K, V> Node for TreeNode<K, V> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K, V> KvNode<K, V> for TreeNode<K, V> {
    fn key(&self) -> &K {
        &self.k
    }

    fn value(&self) -> &V {
        &self.v
    }

    fn value_mut(&mut self) -> &mut V {
        &mut self.v
    }

    fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.v, value)
    }
}

impl<K, V> BalancedNode for TreeNode<K, V> {
    fn balance(&self) -> i8 {
        self.balance
    }

    fn set_balance(&mut self, balance: i8) {
        self.balance = balance;
    }
}
