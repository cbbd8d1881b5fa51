//! Self-balancing (AVL) tree built on the unbalanced [`bst`](crate::bst)
//! storage layer.

pub mod avl_tree;
pub mod util;

pub use avl_tree::AvlTree;
pub use util::{insert_fix, insert_leaf, node_swap, remove_fix, rotate_left, rotate_right};
