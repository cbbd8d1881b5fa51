//! Arena-based ordered maps: a plain binary search tree and an AVL tree.
//!
//! Nodes live in a caller-invisible `Vec` arena and every "pointer" is an
//! `Option<u32>` index into it, so the parent back-link is a plain index
//! rather than a second owner.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`], [`KvNode`], [`BalancedNode`] traits |
//! [`tree_node`] | [`TreeNode`], the arena node shared by both trees |
//! [`util`] | traversal, lookup and link surgery (`swap`, `splice`, `remove`) |
//! [`bst`] | [`BinarySearchTree`], unbalanced storage layer |
//! [`avl`] | [`AvlTree`] plus the rotation and fix-up routines |
//! [`iter`] | bidirectional in-order iterators |
//!
//! ```
//! use avl_bst::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for k in 1..=3 {
//!     tree.insert(k, k * 10);
//! }
//! assert_eq!(tree.root_key(), Some(&2));
//! assert_eq!(tree.get(&3), Some(&30));
//! tree.remove(&2);
//! assert_eq!(tree.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
//! ```

pub mod avl;
pub mod bst;
pub mod error;
pub mod iter;
pub mod print;
pub mod tree_node;
pub mod types;
pub mod util;

pub use avl::AvlTree;
pub use bst::BinarySearchTree;
pub use error::{KeyError, ValidationError};
pub use iter::{Iter, Keys, Values};
pub use tree_node::TreeNode;
pub use types::{BalancedNode, KvNode, Node};
