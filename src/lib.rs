//! A link-based Binary Search Tree (BST) over totally ordered items, along with the tools needed
//! to compare search costs across tree shapes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored items. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one item
//! and will sometimes have child `Node`s. The most important invariants
//! of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree hold an item
//!    strictly less than its own item.
//! 2. For every `Node`, all the `Node`s in its right subtree hold an item
//!    greater than or equal to its own item. Equal items always go right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the
//! root `Node` to a leaf `Node`. [`OrderedTree`] never balances itself while
//! items are added, so its height depends on insertion order: sorted input
//! produces a chain. Calling [`OrderedTree::rebalance`] rebuilds the tree by
//! picking medians which brings the height back down to `O(lg N)`.
//!
//! # Examples
//!
//! ```
//! use linked_bst::OrderedTree;
//!
//! let mut tree = OrderedTree::from_items([5, 3, 8, 1, 4]);
//!
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
//! assert_eq!(tree.height(), 2);
//!
//! assert_eq!(tree.remove(&3), Ok(3));
//! assert!(tree.remove(&99).is_err());
//! assert_eq!(tree.size(), 4);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod linked;
mod stack;
pub mod traversal;
mod util;


pub use error::NotFoundError;
pub use linked::OrderedTree;
