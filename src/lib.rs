//! An unbalanced Binary Search Tree over any totally ordered element type.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for elements in the tree takes `O(height)` (where `height` is defined as
//! the longest path from the root `Node` to a leaf `Node`). This tree does no
//! rebalancing, so inserting already sorted elements degrades it into a list with
//! `height == len`. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.find_min(), Some(&1));
//! assert_eq!(tree.find_max(), Some(&9));
//! assert!(tree.contains(&4));
//! assert!(!tree.contains(&6));
//!
//! tree.remove(&5);
//!
//! let mut sorted = Vec::new();
//! tree.traverse(|x| sorted.push(*x));
//! assert_eq!(sorted, [1, 3, 4, 7, 8, 9]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]
#![forbid(unsafe_code)]

pub mod iter;
mod node;
pub mod order;
pub mod sink;
pub mod tree;

pub use iter::Iter;
pub use order::{Comparator, Natural};
pub use sink::{LineWriter, Sink};
pub use tree::OrderedTree;

#[cfg(test)]
mod test;
