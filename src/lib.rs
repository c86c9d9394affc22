//! This crate exposes an unbalanced Binary Search Tree (BST) holding a set of
//! unique values, plus a small line-driven shell that renders its shape.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). The tree in this
//! crate never rebalances itself, so inserting values in sorted order gives a
//! height of `N - 1` and every operation becomes linear. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root,
//! then the right subtree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod node;
pub mod shell;
pub mod tree;
mod util;


pub use tree::OrderedTree;
