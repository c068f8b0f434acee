//! This crate exposes a mutable, unbalanced Binary Search Tree (BST) that
//! stores a set of ordered values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! In this crate the stored values double as the search keys, so a third
//! invariant follows from the first two: no value appears in the tree twice.
//! Inserting a value that is already present is rejected with an error
//! instead of silently overwriting a node.
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the
//! number of levels on the longest path from the root `Node` to a leaf
//! `Node`). BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree. That is one
//! of the four traversal orders ([`Tree::breadth_first`], [`Tree::pre_order`],
//! [`Tree::in_order`], [`Tree::post_order`]) the tree exposes.
//!
//! The tree never rebalances itself, so its shape is purely a function of
//! the order values were inserted in. [`Tree::height`] and
//! [`Tree::is_balanced`] report how lopsided a given insertion order left
//! the tree.
//!
//! [`Tree::breadth_first`]: tree::Tree::breadth_first
//! [`Tree::pre_order`]: tree::Tree::pre_order
//! [`Tree::in_order`]: tree::Tree::in_order
//! [`Tree::post_order`]: tree::Tree::post_order
//! [`Tree::height`]: tree::Tree::height
//! [`Tree::is_balanced`]: tree::Tree::is_balanced

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod tree;

#[cfg(test)]
mod test;
