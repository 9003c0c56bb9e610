//! This crate builds an unbalanced Binary Search Tree (BST) one key at a time
//! and places every node on a 2-D plane as it is added, so that the growth of
//! the tree can be animated by a separate renderer.
//!
//! ## Binary Search Tree
//!
//! A BST is built from `Node`s, each storing a key and up to two child `Node`s.
//! Its invariants are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less than
//!    its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key greater
//!    than or equal to its own key.
//!
//! The second rule lets the tree hold duplicates: an equal key always goes right.
//! No rebalancing happens, so the shape depends entirely on insertion order.
//!
//! ## Layout
//!
//! The root goes at the origin. Each child sits a fixed step below its parent and
//! to the side by `base_span / 2^depth`, where `depth` is the parent's depth. A
//! node's position is fixed when it is inserted. See [`layout`].
//!
//! ## Construction
//!
//! [`construction::Session`] ties the two together and emits, per key, a path
//! highlight, a node and (except for the root) an edge, then a completion event
//! once the input is exhausted.
//!
//! ```
//! use bst_layout::construction::{construct, Event};
//! use bst_layout::layout::Layout;
//!
//! let (tree, events) = construct([50, 30, 70, 20, 40, 60, 80], Layout::default());
//!
//! assert_eq!(tree.height(), 3);
//! let edges = events
//!     .iter()
//!     .filter(|e| matches!(e, Event::EdgeAppear { .. }))
//!     .count();
//! assert_eq!(edges, 6);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod construction;
pub mod layout;
pub mod tree;
