//! Sentinel-based red-black tree for Rust.
//!
//! This crate provides [`RBTree`], a self-balancing binary search tree ordered by a
//! caller-supplied total order, with O(log n) insertion and guaranteed logarithmic
//! height regardless of insertion sequence:
//!
//! - [`insert`](RBTree::insert) - Place a value and rebalance in O(log n)
//! - [`rotate_left`](RBTree::rotate_left) / [`rotate_right`](RBTree::rotate_right) -
//!   The structural primitives, exposed for harnesses that verify invariants directly
//! - [`root`](RBTree::root), [`left`](RBTree::left), [`right`](RBTree::right),
//!   [`parent`](RBTree::parent), [`color`](RBTree::color) - Structural inspection by [`NodeId`]
//!
//! # Example
//!
//! ```
//! use redblack_tree::{Color, RBTree};
//!
//! let mut tree = RBTree::new();
//! tree.insert(10)?;
//! tree.insert(20)?;
//! tree.insert(30)?;
//!
//! // The tree rebalanced: 20 is the root, colored black.
//! let root = tree.root().unwrap();
//! assert_eq!(tree.get(root), Some(&20));
//! assert_eq!(tree.color(root), Some(Color::Black));
//! assert_eq!(tree.len(), 3);
//! # Ok::<(), redblack_tree::Error>(())
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Caller-supplied ordering** - Any `Fn(&T, &T) -> Ordering` closure (or anything
//!   implementing [`Comparator`]) fixes the total order at construction
//! - **Arena-backed** - Nodes live in contiguous tree-owned storage addressed by
//!   index handles, so the cyclic parent/child link graph involves no raw aliasing
//! - **Sentinel model** - One always-black sentinel per tree stands in for every
//!   "no child" and "no parent" slot, so rebalancing code never branches on null
//!
//! # Implementation
//!
//! The tree is a classic red-black tree: every node is red or black, the root and
//! sentinel are black, a red node never has a red parent, and every path from a node
//! down to a sentinel crosses the same number of black nodes. Insertion attaches a
//! red leaf and restores these properties with at most two rotations plus O(log n)
//! recolorings. Deletion and search are deliberately left to future releases; the
//! node model and accessors here are the contract they will build against.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod comparator;
mod error;
mod raw;

pub mod rbtree;

pub use comparator::{Comparator, NaturalOrder};
pub use error::Error;
pub use rbtree::{Color, NodeId, RBTree};
