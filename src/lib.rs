//! A left-leaning red-black tree container.
//!
//! [`LlrbTree`] keeps [`Keyed`] elements sorted by the keys they carry,
//! with *O*(log *n*) insertion, point lookup and point removal. Elements
//! own their keys; the tree never stores a key apart from its element.
//!
//! # Example
//!
//! ```
//! use llrb_tree::{Keyed, LlrbTree};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Session {
//!     user: u32,
//!     minutes: u32,
//! }
//!
//! impl Keyed for Session {
//!     type Key = u32;
//!
//!     fn key(&self) -> &u32 {
//!         &self.user
//!     }
//! }
//!
//! let mut sessions = LlrbTree::new();
//! sessions.insert(Session { user: 11, minutes: 3 });
//! sessions.insert(Session { user: 7, minutes: 25 });
//! sessions.insert(Session { user: 11, minutes: 4 });
//!
//! assert_eq!(sessions.len(), 2);
//! assert_eq!(sessions.search(&11), Some(&Session { user: 11, minutes: 4 }));
//!
//! assert!(sessions.remove(&7));
//! assert_eq!(sessions.search(&7), None);
//! ```
//!
//! # Features
//!
//! - `no_std` compatible (requires `alloc`).
//! - No `unsafe` code.
//! - Nodes live in a slot arena; child links are niche-compressed handles,
//!   half the size of the pointers they replace.
//! - Property-tested against `BTreeMap` as a model.
//!
//! # Implementation
//!
//! The backing structure is a left-leaning red-black tree: a binary search
//! tree whose red links always lean left and encode a 2-3 tree. Insertion
//! splits red pairs on the way down and repairs leans on the way back up;
//! removal carries a red link down the search path so the target is never a
//! lone black leaf, then repairs on the unwind. Both touch *O*(log *n*)
//! nodes.
#![no_std]
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

mod keyed;
mod raw;

pub mod llrb_tree;

pub use keyed::Keyed;
pub use llrb_tree::LlrbTree;
