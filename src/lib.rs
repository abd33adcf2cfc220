//! An ordered multiset built on a B-tree with a compile-time fan-out.
//!
//! This crate provides [`BTreeBag`], an ordered collection that keeps every
//! inserted key, duplicates included, in sorted order. The tree's fan-out is
//! the const generic parameter `ORDER`, so a node's capacity is fixed at
//! compile time and small orders (down to 3) can be exercised directly.
//!
//! # Example
//!
//! ```
//! use tansu_tree::BTreeBag;
//!
//! let mut bag: BTreeBag<i32> = BTreeBag::new();
//! bag.insert(3);
//! bag.insert(1);
//! bag.insert(3);
//!
//! assert_eq!(bag.len(), 3);
//! assert!(bag.contains(&3));
//! assert_eq!(bag.iter().copied().collect::<Vec<_>>(), [1, 3, 3]);
//!
//! assert!(bag.remove(&3));
//! assert_eq!(bag.len(), 2);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library
//!   dependency
//! - **Multiset semantics** - Inserting an existing key adds another
//!   occurrence; `remove` drops one occurrence at a time
//! - **Configurable order** - `BTreeBag<T, ORDER>` for any `ORDER >= 3`,
//!   checked at compile time
//! - **Borrowing iteration** - In-order iterators borrow the tree, so the
//!   compiler rejects mutation while one is live
//!
//! # Implementation
//!
//! Nodes own their children through `Box` and store keys inline in
//! `SmallVec` arrays sized by `ORDER`. Insertion splits full nodes on the
//! way down; deletion keeps every node it descends through above the
//! minimum fill by borrowing from or merging with siblings. Iteration
//! drives an explicit stack of `(node, next key)` frames, one advance per
//! key, without recursion.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

extern crate alloc;

mod bag;
mod error;
mod iter;
mod node;

pub use bag::BTreeBag;
pub use error::{Error, Result};
pub use iter::{IntoIter, Iter};
