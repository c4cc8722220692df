//! An ordered key-value map on a classic B-tree.
//!
//! This crate provides [`LarchMap`], an in-memory ordered map whose branching
//! parameter (the tree *degree*) is chosen per map at construction rather
//! than fixed at compile time. On top of the usual point operations it
//! exposes the tree's shape:
//!
//! - [`groups`](LarchMap::groups) - In-order traversal that yields whole leaf
//!   groups alternating with the separator entries dividing them
//! - [`depth`](LarchMap::depth) - The number of edges from the root to any leaf
//! - [`level_reader`](LarchMap::level_reader) - A read-only walker over all
//!   nodes at a chosen depth, for structural inspection
//!
//! # Example
//!
//! ```
//! use larch::LarchMap;
//!
//! let mut primes = LarchMap::new(4);
//! primes.insert(2, "two");
//! primes.insert(3, "three");
//! primes.insert(5, "five");
//! primes.insert(7, "seven");
//!
//! assert_eq!(primes.get(&5), Some(&"five"));
//! assert_eq!(primes.remove(&3), Some("three"));
//! assert_eq!(primes.remove(&3), None);
//!
//! let keys: Vec<_> = primes.keys().copied().collect();
//! assert_eq!(keys, [2, 5, 7]);
//! ```
//!
//! # Structure
//!
//! A map of degree `D` stores between `(D - 1) / 2` and `D - 1` entries in
//! every node except the root, and keeps all leaves at the same depth. Unlike
//! a B+tree, separator entries in internal nodes are real key-value pairs;
//! the full entry set is the union of every node's entries. Insertion splits
//! over-full nodes about their median and promotes it; deletion refills
//! under-full nodes from a sibling, or merges them when the pair cannot
//! spare a separator. Both kinds of structural change propagate from the
//! leaves toward the root, which grows or sheds a level as needed.
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Runtime degree** - Tune the fan-out per map without recompiling
//! - **Cooperative cancellation** - Traversal can be stopped between groups
//!   via an [`AtomicBool`](core::sync::atomic::AtomicBool) flag

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

mod entry;
mod raw;

pub mod larch_map;

pub use entry::Entry;
pub use larch_map::{Groups, Iter, Keys, LarchMap, LevelReader, NodeView, Values};
