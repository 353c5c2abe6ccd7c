//! chained-dict: a fixed-capacity word -> meaning dictionary built on
//! separate chaining over doubly linked lists.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, easily audited lookup table whose only moving parts
//!   are the list that stores each chain and the routing of keys to
//!   chains.
//! - Layers:
//!   - ChainedList<T>: generic doubly linked list. Nodes live in a
//!     per-list `SlotMap` arena; forward and back links are arena keys.
//!     Push/pop at either end, search, count and erase by equality.
//!   - HashTable<H>: `capacity` independent `ChainedList<Entry>` buckets
//!     plus a `KeyHasher` that routes a word to its bucket. Insert
//!     appends; lookup scans the bucket head to tail.
//!
//! Constraints
//! - Single-threaded: `!Send`/`!Sync` through the list's reentrancy
//!   tracker. No locking.
//! - Capacity is `2 * expected_entries` (at least 1) and never changes.
//!   No rehashing, no removal from the table.
//! - Duplicate words append. Lookups return the earliest match.
//! - Keys compare by exact character sequence; no normalization.
//!
//! Ownership
//! - The table owns its boxed slice of buckets; each bucket's arena owns
//!   its nodes. Links never own anything, so dropping a list releases
//!   every node exactly once regardless of size.
//! - Callers traverse with `NodeRef`, a shared borrow of the list, which
//!   cannot outlive the node it points at or observe a relink.
//!
//! Reentrancy policy
//! - `find`, `count` and `erase` call `T: PartialEq`. A debug-only guard
//!   panics if that code re-enters the same list mid-scan. `erase` drops
//!   removed values after the guard is released, so `Drop` may re-enter.
//!
//! Hashing
//! - `WordHash` computes `7 + 31 * sum(chars)` in wrapping `u64`
//!   arithmetic; the bucket is that value modulo capacity, so it is
//!   always in range even after the accumulator wraps.
//!
//! Errors
//! - Peeking at or popping from an empty list yields `UnderflowError`.
//! - A missing word is not an error: `get` returns `None` and `lookup`
//!   returns the `NOT_FOUND` sentinel.

pub mod chained_list;
mod chained_list_proptest;
mod error;
pub mod hash_table;
mod reentrancy;

// Public surface
pub use chained_list::{ChainedList, NodeRef};
pub use error::UnderflowError;
pub use hash_table::{Entry, HashTable, KeyHasher, WordHash, NOT_FOUND};
