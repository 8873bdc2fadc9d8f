//! In-memory reminder storage and queries.
//!
//! # Responsibility
//! - Own the ordered sequence of reminders for one session.
//! - Provide index-guarded mutation, two-phase search and tag grouping.
//!
//! # Invariants
//! - Insertion order is the only ordering; entries are never removed.
//! - Store operations never perform console I/O or formatting.

pub mod grouping;
pub mod reminder_store;
pub mod search;
