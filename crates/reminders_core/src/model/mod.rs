//! Reminder domain model.
//!
//! # Responsibility
//! - Define the record owned by `ReminderStore`.
//!
//! # Invariants
//! - Completion state changes only through `Reminder::toggle_completion`.

pub mod reminder;
