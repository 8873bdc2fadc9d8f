//! Core domain logic for the reminders manager.
//! This crate is the single source of truth for reminder invariants.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::reminder::Reminder;
pub use store::grouping::TagGroup;
pub use store::reminder_store::{ReminderStore, StoreError, StoreResult};
pub use store::search::{SearchOutcome, SearchPhase};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
