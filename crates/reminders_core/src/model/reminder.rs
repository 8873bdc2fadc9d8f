//! Reminder record.
//!
//! # Responsibility
//! - Hold one task description, its category tag and completion flag.
//!
//! # Invariants
//! - `is_completed` starts as `false`.
//! - There is no direct completion setter; only toggling flips the flag.
//! - Tags keep their exact casing. Uppercasing is a display concern.

/// Single task record with description, tag and completion flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    description: String,
    tag: String,
    is_completed: bool,
}

impl Reminder {
    /// Creates an incomplete reminder.
    ///
    /// No validation is performed; empty strings are representable and
    /// rejecting them is left to input collaborators.
    pub fn new(description: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            tag: tag.into(),
            is_completed: false,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    /// Returns whether this reminder has been marked complete.
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Flips completion state `true <-> false`.
    pub fn toggle_completion(&mut self) {
        self.is_completed = !self.is_completed;
    }
}
