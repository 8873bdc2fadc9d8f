//! Ordered in-memory reminder store.
//!
//! # Responsibility
//! - Own every reminder of the session in insertion order.
//! - Expose index-based reads/mutations plus search and grouping queries.
//!
//! # Invariants
//! - Indexes are 0-based and valid iff `index < size()`.
//! - `modify_reminder` on an invalid index is a silent no-op.
//! - `get_reminder` and `toggle_completion` on an invalid index return
//!   `StoreError::NotFound` and never mutate.
//! - Log events carry indexes and counts only, never reminder text.

use crate::model::reminder::Reminder;
use crate::store::grouping::{group_reminders_by_tag, TagGroup};
use crate::store::search::{search_reminders, SearchOutcome};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for index-based store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Requested index is outside `[0, len)`.
    NotFound { index: usize, len: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { index, len } => {
                write!(f, "reminder not found: index {index} (store holds {len})")
            }
        }
    }
}

impl Error for StoreError {}

/// Session-scoped collection of reminders.
#[derive(Debug, Default)]
pub struct ReminderStore {
    reminders: Vec<Reminder>,
}

impl ReminderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Live read view of all reminders in insertion order.
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Appends a new incomplete reminder.
    pub fn add_reminder(&mut self, description: impl Into<String>, tag: impl Into<String>) {
        self.reminders.push(Reminder::new(description, tag));
        debug!(
            "event=reminder_add module=store status=ok index={} size={}",
            self.reminders.len() - 1,
            self.reminders.len()
        );
    }

    /// Returns the number of reminders added so far.
    pub fn size(&self) -> usize {
        self.reminders.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    /// Returns true iff `index` addresses an existing reminder.
    ///
    /// Always false for an empty store.
    pub fn is_index_valid(&self, index: usize) -> bool {
        index < self.reminders.len()
    }

    /// Returns the reminder at `index`.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when `index` is out of bounds.
    pub fn get_reminder(&self, index: usize) -> StoreResult<&Reminder> {
        self.reminders.get(index).ok_or(StoreError::NotFound {
            index,
            len: self.reminders.len(),
        })
    }

    /// Replaces the description at `index`, leaving tag and completion intact.
    ///
    /// Silently ignores the call when `index` is not valid.
    pub fn modify_reminder(&mut self, index: usize, description: impl Into<String>) {
        match self.reminders.get_mut(index) {
            Some(reminder) => {
                reminder.set_description(description);
                debug!("event=reminder_modify module=store status=ok index={index}");
            }
            None => {
                debug!(
                    "event=reminder_modify module=store status=ignored index={} size={}",
                    index,
                    self.reminders.len()
                );
            }
        }
    }

    /// Flips the completion flag of the reminder at `index`.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when `index` is out of bounds; nothing changes.
    pub fn toggle_completion(&mut self, index: usize) -> StoreResult<()> {
        let len = self.reminders.len();
        let Some(reminder) = self.reminders.get_mut(index) else {
            warn!("event=reminder_toggle module=store status=error index={index} size={len}");
            return Err(StoreError::NotFound { index, len });
        };

        reminder.toggle_completion();
        debug!(
            "event=reminder_toggle module=store status=ok index={} completed={}",
            index,
            reminder.is_completed()
        );
        Ok(())
    }

    /// Returns exact tag matches, or description substring matches when no
    /// tag matches exist.
    pub fn search(&self, keyword: &str) -> Vec<&Reminder> {
        self.search_detailed(keyword).reminders
    }

    /// Same lookup as `search`, also reporting which phase matched.
    pub fn search_detailed(&self, keyword: &str) -> SearchOutcome<'_> {
        let outcome = search_reminders(&self.reminders, keyword);
        debug!(
            "event=reminder_search module=store status=ok phase={:?} hits={}",
            outcome.phase,
            outcome.reminders.len()
        );
        outcome
    }

    /// Partitions reminders by exact tag in first-seen order.
    pub fn group_by_tag(&self) -> Vec<TagGroup<'_>> {
        group_reminders_by_tag(&self.reminders)
    }
}

#[cfg(test)]
mod tests {
    use super::{ReminderStore, StoreError};

    #[test]
    fn not_found_message_names_index_and_size() {
        let err = StoreError::NotFound { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "reminder not found: index 4 (store holds 2)"
        );
    }

    #[test]
    fn len_and_size_agree() {
        let mut store = ReminderStore::new();
        assert!(store.is_empty());
        store.add_reminder("a", "t");
        assert_eq!(store.len(), store.size());
        assert!(!store.is_empty());
    }
}
