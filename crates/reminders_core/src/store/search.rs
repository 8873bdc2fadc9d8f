//! Two-phase keyword lookup over reminders.
//!
//! # Responsibility
//! - Match reminders by exact tag first, then by description substring.
//! - Report which phase produced the hits.
//!
//! # Invariants
//! - Matching is case-sensitive in both phases.
//! - The description phase runs only when the tag phase found nothing.
//! - Hits keep store order.

use crate::model::reminder::Reminder;

/// Lookup phase that produced a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// At least one reminder carries a tag equal to the keyword.
    Tag,
    /// No tag matched; hits contain the keyword in their description.
    Description,
}

/// Search hits together with the phase that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<'a> {
    pub phase: SearchPhase,
    pub reminders: Vec<&'a Reminder>,
}

impl SearchOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }
}

/// Runs the tag phase and falls back to the description phase on no hits.
///
/// An empty outcome always reports `SearchPhase::Description`, since the
/// fallback was attempted.
pub fn search_reminders<'a>(reminders: &'a [Reminder], keyword: &str) -> SearchOutcome<'a> {
    let by_tag = match_tags(reminders, keyword);
    if !by_tag.is_empty() {
        return SearchOutcome {
            phase: SearchPhase::Tag,
            reminders: by_tag,
        };
    }

    SearchOutcome {
        phase: SearchPhase::Description,
        reminders: match_descriptions(reminders, keyword),
    }
}

fn match_tags<'a>(reminders: &'a [Reminder], keyword: &str) -> Vec<&'a Reminder> {
    reminders
        .iter()
        .filter(|reminder| reminder.tag() == keyword)
        .collect()
}

fn match_descriptions<'a>(reminders: &'a [Reminder], keyword: &str) -> Vec<&'a Reminder> {
    reminders
        .iter()
        .filter(|reminder| reminder.description().contains(keyword))
        .collect()
}
