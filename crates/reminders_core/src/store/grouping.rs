//! Tag grouping projection.
//!
//! # Invariants
//! - Groups appear in the order their tag is first seen scanning front-to-back.
//! - Reminders inside a group keep store order.
//! - Tag keys are compared exactly; `Work` and `work` are distinct groups.

use crate::model::reminder::Reminder;

/// Reminders sharing one exact tag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagGroup<'a> {
    pub tag: &'a str,
    pub reminders: Vec<&'a Reminder>,
}

/// Partitions `reminders` by tag in first-seen order.
pub fn group_reminders_by_tag(reminders: &[Reminder]) -> Vec<TagGroup<'_>> {
    let mut groups: Vec<TagGroup<'_>> = Vec::new();

    for reminder in reminders {
        match groups.iter_mut().find(|group| group.tag == reminder.tag()) {
            Some(group) => group.reminders.push(reminder),
            None => groups.push(TagGroup {
                tag: reminder.tag(),
                reminders: vec![reminder],
            }),
        }
    }

    groups
}
