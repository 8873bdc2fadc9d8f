//! Answer validation for interactive prompts.
//!
//! # Invariants
//! - Reminder numbers are 1-based on screen and converted to 0-based here.
//! - Validation never mutates the store.

use crate::render::{MenuAction, MenuItem};
use once_cell::sync::Lazy;
use regex::Regex;
use reminders_core::ReminderStore;
use std::fmt::{Display, Formatter};

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid digits regex"));
static YES_NO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[YNyn]$").expect("valid y/n regex"));

/// Reason an answer was refused; the prompt is repeated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRejection {
    Blank,
    NotUtf8,
    NotANumber,
    OutOfRange,
}

impl Display for InputRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "Input cannot be blank: Please try again."),
            Self::NotUtf8 => write!(f, "Input must be readable text: Please try again."),
            Self::NotANumber => write!(
                f,
                "Input must be positive number from the list of reminders: Please try again."
            ),
            Self::OutOfRange => write!(
                f,
                "Input must be number from the list of reminders: Please try again."
            ),
        }
    }
}

/// Accepts any non-blank free text as-is.
pub fn validate_text(input: &str, _store: &ReminderStore) -> Result<String, InputRejection> {
    if input.trim().is_empty() {
        return Err(InputRejection::Blank);
    }
    Ok(input.to_string())
}

/// Accepts a 1-based reminder number and returns the 0-based store index.
pub fn validate_reminder_number(
    input: &str,
    store: &ReminderStore,
) -> Result<usize, InputRejection> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputRejection::Blank);
    }
    if !DIGITS_RE.is_match(trimmed) {
        return Err(InputRejection::NotANumber);
    }

    // Digits that overflow usize cannot name a stored reminder either.
    let number: usize = trimmed.parse().map_err(|_| InputRejection::OutOfRange)?;
    number
        .checked_sub(1)
        .filter(|index| store.is_index_valid(*index))
        .ok_or(InputRejection::OutOfRange)
}

/// Maps a menu key to its action; `None` for anything not on the menu.
pub fn parse_menu_choice(input: &str, items: &[MenuItem]) -> Option<MenuAction> {
    let trimmed = input.trim();
    items
        .iter()
        .find(|item| item.key == trimmed)
        .map(|item| item.action)
}

/// Parses a single `y`/`n` letter in either case.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    let trimmed = input.trim();
    if !YES_NO_RE.is_match(trimmed) {
        return None;
    }
    Some(trimmed.eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::{
        parse_menu_choice, parse_yes_no, validate_reminder_number, validate_text, InputRejection,
    };
    use crate::render::{MenuAction, MENU_ITEMS};
    use reminders_core::ReminderStore;

    fn store_with(count: usize) -> ReminderStore {
        let mut store = ReminderStore::new();
        for n in 0..count {
            store.add_reminder(format!("task {n}"), "tag");
        }
        store
    }

    #[test]
    fn text_rejects_blank_and_keeps_inner_spacing() {
        let store = store_with(0);
        assert_eq!(validate_text("", &store), Err(InputRejection::Blank));
        assert_eq!(validate_text("   ", &store), Err(InputRejection::Blank));
        assert_eq!(
            validate_text("  walk  dog", &store).as_deref(),
            Ok("  walk  dog")
        );
    }

    #[test]
    fn reminder_number_converts_to_zero_based_index() {
        let store = store_with(3);
        assert_eq!(validate_reminder_number("1", &store), Ok(0));
        assert_eq!(validate_reminder_number(" 3 ", &store), Ok(2));
    }

    #[test]
    fn reminder_number_rejects_non_digits() {
        let store = store_with(3);
        assert_eq!(
            validate_reminder_number("-1", &store),
            Err(InputRejection::NotANumber)
        );
        assert_eq!(
            validate_reminder_number("two", &store),
            Err(InputRejection::NotANumber)
        );
        assert_eq!(
            validate_reminder_number("1.5", &store),
            Err(InputRejection::NotANumber)
        );
    }

    #[test]
    fn reminder_number_rejects_zero_overflow_and_past_end() {
        let store = store_with(2);
        assert_eq!(
            validate_reminder_number("0", &store),
            Err(InputRejection::OutOfRange)
        );
        assert_eq!(
            validate_reminder_number("3", &store),
            Err(InputRejection::OutOfRange)
        );
        assert_eq!(
            validate_reminder_number("99999999999999999999999999", &store),
            Err(InputRejection::OutOfRange)
        );
    }

    #[test]
    fn menu_choice_accepts_only_listed_keys() {
        assert_eq!(
            parse_menu_choice("1", &MENU_ITEMS),
            Some(MenuAction::ShowAll)
        );
        assert_eq!(parse_menu_choice(" 6 ", &MENU_ITEMS), Some(MenuAction::Exit));
        assert_eq!(parse_menu_choice("7", &MENU_ITEMS), None);
        assert_eq!(parse_menu_choice("", &MENU_ITEMS), None);
    }

    #[test]
    fn yes_no_is_single_letter_case_insensitive() {
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no("yes"), None);
        assert_eq!(parse_yes_no(""), None);
    }
}
