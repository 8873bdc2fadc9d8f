//! Console rendering for menu and reminder views.
//!
//! Every function here is pure: it takes data and returns the text to print.

use reminders_core::{Reminder, SearchOutcome, SearchPhase, TagGroup};
use std::fmt::Write as _;

pub const MENU_TITLE: &str = "Reminders Menu";

/// What a menu entry does when chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ShowAll,
    Search,
    Add,
    Modify,
    ToggleCompletion,
    Exit,
}

/// One row of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    /// Single wide glyph drawn in its own column after the label.
    pub marker: &'static str,
    pub action: MenuAction,
}

pub const MENU_ITEMS: [MenuItem; 6] = [
    MenuItem {
        key: "1",
        label: "Show all reminders",
        marker: "👀",
        action: MenuAction::ShowAll,
    },
    MenuItem {
        key: "2",
        label: "Search reminders",
        marker: "🔎",
        action: MenuAction::Search,
    },
    MenuItem {
        key: "3",
        label: "Add reminder",
        marker: "➕",
        action: MenuAction::Add,
    },
    MenuItem {
        key: "4",
        label: "Modify reminders",
        marker: "📝",
        action: MenuAction::Modify,
    },
    MenuItem {
        key: "5",
        label: "Toggle completion",
        marker: "✅",
        action: MenuAction::ToggleCompletion,
    },
    MenuItem {
        key: "6",
        label: "Exit",
        marker: "👋",
        action: MenuAction::Exit,
    },
];

/// Terminal columns taken by a menu marker glyph.
const MARKER_COLUMNS: usize = 2;

/// Renders a framed two-column table with a centered title row.
///
/// Widths are counted in terminal columns; markers are one `char` that
/// occupies `MARKER_COLUMNS`.
pub fn render_menu(title: &str, items: &[MenuItem]) -> String {
    let key_width = items
        .iter()
        .map(|item| item.key.chars().count())
        .max()
        .unwrap_or(0);
    let mut label_width = items
        .iter()
        .map(|item| item.label.chars().count())
        .max()
        .unwrap_or(0);

    // Row interior is `␠key␠│␠label␠marker␠`; widen the label column for long titles.
    let fixed_width = key_width + MARKER_COLUMNS + 6;
    let title_width = title.chars().count() + 2;
    if label_width + fixed_width < title_width {
        label_width = title_width - fixed_width;
    }
    let inner_width = label_width + fixed_width;
    let label_cell = label_width + MARKER_COLUMNS + 3;

    let mut out = String::new();
    let _ = writeln!(out, "╔{}╗", "═".repeat(inner_width));
    let _ = writeln!(out, "║{title:^inner_width$}║");
    let _ = writeln!(
        out,
        "╟{}┬{}╢",
        "─".repeat(key_width + 2),
        "─".repeat(label_cell)
    );
    for item in items {
        let _ = writeln!(
            out,
            "║ {:<key_width$} │ {:<label_width$} {} ║",
            item.key, item.label, item.marker
        );
    }
    let _ = writeln!(
        out,
        "╚{}╧{}╝",
        "═".repeat(key_width + 2),
        "═".repeat(label_cell)
    );
    out
}

/// One reminder line marked complete (🟢) or pending (⭕️).
pub fn render_description(reminder: &Reminder) -> String {
    let marker = if reminder.is_completed() {
        "🟢"
    } else {
        "⭕️"
    };
    format!("  {marker} {}", reminder.description())
}

/// Grouped listing with each tag uppercased as a header.
pub fn render_grouped(groups: &[TagGroup<'_>]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "\n🏷️  {}\n", group.tag.to_uppercase());
        for reminder in &group.reminders {
            let _ = writeln!(out, "{}", render_description(reminder));
        }
    }
    out
}

/// Numbered listing used before choosing a reminder; numbers start at 1.
pub fn render_numbered(reminders: &[Reminder]) -> String {
    let mut out = String::from("\n");
    for (index, reminder) in reminders.iter().enumerate() {
        let _ = writeln!(out, " [{}] {}", index + 1, reminder.description());
    }
    out
}

pub fn render_search_results(outcome: &SearchOutcome<'_>) -> String {
    if outcome.is_empty() {
        return "No results found for search.\n".to_string();
    }

    let heading = match outcome.phase {
        SearchPhase::Tag => "Matched by tag",
        SearchPhase::Description => "Matched in description",
    };
    let mut out = format!("\n  🔎  {heading}\n");
    for reminder in &outcome.reminders {
        let _ = writeln!(out, "{}", render_description(reminder));
    }
    out
}
