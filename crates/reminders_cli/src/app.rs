//! Interactive menu loop over a reminder store.
//!
//! # Responsibility
//! - Prompt, validate and confirm answers, re-asking until they pass.
//! - Translate menu actions into `ReminderStore` calls and print results.
//!
//! # Invariants
//! - End of input ends the session the same way as choosing Exit.
//! - Only I/O failures escape `run`; invalid answers are re-prompted.
//! - Lines that are not valid UTF-8 are rejected and re-prompted.
//! - Modify touches the store only after every answer has been collected.

use crate::input::{
    parse_menu_choice, parse_yes_no, validate_reminder_number, validate_text, InputRejection,
};
use crate::render::{
    render_grouped, render_menu, render_numbered, render_search_results, MenuAction, MENU_ITEMS,
    MENU_TITLE,
};
use log::{debug, info, warn};
use reminders_core::ReminderStore;
use std::io::{self, BufRead, Write};

const MAIN_MENU_PROMPT: &str = "\nHit [Enter] key to see main menu: ";
const MENU_CHOICE_PROMPT: &str = "Choose a [Number] followed by [Enter]: ";
const TOGGLE_PROMPT: &str = "\nDo you wish to toggle the completed status? y/n: ";

const NO_REMINDERS: &str = "\n  ⚠️  You have no reminders";
const INVALID_MENU_ITEM: &str = "\n  🚨  Sorry, input is not a valid menu item.\n";
const INVALID_YES_NO: &str = "\n  🚨  Invalid input: Please enter either y/n.\n";
const RETRY: &str = "\n  🔄  Please try typing it again";
const ADDED: &str = "\n  🏁  Reminder Added";
const MODIFIED: &str = "\n  🏁  Reminder Modified";
const TOGGLED: &str = "\n  🏁  Reminder Completion Toggled";
const EXITED: &str = "\n  ❌  Exited application\n";

/// Why the menu loop stopped early.
enum Halt {
    EndOfInput,
    Io(io::Error),
}

impl From<io::Error> for Halt {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

type Step<T> = Result<T, Halt>;

/// Console session owning the store for its lifetime.
pub struct ReminderApp<R, W> {
    store: ReminderStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ReminderApp<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            store: ReminderStore::new(),
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &ReminderStore {
        &self.store
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Runs the menu loop until Exit is chosen or input ends.
    ///
    /// # Errors
    /// - Read or write failures on the underlying streams.
    pub fn run(&mut self) -> io::Result<()> {
        info!("event=session_start module=cli status=ok");
        match self.menu_loop() {
            Ok(()) => {}
            Err(Halt::EndOfInput) => debug!("event=session_eof module=cli status=ok"),
            Err(Halt::Io(err)) => return Err(err),
        }

        writeln!(self.output, "{EXITED}")?;
        self.output.flush()?;
        info!(
            "event=session_end module=cli status=ok reminders={}",
            self.store.size()
        );
        Ok(())
    }

    fn menu_loop(&mut self) -> Step<()> {
        loop {
            self.read_answer(MAIN_MENU_PROMPT)?;
            self.print(&render_menu(MENU_TITLE, &MENU_ITEMS))?;

            let action = self.menu_choice()?;
            debug!("event=menu_select module=cli status=ok action={action:?}");
            match action {
                MenuAction::ShowAll => self.show_reminders()?,
                MenuAction::Search => self.search_reminders()?,
                MenuAction::Add => self.add_reminder()?,
                MenuAction::Modify => self.modify_reminder()?,
                MenuAction::ToggleCompletion => self.toggle_completion()?,
                MenuAction::Exit => return Ok(()),
            }
        }
    }

    fn menu_choice(&mut self) -> Step<MenuAction> {
        loop {
            let answer = self.read_answer(MENU_CHOICE_PROMPT)?;
            if let Some(action) = parse_menu_choice(&answer, &MENU_ITEMS) {
                return Ok(action);
            }
            self.say(INVALID_MENU_ITEM)?;
        }
    }

    fn show_reminders(&mut self) -> Step<()> {
        if self.store.is_empty() {
            return self.say(NO_REMINDERS);
        }
        let text = render_grouped(&self.store.group_by_tag());
        self.print(&text)
    }

    fn search_reminders(&mut self) -> Step<()> {
        if self.store.is_empty() {
            return self.say(NO_REMINDERS);
        }
        let keyword = self.ask("search keyword", validate_text)?;
        let text = render_search_results(&self.store.search_detailed(&keyword));
        self.print(&text)
    }

    fn add_reminder(&mut self) -> Step<()> {
        let description = self.ask("reminder (description)", validate_text)?;
        let tag = self.ask("tag", validate_text)?;
        self.store.add_reminder(description, tag);
        self.say(ADDED)
    }

    fn modify_reminder(&mut self) -> Step<()> {
        if self.store.is_empty() {
            return self.say(NO_REMINDERS);
        }
        let listing = render_numbered(self.store.reminders());
        self.print(&listing)?;

        let index = self.ask("reminder number", validate_reminder_number)?;
        let description = self.ask("new description", validate_text)?;
        let toggle = self.confirm(TOGGLE_PROMPT)?;

        self.store.modify_reminder(index, description);
        if toggle {
            self.toggle_at(index)?;
        }
        self.say(MODIFIED)
    }

    fn toggle_completion(&mut self) -> Step<()> {
        if self.store.is_empty() {
            return self.say(NO_REMINDERS);
        }
        let listing = render_numbered(self.store.reminders());
        self.print(&listing)?;

        let index = self.ask("reminder number", validate_reminder_number)?;
        self.toggle_at(index)?;
        self.say(TOGGLED)
    }

    fn toggle_at(&mut self, index: usize) -> Step<()> {
        if let Err(err) = self.store.toggle_completion(index) {
            warn!("event=toggle_failed module=cli status=error index={index}");
            self.say(&format!("\n  🚨  {err}"))?;
        }
        Ok(())
    }

    /// Asks `question` until `validate` accepts and the user confirms.
    fn ask<T>(
        &mut self,
        question: &str,
        validate: impl Fn(&str, &ReminderStore) -> Result<T, InputRejection>,
    ) -> Step<T> {
        let prompt = format!("\nEnter a {question} here: ");
        loop {
            let answer = self.read_answer(&prompt)?;
            let value = match validate(&answer, &self.store) {
                Ok(value) => value,
                Err(rejection) => {
                    debug!("event=input_rejected module=cli status=retry reason={rejection:?}");
                    self.say(&format!("\n  🚨  {rejection}\n"))?;
                    continue;
                }
            };

            let confirmation = format!("You entered {question}: '{answer}', is it correct? y/n: ");
            if self.confirm(&confirmation)? {
                return Ok(value);
            }
            self.say(RETRY)?;
        }
    }

    fn confirm(&mut self, prompt: &str) -> Step<bool> {
        loop {
            let answer = self.read_answer(prompt)?;
            if let Some(decision) = parse_yes_no(&answer) {
                return Ok(decision);
            }
            self.say(INVALID_YES_NO)?;
        }
    }

    fn read_answer(&mut self, prompt: &str) -> Step<String> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Err(Halt::EndOfInput);
            }
            match String::from_utf8(buf) {
                Ok(line) => return Ok(line.trim_end_matches(['\r', '\n']).to_string()),
                Err(_) => {
                    debug!("event=input_rejected module=cli status=retry reason=NotUtf8");
                    self.say(&format!("\n  🚨  {}\n", InputRejection::NotUtf8))?;
                }
            }
        }
    }

    /// Writes `message` followed by a newline.
    fn say(&mut self, message: &str) -> Step<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn print(&mut self, text: &str) -> Step<()> {
        write!(self.output, "{text}")?;
        Ok(())
    }
}
