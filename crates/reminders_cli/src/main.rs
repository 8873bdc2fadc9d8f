//! Console entry point for the reminders manager.
//!
//! # Responsibility
//! - Compose config, logging and the interactive app over stdin/stdout.
//! - Keep logging failures non-fatal; the session still runs without logs.

mod app;
mod config;
mod input;
mod render;

use app::ReminderApp;
use config::CliConfig;
use log::error;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::from_env();
    let log_dir = config.log_dir.to_string_lossy();
    if let Err(err) = reminders_core::init_logging(&config.log_level, &log_dir) {
        eprintln!("reminders: logging disabled: {err}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = ReminderApp::new(stdin.lock(), stdout.lock());
    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=session_failed module=cli status=error kind={:?}", err.kind());
            eprintln!("reminders: {err}");
            ExitCode::FAILURE
        }
    }
}
