//! Process configuration read from environment variables.
//!
//! - `REMINDERS_LOG_LEVEL`: `trace|debug|info|warn|error`, defaults by build mode.
//! - `REMINDERS_LOG_DIR`: absolute directory for rolling logs, defaults under
//!   the system temp dir.

use reminders_core::default_log_level;
use std::path::PathBuf;

pub const LOG_LEVEL_ENV: &str = "REMINDERS_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "REMINDERS_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds config from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            log_level: non_blank(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: non_blank(LOG_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(default_log_dir),
        }
    }
}

fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("reminders").join("logs")
}

#[cfg(test)]
mod tests {
    use super::{CliConfig, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use reminders_core::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn defaults_apply_when_unset() {
        let config = CliConfig::from_lookup(|_| None);
        assert_eq!(config.log_level, default_log_level());
        assert!(config.log_dir.ends_with("reminders/logs"));
        assert!(config.log_dir.is_absolute());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let vars = HashMap::from([
            (LOG_LEVEL_ENV, "warn".to_string()),
            (LOG_DIR_ENV, "/var/tmp/reminders".to_string()),
        ]);
        let config = CliConfig::from_lookup(|key| vars.get(key).cloned());
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, PathBuf::from("/var/tmp/reminders"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = CliConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config.log_level, default_log_level());
    }
}
