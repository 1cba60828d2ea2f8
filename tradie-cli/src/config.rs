//! Configuration module
//!
//! Session settings. Values come from command-line flags, which fall back
//! to `TRADIE_*` environment variables and then to the defaults here.

use std::fmt::Write;

use anyhow::bail;
use chrono::Utc;
use chrono::format::{Item, StrftimeItems};

pub const DEFAULT_DATE_FORMAT: &str = "%d %b %Y %H:%M";
pub const DEFAULT_PROMPT: &str = "tradie> ";

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Load the demo client list at start-up
    pub seed_demo_clients: bool,

    /// strftime pattern used for job and note timestamps
    pub date_format: String,

    /// Emit ANSI colours
    pub color: bool,

    /// Prompt shown before each command in interactive sessions
    pub prompt: String,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.date_format.trim().is_empty() {
            bail!("date_format cannot be empty");
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            bail!("date_format '{}' is not a valid strftime pattern", self.date_format);
        }

        // Some patterns parse but still fail when formatting
        let mut sample = String::new();
        if write!(sample, "{}", Utc::now().format(&self.date_format)).is_err() {
            bail!("date_format '{}' cannot format a timestamp", self.date_format);
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_demo_clients: true,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            color: true,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.seed_demo_clients);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.date_format = "   ".to_string();
        assert!(config.validate().is_err());

        config.date_format = "%Y-%m-%d %Q".to_string();
        assert!(config.validate().is_err());

        config.date_format = "%#z".to_string();
        assert!(config.validate().is_err());

        config.date_format = "%Y-%m-%d".to_string();
        assert!(config.validate().is_ok());
    }
}
