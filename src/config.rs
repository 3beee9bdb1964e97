//! Shell configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the session
//! starts. A `.env` file in the working directory is honoured (loaded by
//! `main.rs` via `dotenvy`).
//!
//! ## Variables
//!
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `UNDO_LIMIT` - Commands kept for undo (default: 100, range 1..=10000)
//! - `SEED_SAMPLE_DATA` - Start with the sample persons (default: `true`)
//! - `PROMPT` - Shell prompt text (default: `tutor`)

use anyhow::Result;
use std::env;

pub const MAX_UNDO_LIMIT: usize = 10_000;

/// Session configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of executed commands kept for undo.
    pub undo_limit: usize,
    /// When true, a new session starts from the sample address book instead
    /// of an empty one.
    pub seed_sample_data: bool,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            undo_limit: 100,
            seed_sample_data: true,
            prompt: "tutor".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numbers fall back to their defaults; range checks happen in
    /// [`Config::validate`].
    ///
    /// # Errors
    ///
    /// Currently infallible; kept fallible to match [`load_from_env`].
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let undo_limit = env::var("UNDO_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.undo_limit);

        let seed_sample_data = env::var("SEED_SAMPLE_DATA")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.seed_sample_data);

        let prompt = env::var("PROMPT").unwrap_or(defaults.prompt);

        Ok(Self {
            log_level,
            log_format,
            undo_limit,
            seed_sample_data,
            prompt,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `undo_limit` is outside `1..=10000`
    /// - `prompt` is blank
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.undo_limit == 0 || self.undo_limit > MAX_UNDO_LIMIT {
            anyhow::bail!(
                "UNDO_LIMIT must be between 1 and {}, got {}",
                MAX_UNDO_LIMIT,
                self.undo_limit
            );
        }

        if self.prompt.trim().is_empty() {
            anyhow::bail!("PROMPT must not be empty");
        }

        Ok(())
    }

    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Undo limit: {}", self.undo_limit);
        tracing::info!(
            "  Sample data: {}",
            if self.seed_sample_data { "enabled" } else { "disabled" }
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = ["RUST_LOG", "LOG_FORMAT", "UNDO_LIMIT", "SEED_SAMPLE_DATA", "PROMPT"];

    fn clear_env() {
        // SAFETY: callers are #[serial], so no concurrent access
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
        assert!(config.is_json_logging());

        config.undo_limit = 0;
        assert!(config.validate().is_err());

        config.undo_limit = MAX_UNDO_LIMIT + 1;
        assert!(config.validate().is_err());

        config.undo_limit = MAX_UNDO_LIMIT;
        assert!(config.validate().is_ok());

        config.prompt = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_reads_environment() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LOG_FORMAT", "json");
            env::set_var("UNDO_LIMIT", "5");
            env::set_var("SEED_SAMPLE_DATA", "0");
            env::set_var("PROMPT", "match");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.log_format, "json");
        assert_eq!(config.undo_limit, 5);
        assert!(!config.seed_sample_data);
        assert_eq!(config.prompt, "match");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_seed_flag_accepts_one() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("SEED_SAMPLE_DATA", "1");
        }

        assert!(Config::from_env().unwrap().seed_sample_data);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_rejects_out_of_range_limit() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("UNDO_LIMIT", "20000");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
