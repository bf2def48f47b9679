//! Configuration management for pipewright
//!
//! Loads settings from environment variables with sensible defaults. The
//! core pipeline needs no configuration at all; these settings shape the
//! surrounding CLI behavior (logging, output location, color).
//!
//! # Environment Variables
//!
//! - `PIPEWRIGHT_LOG_LEVEL`: Logging level - default: "info"
//! - `PIPEWRIGHT_LOG_JSON`: JSON log output (true|false) - default: "false"
//! - `PIPEWRIGHT_OUTPUT_DIR`: Default output directory - default: "./pipeline-config"
//! - `PIPEWRIGHT_NO_COLOR`: Disable colored output (true|false) - default: "false"
//!
//! `NO_COLOR` (the cross-tool convention) is honored as well.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_OUTPUT_DIR: &str = "./pipeline-config";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Valid options: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Output directory cannot be empty")]
    EmptyOutputDir,
}

/// CLI-facing configuration, loaded from the environment with defaults.
#[derive(Debug, Clone)]
pub struct PipewrightConfig {
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit logs as JSON instead of pretty console output
    pub log_json: bool,

    /// Directory generated files are written to when none is given
    pub output_dir: PathBuf,

    /// Disable ANSI colors in human output
    pub no_color: bool,
}

impl Default for PipewrightConfig {
    fn default() -> Self {
        let log_level = env::var("PIPEWRIGHT_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env::var("PIPEWRIGHT_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let output_dir = env::var("PIPEWRIGHT_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let no_color = env::var("NO_COLOR").is_ok()
            || env::var("PIPEWRIGHT_NO_COLOR")
                .ok()
                .and_then(|v| v.parse::<bool>().ok())
                .unwrap_or(false);

        Self {
            log_level,
            log_json,
            output_dir,
            no_color,
        }
    }
}

impl PipewrightConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(ConfigError::InvalidLogLevel(other.to_string())),
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputDir);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to temporarily set environment variables for testing
    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_configuration() {
        let _guards = vec![
            EnvGuard::set("PIPEWRIGHT_LOG_LEVEL", DEFAULT_LOG_LEVEL),
            EnvGuard::set("PIPEWRIGHT_LOG_JSON", "false"),
            EnvGuard::set("PIPEWRIGHT_OUTPUT_DIR", DEFAULT_OUTPUT_DIR),
        ];

        let config = PipewrightConfig::default();
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(!config.log_json);
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let _guards = vec![
            EnvGuard::set("PIPEWRIGHT_LOG_LEVEL", "DEBUG"),
            EnvGuard::set("PIPEWRIGHT_LOG_JSON", "true"),
            EnvGuard::set("PIPEWRIGHT_OUTPUT_DIR", "/tmp/generated"),
        ];

        let config = PipewrightConfig::default();
        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/generated"));
    }

    #[test]
    fn test_validation_rejects_bad_log_level() {
        let config = PipewrightConfig {
            log_level: "loud".to_string(),
            log_json: false,
            output_dir: PathBuf::from("./pipeline-config"),
            no_color: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_defaults() {
        let config = PipewrightConfig {
            log_level: "info".to_string(),
            log_json: false,
            output_dir: PathBuf::from("./pipeline-config"),
            no_color: false,
        };
        assert!(config.validate().is_ok());
    }
}
