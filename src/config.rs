use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub simulate: SimulateConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for session state (logs live under it)
    pub state: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        let state = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cheerful")
            .to_string_lossy()
            .to_string();
        Self { state }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval for the main loop
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate() -> u64 {
    100
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}

/// Delays for the simulated asynchronous operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateConfig {
    /// Delay before a campaign info scan completes
    #[serde(default = "default_scan_ms")]
    pub scan_ms: u64,
    /// Delay before email generation completes
    #[serde(default = "default_generate_ms")]
    pub generate_ms: u64,
    /// Delay between file upload progress ticks
    #[serde(default = "default_upload_step_ms")]
    pub upload_step_ms: u64,
    /// Number of progress ticks per simulated upload
    #[serde(default = "default_upload_steps")]
    pub upload_steps: u8,
}

fn default_scan_ms() -> u64 {
    3000
}

fn default_generate_ms() -> u64 {
    3000
}

fn default_upload_step_ms() -> u64 {
    200
}

fn default_upload_steps() -> u8 {
    5
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            scan_ms: default_scan_ms(),
            generate_ms: default_generate_ms(),
            upload_step_ms: default_upload_step_ms(),
            upload_steps: default_upload_steps(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to log to file in TUI mode (false = stderr for debugging)
    #[serde(default = "default_log_to_file")]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_to_file() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: default_log_to_file(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Start with embedded defaults so cheerful works without config files
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        // User config in ~/.config/cheerful/ (optional global overrides)
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("cheerful").join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(config::File::from(user_config));
            }
        }

        // Explicit config file (CLI override)
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment variables with CHEERFUL_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix("CHEERFUL")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Get absolute path to state directory
    pub fn state_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.paths.state);
        if path.is_absolute() {
            path
        } else {
            std::env::current_dir().unwrap_or_default().join(path)
        }
    }

    /// Get absolute path to logs directory
    pub fn logs_path(&self) -> PathBuf {
        self.state_path().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.simulate.scan_ms, 3000);
        assert_eq!(config.simulate.generate_ms, 3000);
        assert_eq!(config.simulate.upload_steps, 5);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.to_file);
    }

    #[test]
    fn test_load_without_config_files() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.simulate.scan_ms, 3000);
    }

    #[test]
    fn test_explicit_config_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[simulate]\nscan_ms = 50\n").unwrap();

        let config = Config::load(path.to_str()).unwrap();
        assert_eq!(config.simulate.scan_ms, 50);
        // Untouched sections keep their defaults
        assert_eq!(config.simulate.generate_ms, 3000);
    }

    #[test]
    fn test_logs_path_under_state_dir() {
        let mut config = Config::default();
        config.paths.state = "/tmp/cheerful-test".to_string();
        assert_eq!(config.logs_path(), PathBuf::from("/tmp/cheerful-test/logs"));
    }
}
