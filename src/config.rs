//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::indicators::{Indicator, IndicatorKey};
use crate::view::{AppState, ThemeState, Watchlist};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Data provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Simulated latency of every fetch
    #[serde(default = "default_delay")]
    pub delay_ms: u64,

    /// Fail fetches slower than this; unbounded when absent
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// Indicators whose fetches fail with a network error
    #[serde(default)]
    pub fail: Vec<IndicatorKey>,
}

fn default_delay() -> u64 {
    300
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay(),
            timeout_ms: None,
            fail: Vec::new(),
        }
    }
}

/// Initial UI state
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default = "default_watchlist")]
    pub watchlist: Vec<IndicatorKey>,
}

fn default_watchlist() -> Vec<IndicatorKey> {
    vec![IndicatorKey::Cpi, IndicatorKey::Unemployment]
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            watchlist: default_watchlist(),
        }
    }
}

impl DashboardConfig {
    pub fn initial_state(&self) -> AppState {
        AppState::new(
            Indicator::defaults(),
            ThemeState::new(self.dark_mode),
            Watchlist::new(self.watchlist.iter().copied()),
        )
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("econdash").join("config.toml")),
            Some(PathBuf::from("/etc/econdash/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from `lookup`; unparseable values are logged and skipped
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Provider overrides
        if let Some(ms) = parse_var("ECONDASH_DELAY_MS", &lookup, |v| v.parse().ok()) {
            self.provider.delay_ms = ms;
        }
        if let Some(ms) = parse_var("ECONDASH_TIMEOUT_MS", &lookup, |v| v.parse().ok()) {
            self.provider.timeout_ms = Some(ms);
        }

        // Dashboard overrides
        if let Some(dark) = parse_var("ECONDASH_DARK_MODE", &lookup, parse_bool) {
            self.dashboard.dark_mode = dark;
        }

        // Logging overrides
        if let Some(level) = lookup("ECONDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ECONDASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn parse_var<T>(
    name: &str,
    lookup: impl Fn(&str) -> Option<String>,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = lookup(name)?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        tracing::warn!(
            variable = name,
            value = %raw,
            "Ignoring unparseable environment override"
        );
    }
    parsed
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# EconDashboard Configuration
#
# Environment variables override these settings:
# - ECONDASH_DELAY_MS
# - ECONDASH_TIMEOUT_MS
# - ECONDASH_DARK_MODE
# - ECONDASH_LOG_LEVEL
# - ECONDASH_LOG_FORMAT

[provider]
# Simulated latency of each indicator fetch (ms)
delay_ms = 300

# Fail fetches that take longer than this (ms)
# timeout_ms = 2000

# Indicators whose fetches should fail (cpi, unemployment, fedRate, gdp)
fail = []

[dashboard]
# Start in dark mode
dark_mode = false

# Indicators starred on startup
watchlist = ["cpi", "unemployment"]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.provider.delay_ms, 300);
        assert_eq!(config.provider.timeout_ms, None);
        assert!(!config.dashboard.dark_mode);
        assert_eq!(
            config.dashboard.watchlist,
            vec![IndicatorKey::Cpi, IndicatorKey::Unemployment]
        );
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.provider.delay_ms, 300);
        assert!(config.provider.fail.is_empty());
        assert_eq!(config.dashboard.watchlist.len(), 2);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[provider]
delay_ms = 0
timeout_ms = 500
fail = ["fedRate"]

[dashboard]
dark_mode = true
watchlist = ["gdp"]
"#
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.provider.delay_ms, 0);
        assert_eq!(config.provider.timeout_ms, Some(500));
        assert_eq!(config.provider.fail, vec![IndicatorKey::FedRate]);

        let state = config.dashboard.initial_state();
        assert!(state.theme().is_dark());
        assert!(state.is_watched(IndicatorKey::Gdp));
        assert!(!state.is_watched(IndicatorKey::Cpi));
    }

    #[test]
    fn test_load_rejects_unknown_indicator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[dashboard]\nwatchlist = [\"ppi\"]\n").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: std::collections::HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_env_overrides_apply() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[
            ("ECONDASH_DELAY_MS", "25"),
            ("ECONDASH_TIMEOUT_MS", " 800 "),
            ("ECONDASH_DARK_MODE", "true"),
            ("ECONDASH_LOG_LEVEL", "debug"),
            ("ECONDASH_LOG_FORMAT", "json"),
        ]));

        assert_eq!(config.provider.delay_ms, 25);
        assert_eq!(config.provider.timeout_ms, Some(800));
        assert!(config.dashboard.dark_mode);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_dark_mode_accepts_numeric_and_words() {
        let cases = [
            ("1", true),
            ("yes", true),
            ("ON", true),
            ("0", false),
            ("no", false),
        ];

        for (raw, expected) in cases {
            let mut config = Config::default();
            config.dashboard.dark_mode = !expected;
            config.apply_overrides(vars(&[("ECONDASH_DARK_MODE", raw)]));
            assert_eq!(
                config.dashboard.dark_mode, expected,
                "ECONDASH_DARK_MODE={}",
                raw
            );
        }
    }

    #[test]
    fn test_bad_env_values_keep_defaults() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[
            ("ECONDASH_DELAY_MS", "abc"),
            ("ECONDASH_TIMEOUT_MS", "-5"),
            ("ECONDASH_DARK_MODE", "maybe"),
        ]));

        assert_eq!(config.provider.delay_ms, 300);
        assert_eq!(config.provider.timeout_ms, None);
        assert!(!config.dashboard.dark_mode);
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        std::env::set_var("ECONDASH_DARK_MODE", "1");
        let config = Config::from_env();
        std::env::remove_var("ECONDASH_DARK_MODE");

        assert!(config.dashboard.dark_mode);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/econdash.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
