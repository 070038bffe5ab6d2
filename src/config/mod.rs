//! Configuration management module
//!
//! Handles loading, validation, and management of application configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Environment variable controlling display scaling
pub const SCALING_ENV: &str = "BAZAAR_SCALING";

/// Accepted range for the display scaling factor
pub const SCALING_RANGE: (f64, f64) = (0.5, 3.0);

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Logging level
    pub log_level: String,

    /// File-based logging configuration
    pub log: LogConfig,

    /// Market-data provider configuration
    pub provider: ProviderConfig,

    /// Refresh scheduling
    pub refresh: RefreshConfig,

    /// Ranking and universe limits
    pub market: MarketConfig,

    /// UI-specific configuration
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Chart API base URL
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Seconds between automatic refreshes
    pub interval_secs: u64,

    /// Pause between section updates inside one refresh
    pub section_pacing_ms: u64,

    /// Delay before the first refresh once the UI is up
    pub initial_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Entries per gainers/losers list
    pub gainers_limit: usize,

    /// Maximum symbols ranked per universe
    pub max_universe_symbols: usize,

    /// Universe selected at startup (NIFTY50, SENSEX, ...)
    pub default_universe: String,

    /// Period selected at startup (1D, 1Week, ...)
    pub default_period: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable colors in TUI
    pub enable_colors: bool,

    /// Display scaling factor for bars and padding
    pub scaling: f64,

    /// Redraw cadence in milliseconds when nothing changed
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Absolute or relative path to the rolling log file
    pub file_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log: LogConfig::default(),
            provider: ProviderConfig::default(),
            refresh: RefreshConfig::default(),
            market: MarketConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            timeout_seconds: 10,
            user_agent: concat!("Mozilla/5.0 (compatible; bazaar/", env!("CARGO_PKG_VERSION"), ")")
                .to_string(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: 60,
            section_pacing_ms: 100,
            initial_delay_ms: 100,
        }
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            gainers_limit: 10,
            max_universe_symbols: 30,
            default_universe: "NIFTY50".to_string(),
            default_period: "1D".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_colors: true,
            scaling: 1.0,
            tick_rate_ms: 250,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file_path: "logs/bazaar.log".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment variable overrides
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        // Apply environment variable overrides
        config.apply_env_overrides();

        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(&mut self) {
        // BAZAAR_SCALING - display scaling factor
        if let Ok(scaling) = env::var(SCALING_ENV) {
            if let Ok(value) = scaling.trim().parse::<f64>() {
                self.ui.scaling = value;
            }
        }
        self.ui.scaling = clamp_scaling(self.ui.scaling);

        // BAZAAR_LOG_LEVEL - logging level
        if let Ok(log_level) = env::var("BAZAAR_LOG_LEVEL") {
            self.log_level = log_level;
        }

        // BAZAAR_LOG_FILE_PATH - logging destination file
        if let Ok(file_path) = env::var("BAZAAR_LOG_FILE_PATH") {
            if !file_path.trim().is_empty() {
                self.log.file_path = file_path;
            }
        }

        // BAZAAR_PROVIDER_BASE_URL - chart API base URL
        if let Ok(base_url) = env::var("BAZAAR_PROVIDER_BASE_URL") {
            self.provider.base_url = base_url;
        }

        // BAZAAR_PROVIDER_TIMEOUT_SECONDS - request timeout
        if let Ok(timeout) = env::var("BAZAAR_PROVIDER_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse::<u64>() {
                self.provider.timeout_seconds = value;
            }
        }

        // BAZAAR_REFRESH_INTERVAL_SECS - auto-refresh period
        if let Ok(interval) = env::var("BAZAAR_REFRESH_INTERVAL_SECS") {
            if let Ok(value) = interval.parse::<u64>() {
                self.refresh.interval_secs = value;
            }
        }

        // BAZAAR_UI_ENABLE_COLORS - enable colors
        if let Ok(enable_colors) = env::var("BAZAAR_UI_ENABLE_COLORS") {
            self.ui.enable_colors = enable_colors.parse().unwrap_or(self.ui.enable_colors);
        }
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Load configuration with fallback to default
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let (config, error) = Self::load_checked(path);
        if let Some(err) = error {
            tracing::warn!("Failed to load config: {:#}, using defaults", err);
        }
        config
    }

    /// Load configuration, falling back to defaults.
    ///
    /// The error is returned only when the file exists but cannot be used, so
    /// callers can report it once logging is set up.
    pub fn load_checked<P: AsRef<Path>>(path: P) -> (Self, Option<anyhow::Error>) {
        match Self::load_from_file(&path) {
            Ok(config) => (config, None),
            Err(err) => {
                let mut config = Self::default();
                config.apply_env_overrides();
                if !path.as_ref().exists() {
                    tracing::debug!("No config file at {}, using defaults", path.as_ref().display());
                    return (config, None);
                }
                (config, Some(err))
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.provider.base_url.trim().is_empty() {
            anyhow::bail!("provider.base_url must not be empty");
        }

        if self.provider.timeout_seconds == 0 {
            anyhow::bail!("Timeout must be greater than 0");
        }

        if self.refresh.interval_secs == 0 {
            anyhow::bail!("refresh.interval_secs must be greater than 0");
        }

        if self.market.gainers_limit == 0 {
            anyhow::bail!("market.gainers_limit must be greater than 0");
        }

        if self.market.max_universe_symbols == 0 {
            anyhow::bail!("market.max_universe_symbols must be greater than 0");
        }

        if self.market.gainers_limit > self.market.max_universe_symbols {
            anyhow::bail!(
                "market.gainers_limit ({}) must not exceed market.max_universe_symbols ({})",
                self.market.gainers_limit,
                self.market.max_universe_symbols
            );
        }

        if self.log.file_path.trim().is_empty() {
            anyhow::bail!("Log file path must not be empty");
        }

        if !self.ui.scaling.is_finite() || self.ui.scaling <= 0.0 {
            anyhow::bail!("ui.scaling must be a positive number");
        }

        Ok(())
    }

    /// Display formatted configuration
    pub fn display(&self) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        println!("Current configuration:");
        println!("{}", content);
        Ok(())
    }

    /// Display configuration management help
    pub fn display_help() -> Result<()> {
        println!("Configuration management commands:");
        println!("  bazaar config show    - Show current configuration");
        println!("  bazaar config reset   - Write the default configuration file");
        Ok(())
    }

    /// Handle configuration command
    pub fn handle_command(action: &Option<crate::cli::ConfigAction>, path: &str) -> Result<()> {
        match action {
            Some(crate::cli::ConfigAction::Show) => {
                let config = Config::load_or_default(path);
                config.display()?;
            }
            Some(crate::cli::ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save_to_file(path)?;
                println!("Default configuration written to {}", path);
            }
            None => {
                Config::display_help()?;
            }
        }
        Ok(())
    }
}

/// Clamp a scaling factor into [`SCALING_RANGE`], mapping garbage to 1.0
pub fn clamp_scaling(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(SCALING_RANGE.0, SCALING_RANGE.1)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.refresh.interval_secs, 60);
        assert_eq!(config.refresh.section_pacing_ms, 100);
        assert_eq!(config.market.gainers_limit, 10);
        assert_eq!(config.market.max_universe_symbols, 30);
    }

    #[test]
    fn test_scaling_clamp() {
        assert_eq!(clamp_scaling(1.25), 1.25);
        assert_eq!(clamp_scaling(10.0), 3.0);
        assert_eq!(clamp_scaling(0.1), 0.5);
        assert_eq!(clamp_scaling(f64::NAN), 1.0);
    }

    #[test]
    fn test_validation_rejects_zero_interval() {
        let mut config = Config::default();
        config.refresh.interval_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.market.gainers_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_caps_gainers_limit() {
        let mut config = Config::default();
        config.market.gainers_limit = config.market.max_universe_symbols;
        assert!(config.validate().is_ok());

        config.market.gainers_limit = 65535;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[refresh]\ninterval_secs = 30\n").unwrap();
        assert_eq!(config.refresh.interval_secs, 30);
        assert_eq!(config.refresh.section_pacing_ms, 100);
        assert_eq!(config.provider.timeout_seconds, 10);
    }

    #[test]
    fn test_broken_file_reports_error() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "[refresh\ninterval_secs = ").unwrap();

        let (config, error) = Config::load_checked(temp_file.path());
        assert!(error.is_some());
        assert_eq!(config.market.gainers_limit, 10);

        let missing = temp_file.path().with_extension("absent");
        let (_, error) = Config::load_checked(&missing);
        assert!(error.is_none());
    }

    #[test]
    fn test_config_file_operations() {
        let mut config = Config::default();
        config.market.default_universe = "SENSEX".to_string();
        let temp_file = NamedTempFile::new().unwrap();

        // Test save
        config.save_to_file(temp_file.path()).unwrap();

        // Test load
        let loaded_config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded_config.market.default_universe, "SENSEX");
        assert_eq!(loaded_config.provider.base_url, config.provider.base_url);
    }
}
