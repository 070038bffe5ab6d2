//! Command Line Interface module
//!
//! Implements the CLI commands and argument parsing for Bazaar.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "bazaar")]
#[command(about = "Bazaar - Indian Stock Market Dashboard")]
#[command(
    long_about = "A terminal dashboard for NSE/BSE indices, top movers, market sentiment and sectoral performance"
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    #[arg(long, global = true, default_value = "config.toml")]
    pub config_file: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Dry-run mode: show welcome page and configuration without starting UI
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the live dashboard (default)
    Dashboard,

    /// Fetch every section once and print it as plain text
    Snapshot {
        /// Universe for the gainers/losers list (NIFTY50, SENSEX, BANKNIFTY, ...)
        #[arg(long)]
        universe: Option<String>,

        /// Period for the gainers/losers list (1D, 1Week, 1Month, 6Months, 1Year)
        #[arg(long)]
        period: Option<String>,
    },

    /// Verify the market-data provider is reachable
    Check,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Dashboard
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the actual command, using default if none provided
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }

    /// Whether the full-screen dashboard will own the terminal
    pub fn is_dashboard_mode(&self) -> bool {
        matches!(self.command(), Commands::Dashboard) && !self.dry_run
    }

    /// Adjust log level based on verbose flag
    pub fn effective_log_level(&self) -> String {
        if self.verbose {
            "debug".to_string()
        } else {
            self.log_level.clone()
        }
    }

    /// Check if we're running in dry-run mode
    pub fn is_dry_run_mode(&self) -> bool {
        self.dry_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_dashboard() {
        let cli = Cli::try_parse_from(["bazaar"]).unwrap();
        assert!(matches!(cli.command(), Commands::Dashboard));
        assert!(cli.is_dashboard_mode());
        assert_eq!(cli.config_file, "config.toml");
    }

    #[test]
    fn test_verbose_overrides_log_level() {
        let cli = Cli::try_parse_from(["bazaar", "--log-level", "warn", "-v"]).unwrap();
        assert_eq!(cli.effective_log_level(), "debug");
    }

    #[test]
    fn test_snapshot_arguments() {
        let cli =
            Cli::try_parse_from(["bazaar", "snapshot", "--universe", "SENSEX", "--dry-run"]).unwrap();
        match cli.command() {
            Commands::Snapshot { universe, period } => {
                assert_eq!(universe.as_deref(), Some("SENSEX"));
                assert!(period.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(cli.is_dry_run_mode());
        assert!(!cli.is_dashboard_mode());
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::try_parse_from(["bazaar", "config", "reset"]).unwrap();
        assert!(matches!(
            cli.command(),
            Commands::Config {
                action: Some(ConfigAction::Reset)
            }
        ));
    }
}
