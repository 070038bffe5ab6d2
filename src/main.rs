use bazaar::{AppResult, cli::Cli, config::Config, init_logging, session::SessionManager};

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse_args();

    // Load configuration; a broken file is reported once logging is up
    let (config, load_error) = Config::load_checked(&cli.config_file);

    // The dashboard owns the terminal, so its logs go to a file
    let log_file = cli
        .is_dashboard_mode()
        .then_some(config.log.file_path.as_str());
    let _log_guard = init_logging(&cli.effective_log_level(), log_file)?;

    if let Some(err) = load_error {
        tracing::warn!("Failed to load config: {:#}, using defaults", err);
        if cli.is_dashboard_mode() {
            eprintln!(
                "Warning: failed to load {}: {:#}; using defaults",
                cli.config_file, err
            );
        }
    }

    tracing::info!("Bazaar dashboard starting...");
    tracing::debug!("CLI arguments: {:?}", cli);

    // Create session manager
    let mut session_manager = SessionManager::new(&cli, config);

    // Run the selected command
    session_manager.start().await?;

    Ok(())
}
