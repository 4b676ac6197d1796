// Terminal UI entry point.
//
// Startup sequence:
// 1. Load config (optional config/lotto.toml)
// 2. Initialize tracing (log file; the terminal belongs to the UI)
// 3. Build the draw session
// 4. Run the TUI event loop until the user quits

use std::path::PathBuf;

use anyhow::Context;
use directories::ProjectDirs;
use tracing::info;

use lotto_core::config;
use lotto_core::Session;

const LOG_FILE: &str = "lotto-tui.log";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config().context("failed to load configuration")?;
    init_tracing(&config.logging.filter)?;
    info!(
        presets = config.presets.len(),
        attempts_per_number = config.draw.attempts_per_number,
        "Config loaded"
    );

    let session = Session::from_config(&config);
    lotto_tui::run(session).await?;

    info!("Shutdown complete");
    Ok(())
}

/// Per-user log directory, or `./logs` when the platform has none.
fn log_dir() -> anyhow::Result<PathBuf> {
    match ProjectDirs::from("", "", "lotto") {
        Some(dirs) => Ok(dirs.data_local_dir().join("logs")),
        None => Ok(std::env::current_dir()?.join("logs")),
    }
}

fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_file = std::fs::File::create(log_dir.join(LOG_FILE))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
