// Console entry point.
//
// Startup sequence:
// 1. Parse arguments
// 2. Load config (optional config/lotto.toml)
// 3. Initialize tracing (stderr, quiet by default)
// 4. Run one draw cycle; draw errors are printed, not returned

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use lotto_cli::Args;
use lotto_core::config;
use lotto_core::Session;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = config::load_config().context("failed to load configuration")?;
    init_tracing(&config.logging.filter)?;
    debug!(
        presets = config.presets.len(),
        attempts_per_number = config.draw.attempts_per_number,
        "Config loaded"
    );

    let session = Session::from_config(&config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    lotto_cli::run(
        args.game,
        &session,
        stdin.lock(),
        stdout.lock(),
        stderr.lock(),
    )
    .context("console I/O failed")?;

    Ok(())
}

/// Initialize tracing on stderr so log lines never mix with drawn numbers.
fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    use std::io::IsTerminal;
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
