//! Content-loading client entry point.
mod config;

use anyhow::Result;
use config::ClientConfig;
use tcg_content::ContentReader;
use tcg_core::{CoinFace, MatchState};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    setup_logging(&config)?;

    let mut reader = ContentReader::new(&config.data_dir);
    reader.read_all();
    tracing::info!(
        "Content loaded from {}: {} types, {} moves, {} abilities",
        reader.data_dir().display(),
        reader.types().len(),
        reader.moves().len(),
        reader.abilities().len()
    );

    let mut state = MatchState::seeded(config.coin_seed.unwrap_or_else(clock_seed));
    if state.coin.flip() == CoinFace::Tails {
        state.pass_turn();
    }
    tracing::info!("Opening coin flip gives seat {} the first turn", state.turn());

    Ok(())
}

/// Setup logging to both stderr and a session-specific file
fn setup_logging(config: &ClientConfig) -> Result<()> {
    // Create session ID if not provided
    let session_id = config
        .session_id
        .clone()
        .unwrap_or_else(|| format!("session_{}", clock_seed()));

    // Create session-specific log directory
    let session_log_dir = config.log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    // Setup file appender
    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    // Create env filter
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer().with_writer(non_blocking_file);
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    // Leak the guard to keep the file writer alive for the process lifetime
    std::mem::forget(guard);

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(())
}

/// Seconds since the epoch, used for session ids and default coin seeds.
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
