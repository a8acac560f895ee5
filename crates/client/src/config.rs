//! Client configuration from process environment.
use std::env;
use std::path::PathBuf;

/// Configuration for a content-loading session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub session_id: Option<String>,
    pub coin_seed: Option<u64>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TCG_DATA_DIR` - Directory holding the content text files (default: shipped data)
    /// - `TCG_LOG_DIR` - Directory for session log files (default: `logs`)
    /// - `TCG_SESSION_ID` - Session identifier for the log file (default: auto-generated)
    /// - `TCG_COIN_SEED` - Seed for the match coin (default: derived from the clock)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("TCG_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(dir) = read_env::<PathBuf>("TCG_LOG_DIR") {
            config.log_dir = dir;
        }
        if let Ok(id) = env::var("TCG_SESSION_ID") {
            if !id.is_empty() {
                config.session_id = Some(id);
            }
        }
        if let Some(seed) = read_env::<u64>("TCG_COIN_SEED") {
            config.coin_seed = Some(seed);
        }

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("crates/game/content/data"),
            log_dir: PathBuf::from("logs"),
            session_id: None,
            coin_seed: None,
        }
    }
}

/// Parse an environment variable, returning `None` when unset or malformed.
fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
