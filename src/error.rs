//! Error types.

use crate::core::time::Seconds;

/// Failure reported by a player backend.
/// The scrub controller never swallows these; they are handed back to whoever
/// delivered the event.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlayerError {
    #[error("Player is not ready: media metadata has not loaded")]
    NotReady,
    #[error("Seek to {target_secs}s was rejected")]
    SeekRejected { target_secs: Seconds },
    #[error("Player backend error: {0}")]
    Backend(String),
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
