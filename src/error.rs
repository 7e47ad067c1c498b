//! Error types

use thiserror::Error;

/// Result type alias for fallible non-gameplay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from loading or saving configuration
#[derive(Debug, Error)]
pub enum Error {
    /// No platform config directory could be determined
    #[error("could not determine config directory")]
    NoConfigDir,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed settings file
    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Settings could not be encoded
    #[error("could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The next piece could not be placed where it enters the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("spawn position is blocked")]
pub struct SpawnBlocked;
