// crates/countries-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading or saving a [`Dataset`](crate::Dataset).
///
/// The filter, lookup and view operations are total and never produce one of
/// these; only the dataset provider touches the filesystem or parses bytes.
#[derive(Debug, Error)]
pub enum CountryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary format error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The path extension does not name a format this build can read.
    #[error("unsupported dataset format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, CountryError>;
