//! Error types for moonphase operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for moonphase operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using moonphase
#[derive(Error, Debug)]
pub enum Error {
    /// Month/day/year combination outside the natural calendar range
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Time of day outside 00:00:00..=23:59:59
    #[error("invalid time of day {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    /// A flavor-text asset file does not exist
    #[error("missing asset file: {}", path.display())]
    MissingAsset { path: PathBuf },

    /// A flavor-text asset file exists but contains no lines
    #[error("asset file has no lines: {}", path.display())]
    EmptyAsset { path: PathBuf },

    /// I/O failure while reading an asset
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be read or parsed
    #[error("configuration error: {0}")]
    Configuration(String),
}
