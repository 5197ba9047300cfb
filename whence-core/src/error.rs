//! Error types for whence-core

use thiserror::Error;

/// Main error type for the whence-core library
///
/// Unparseable timestamps are deliberately not represented here: the
/// formatters degrade to an empty string instead of failing, so display
/// code never has to branch on a formatting error.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem failure while touching app-owned files
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),

    /// Unreadable or out-of-range configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Key-value store failure
    #[error("store error: {0}")]
    Store(String),
}

/// Shorthand used throughout whence-core
pub type Result<T> = std::result::Result<T, Error>;
