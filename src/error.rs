//! Error types for extractcontent.
//!
//! Content analysis itself never fails; these errors cover the fallible
//! edges around it: compiling caller-supplied patterns and obtaining input.

/// Error type for configuration and input operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller-supplied scoring pattern did not compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Reading the input failed.
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Fetching a remote document failed.
    #[error("Fetch failed: {0}")]
    Fetch(String),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
