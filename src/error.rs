//! Error types for robots-txt.

use thiserror::Error;

/// Error type for robots-txt operations.
///
/// Parsing never produces one of these: malformed lines are dropped by the
/// walker. Errors come from the strict constructors and from fetching.
#[derive(Error, Debug)]
pub enum Error {
    /// A user-agent token was empty
    #[error("user-agent must not be empty")]
    EmptyUserAgent,

    /// A crawl delay was negative
    #[error("crawl delay must not be negative: {0}")]
    NegativeCrawlDelay(i64),

    /// The robots.txt resource did not answer with 200 OK
    #[error("robots.txt not found at {url} (HTTP {status})")]
    FileNotFound { url: String, status: u16 },

    /// The transport failed before a response was received
    #[error("transport error: {0}")]
    Transport(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result type alias for robots-txt operations.
pub type Result<T> = std::result::Result<T, Error>;
