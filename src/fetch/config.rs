//! Fetch configuration types.

use std::time::Duration;

/// Default timeout for a robots.txt request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for fetching robots.txt files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Value of the `User-Agent` request header
    pub user_agent: String,
    /// Timeout for the whole request
    pub timeout: Duration,
}

impl FetchConfig {
    /// Create a new FetchConfig.
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.into(),
            timeout,
        }
    }

    /// Set the `User-Agent` header sent with requests.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new(
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            DEFAULT_TIMEOUT,
        )
    }
}
