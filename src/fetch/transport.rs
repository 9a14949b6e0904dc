//! HTTP transports used to download robots.txt files.

use url::Url;

use super::FetchConfig;
use crate::{Error, Result};

/// A downloaded response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    /// Create a new FetchResponse.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Transport performs the GET request for a robots.txt file.
///
/// Non-2xx answers are responses, not errors: the caller decides what a
/// status means. Errors are reserved for requests that got no answer.
pub trait Transport: Send + Sync {
    /// GET `url`, sending `user_agent` as the `User-Agent` header.
    fn get(&self, url: &Url, user_agent: &str) -> Result<FetchResponse>;
}

/// Blocking transport backed by a ureq agent.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Create a transport honoring the configured timeout.
    pub fn new(config: &FetchConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&FetchConfig::default())
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &Url, user_agent: &str) -> Result<FetchResponse> {
        let response = match self
            .agent
            .get(url.as_str())
            .set("User-Agent", user_agent)
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                log::debug!("GET {} answered {}", url, code);
                response
            }
            Err(ureq::Error::Transport(t)) => return Err(Error::Transport(t.to_string())),
        };

        let status = response.status();
        let body = response.into_string()?;
        Ok(FetchResponse::new(status, body))
    }
}
