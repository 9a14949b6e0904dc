//! Fetching and parsing robots.txt files over HTTP.
//!
//! The walker and the document never perform I/O themselves. This module
//! is the thin layer that turns a URL into a [`Document`]:
//! - builds the GET request with the crawler's `User-Agent`
//! - treats anything but `200 OK` as a missing file
//! - hands the body to the [`Walker`](crate::Walker)

mod config;
mod transport;

pub use config::{FetchConfig, DEFAULT_TIMEOUT};
pub use transport::{FetchResponse, Transport, UreqTransport};

use url::Url;

use crate::{Document, Error, Result};

/// Parser downloads a robots.txt file and parses it into a [`Document`].
///
/// # Example
///
/// ```ignore
/// use robots_txt::fetch::{FetchConfig, Parser};
/// use url::Url;
///
/// let parser = Parser::with_config(FetchConfig::default().with_user_agent("MyBot/1.0"));
/// let robots = Url::parse("https://example.com/robots.txt")?;
///
/// match parser.try_parse(&robots) {
///     Some(document) => println!("{}", document),
///     None => println!("no robots.txt, everything is allowed"),
/// }
/// ```
pub struct Parser<T: Transport = UreqTransport> {
    transport: T,
    config: FetchConfig,
}

impl Parser<UreqTransport> {
    /// Create a parser using ureq and the given configuration.
    pub fn with_config(config: FetchConfig) -> Self {
        let transport = UreqTransport::new(&config);
        Self { transport, config }
    }
}

impl<T: Transport> Parser<T> {
    /// Create a parser over a custom transport.
    pub fn new(transport: T, config: FetchConfig) -> Self {
        Self { transport, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Download and parse the robots.txt file at `url`.
    ///
    /// Fails with [`Error::FileNotFound`] unless the server answers `200 OK`.
    pub fn parse(&self, url: &Url) -> Result<Document> {
        let response = self.transport.get(url, &self.config.user_agent)?;

        if response.status != 200 {
            return Err(Error::FileNotFound {
                url: url.to_string(),
                status: response.status,
            });
        }

        log::info!("Fetched {} ({} bytes)", url, response.body.len());
        Ok(Document::parse(url.clone(), &response.body))
    }

    /// Download and parse the robots.txt file at `url`, or `None` if unavailable.
    ///
    /// Crawlers usually treat a missing robots.txt as "everything allowed".
    pub fn try_parse(&self, url: &Url) -> Option<Document> {
        match self.parse(url) {
            Ok(document) => Some(document),
            Err(e) => {
                log::warn!("No robots.txt for {}: {}", url, e);
                None
            }
        }
    }

    /// Download and parse the robots.txt file governing `page`.
    pub fn parse_for(&self, page: &Url) -> Result<Document> {
        self.parse(&robots_url(page))
    }
}

/// Get the robots.txt URL on the origin of `page`.
pub fn robots_url(page: &Url) -> Url {
    let mut url = page.clone();
    url.set_path("/robots.txt");
    url.set_query(None);
    url.set_fragment(None);
    url
}
