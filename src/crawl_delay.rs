//! Crawl-delay directive value.

use serde::Serialize;
use std::fmt;
use std::time::Duration;

use crate::{DirectiveType, Error, Result};

/// CrawlDelay is the number of seconds a crawler should wait between fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CrawlDelay {
    seconds: u64,
}

impl CrawlDelay {
    /// Create a crawl delay.
    ///
    /// Fails with [`Error::NegativeCrawlDelay`] for negative values.
    pub fn of(seconds: i64) -> Result<Self> {
        u64::try_from(seconds)
            .map(|seconds| Self { seconds })
            .map_err(|_| Error::NegativeCrawlDelay(seconds))
    }

    /// Parse a crawl delay from a directive value.
    ///
    /// Integers are taken as is and decimals are truncated (`1.5` → `1`).
    /// Returns `None` for anything that is not a non-negative number.
    pub fn maybe(value: &str) -> Option<Self> {
        let value = value.trim();

        if let Ok(seconds) = value.parse::<u64>() {
            return Some(Self { seconds });
        }

        let seconds = value.parse::<f64>().ok()?;
        if !seconds.is_finite() || seconds < 0.0 || seconds >= u64::MAX as f64 {
            return None;
        }

        Some(Self {
            seconds: seconds.trunc() as u64,
        })
    }

    /// Get the delay in seconds.
    pub fn as_secs(&self) -> u64 {
        self.seconds
    }

    /// Get the delay as a [`Duration`].
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.seconds)
    }
}

impl fmt::Display for CrawlDelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", DirectiveType::CrawlDelay.label(), self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of() {
        assert_eq!(CrawlDelay::of(10).unwrap().as_secs(), 10);
        assert_eq!(CrawlDelay::of(0).unwrap().as_secs(), 0);
        assert!(matches!(CrawlDelay::of(-1), Err(Error::NegativeCrawlDelay(-1))));
    }

    #[test]
    fn test_maybe() {
        assert_eq!(CrawlDelay::maybe("20"), Some(CrawlDelay::of(20).unwrap()));
        assert_eq!(CrawlDelay::maybe(" 5 "), Some(CrawlDelay::of(5).unwrap()));
        assert_eq!(CrawlDelay::maybe("1.5"), Some(CrawlDelay::of(1).unwrap()));
        assert_eq!(CrawlDelay::maybe("-1"), None);
        assert_eq!(CrawlDelay::maybe("-0.5"), None);
        assert_eq!(CrawlDelay::maybe("ten"), None);
        assert_eq!(CrawlDelay::maybe(""), None);
        assert_eq!(CrawlDelay::maybe("inf"), None);
        assert_eq!(CrawlDelay::maybe("NaN"), None);
    }

    #[test]
    fn test_duration() {
        assert_eq!(
            CrawlDelay::of(3).unwrap().as_duration(),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(CrawlDelay::of(10).unwrap().to_string(), "Crawl-delay: 10");
    }
}
