//! Directive type definitions.

use std::fmt;

/// DirectiveType represents one of the robots.txt keys understood by the parser.
///
/// Every other key (`Sitemap`, `Host`, vendor extensions) has no
/// DirectiveType and is ignored while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveType {
    /// Opens a block for one or more crawlers
    UserAgent,
    /// Path pattern the crawler may fetch
    Allow,
    /// Path pattern the crawler must not fetch
    Disallow,
    /// Seconds to wait between fetches
    CrawlDelay,
}

impl DirectiveType {
    /// Parse a directive key (case-insensitive, surrounding whitespace ignored).
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "user-agent" => Some(DirectiveType::UserAgent),
            "allow" => Some(DirectiveType::Allow),
            "disallow" => Some(DirectiveType::Disallow),
            "crawl-delay" => Some(DirectiveType::CrawlDelay),
            _ => None,
        }
    }

    /// Get the normalized (lowercase) key.
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveType::UserAgent => "user-agent",
            DirectiveType::Allow => "allow",
            DirectiveType::Disallow => "disallow",
            DirectiveType::CrawlDelay => "crawl-delay",
        }
    }

    /// Get the key as written when rendering a document.
    pub fn label(&self) -> &'static str {
        match self {
            DirectiveType::UserAgent => "User-agent",
            DirectiveType::Allow => "Allow",
            DirectiveType::Disallow => "Disallow",
            DirectiveType::CrawlDelay => "Crawl-delay",
        }
    }
}

impl fmt::Display for DirectiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
