//! Typed directive lines, as produced by the walker before grouping.

use std::fmt;

use crate::rule::{Allow, Disallow};
use crate::{CrawlDelay, DirectiveType, UrlPattern, UserAgent};

/// Directive is one supported robots.txt line after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    UserAgent(UserAgent),
    Allow(Allow),
    Disallow(Disallow),
    CrawlDelay(CrawlDelay),
}

impl Directive {
    /// Build a directive from a supported key and its raw value.
    ///
    /// Returns `None` when the value is unusable for the key: a blank
    /// user-agent or a crawl delay that is not a non-negative number.
    pub fn classify(directive_type: DirectiveType, value: &str) -> Option<Self> {
        match directive_type {
            DirectiveType::UserAgent => UserAgent::maybe(value).map(Directive::UserAgent),
            DirectiveType::Allow => Some(Directive::Allow(Allow::of(UrlPattern::of(value)))),
            DirectiveType::Disallow => {
                Some(Directive::Disallow(Disallow::of(UrlPattern::of(value))))
            }
            DirectiveType::CrawlDelay => CrawlDelay::maybe(value).map(Directive::CrawlDelay),
        }
    }

    /// Get the directive type of this line.
    pub fn directive_type(&self) -> DirectiveType {
        match self {
            Directive::UserAgent(_) => DirectiveType::UserAgent,
            Directive::Allow(_) => DirectiveType::Allow,
            Directive::Disallow(_) => DirectiveType::Disallow,
            Directive::CrawlDelay(_) => DirectiveType::CrawlDelay,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::UserAgent(agent) => fmt::Display::fmt(agent, f),
            Directive::Allow(allow) => fmt::Display::fmt(allow, f),
            Directive::Disallow(disallow) => fmt::Display::fmt(disallow, f),
            Directive::CrawlDelay(delay) => fmt::Display::fmt(delay, f),
        }
    }
}
