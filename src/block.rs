//! A group of rules sharing one user-agent target.

use ahash::AHashSet;
use serde::Serialize;
use std::fmt;
use url::Url;

use crate::rule::{Allow, Disallow, Rule};
use crate::url_pattern::decode;
use crate::{CrawlDelay, UserAgent};

/// DirectiveBlock is one `User-agent` group of a robots.txt file.
///
/// Blocks are immutable once built: the `with_*` builders consume the block
/// and return the extended one. Rules keep the order they were added in and
/// a rule equal to one already present is not added twice.
///
/// # Precedence
///
/// A path is disallowed when at least one Disallow rule matches it and no
/// Allow rule does. Any matching Allow wins, whatever the pattern lengths.
///
/// # Examples
/// ```
/// use robots_txt::{DirectiveBlock, UrlPattern, UserAgent};
/// use robots_txt::rule::{Allow, Disallow};
///
/// let block = DirectiveBlock::new(UserAgent::of("*").unwrap())
///     .with_allow(Allow::of(UrlPattern::of("/public")))
///     .with_disallow(Disallow::of(UrlPattern::of("/")));
///
/// assert!(block.disallows_path("/private"));
/// assert!(!block.disallows_path("/public/index.html"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectiveBlock {
    user_agent: UserAgent,
    allow: Vec<Allow>,
    disallow: Vec<Disallow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    crawl_delay: Option<CrawlDelay>,
    /// Membership index for the rule lists
    #[serde(skip)]
    seen_allow: AHashSet<Allow>,
    #[serde(skip)]
    seen_disallow: AHashSet<Disallow>,
}

impl DirectiveBlock {
    /// Create a block without rules for the given user agent.
    pub fn new(user_agent: UserAgent) -> Self {
        Self {
            user_agent,
            allow: Vec::new(),
            disallow: Vec::new(),
            crawl_delay: None,
            seen_allow: AHashSet::new(),
            seen_disallow: AHashSet::new(),
        }
    }

    /// Return a new block with the Allow rule added.
    pub fn with_allow(mut self, allow: Allow) -> Self {
        if self.seen_allow.insert(allow.clone()) {
            self.allow.push(allow);
        }
        self
    }

    /// Return a new block with the Disallow rule added.
    pub fn with_disallow(mut self, disallow: Disallow) -> Self {
        if self.seen_disallow.insert(disallow.clone()) {
            self.disallow.push(disallow);
        }
        self
    }

    /// Return a new block with the crawl delay set, replacing any previous one.
    pub fn with_crawl_delay(mut self, crawl_delay: CrawlDelay) -> Self {
        self.crawl_delay = Some(crawl_delay);
        self
    }

    /// Get the user agent this block targets.
    pub fn user_agent(&self) -> &UserAgent {
        &self.user_agent
    }

    /// Get the Allow rules in insertion order.
    pub fn allow_rules(&self) -> &[Allow] {
        &self.allow
    }

    /// Get the Disallow rules in insertion order.
    pub fn disallow_rules(&self) -> &[Disallow] {
        &self.disallow
    }

    /// Get the crawl delay, if the block sets one.
    pub fn crawl_delay(&self) -> Option<CrawlDelay> {
        self.crawl_delay
    }

    /// Check whether this block applies to the given crawler.
    pub fn targets(&self, user_agent: &str) -> bool {
        self.user_agent.matches(user_agent)
    }

    pub(crate) fn targets_lowered(&self, user_agent: &str) -> bool {
        self.user_agent.matches_lowered(user_agent)
    }

    /// Check whether this block forbids fetching `url`.
    ///
    /// Only the path and query take part in matching.
    pub fn disallows(&self, url: &Url) -> bool {
        self.disallows_path(&clean(url))
    }

    /// Check whether this block lets the crawler fetch `url`.
    pub fn allows(&self, url: &Url) -> bool {
        !self.disallows(url)
    }

    /// Check whether this block forbids `path` (path and optional query).
    pub fn disallows_path(&self, path: &str) -> bool {
        let disallowed = self.disallow.iter().any(|rule| rule.matches(path));
        disallowed && !self.allow.iter().any(|rule| rule.matches(path))
    }
}

/// Strip scheme, authority and fragment, keeping the decoded `path[?query]`.
pub(crate) fn clean(url: &Url) -> String {
    match url.query() {
        Some(query) => decode(&format!("{}?{}", url.path(), query)),
        None => decode(url.path()),
    }
}

impl fmt::Display for DirectiveBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_agent)?;
        for allow in &self.allow {
            write!(f, "\n{}", allow)?;
        }
        for disallow in &self.disallow {
            write!(f, "\n{}", disallow)?;
        }
        if let Some(crawl_delay) = self.crawl_delay {
            write!(f, "\n{}", crawl_delay)?;
        }
        Ok(())
    }
}
