//! Crawler identities targeted by a block.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::{DirectiveType, Error, Result};

/// UserAgent holds the product tokens a block applies to.
///
/// Tokens keep their case for rendering and are compared case-insensitively.
/// A candidate agent matches when it contains any token as a substring, so
/// `googlebot` matches `Mozilla/5.0 (compatible; Googlebot/2.1)`. The `*`
/// token matches every agent.
///
/// # Examples
/// ```
/// use robots_txt::UserAgent;
///
/// let agent = UserAgent::of("Foo").unwrap().and("Bar").unwrap();
/// assert!(agent.matches("barbot/1.0"));
/// assert_eq!(agent.to_string(), "User-agent: Foo\nUser-agent: Bar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserAgent {
    /// Tokens as written, never empty
    tokens: Vec<String>,
    /// Lowercase copies of `tokens`, same order
    lowered: Vec<String>,
}

impl UserAgent {
    /// Create a user agent from a single token.
    ///
    /// Fails with [`Error::EmptyUserAgent`] when the token is blank.
    pub fn of(name: impl AsRef<str>) -> Result<Self> {
        Self::maybe(name).ok_or(Error::EmptyUserAgent)
    }

    /// Create a user agent, returning `None` for a blank token.
    pub fn maybe(name: impl AsRef<str>) -> Option<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return None;
        }

        Some(Self {
            tokens: vec![name.to_string()],
            lowered: vec![name.to_lowercase()],
        })
    }

    /// Return a new user agent with `name` appended.
    pub fn and(&self, name: impl AsRef<str>) -> Result<Self> {
        Ok(self.merge(&Self::of(name)?))
    }

    /// Return a new user agent holding the tokens of both, `self` first.
    pub fn merge(&self, other: &UserAgent) -> Self {
        let mut merged = self.clone();
        merged.tokens.extend(other.tokens.iter().cloned());
        merged.lowered.extend(other.lowered.iter().cloned());
        merged
    }

    /// Check whether `candidate` is targeted by any token.
    pub fn matches(&self, candidate: &str) -> bool {
        self.matches_lowered(&candidate.to_lowercase())
    }

    /// Same as [`matches`](Self::matches) for a candidate already in lowercase.
    pub(crate) fn matches_lowered(&self, candidate: &str) -> bool {
        self.lowered
            .iter()
            .any(|token| token == "*" || candidate.contains(token.as_str()))
    }

    /// Iterate the tokens in insertion order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`; a user agent holds at least one token.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}: {}", DirectiveType::UserAgent.label(), token)?;
        }
        Ok(())
    }
}

impl Serialize for UserAgent {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.tokens.iter())
    }
}
