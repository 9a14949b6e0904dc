//! Disallow rule implementation.

use serde::Serialize;
use std::fmt;

use super::{render, Rule};
use crate::{DirectiveType, UrlPattern};

/// Disallow marks paths a crawler must not fetch.
///
/// An empty pattern (`Disallow:` with no value) disallows nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Disallow {
    pattern: UrlPattern,
}

impl Disallow {
    /// Create a Disallow rule for the pattern.
    pub fn of(pattern: UrlPattern) -> Self {
        Self { pattern }
    }
}

impl Rule for Disallow {
    fn matches(&self, path: &str) -> bool {
        if self.pattern.is_empty() {
            return false;
        }

        self.pattern.matches(path)
    }

    fn pattern(&self) -> &UrlPattern {
        &self.pattern
    }

    fn directive_type(&self) -> DirectiveType {
        DirectiveType::Disallow
    }
}

impl fmt::Display for Disallow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_disallow_matches_nothing() {
        let disallow = Disallow::of(UrlPattern::of(""));
        for path in ["", "/", "/foo", "/foo/bar?x=1"] {
            assert!(!disallow.matches(path));
        }
    }

    #[test]
    fn test_wildcard_disallow_matches_everything() {
        let disallow = Disallow::of(UrlPattern::of("*"));
        assert!(disallow.matches("/"));
        assert!(disallow.matches("/private"));
    }

    #[test]
    fn test_matches_like_pattern() {
        let disallow = Disallow::of(UrlPattern::of("/*.php$"));
        assert!(disallow.matches("/index.php"));
        assert!(!disallow.matches("/index.php5"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Disallow::of(UrlPattern::of("/bar")).to_string(), "Disallow: /bar");
        assert_eq!(Disallow::of(UrlPattern::of("")).to_string(), "Disallow: ");
    }
}
