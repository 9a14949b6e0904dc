//! Allow rule implementation.

use serde::Serialize;
use std::fmt;

use super::{render, Rule};
use crate::{DirectiveType, UrlPattern};

/// Allow marks paths a crawler may fetch, overriding any Disallow in the same block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Allow {
    pattern: UrlPattern,
}

impl Allow {
    /// Create an Allow rule for the pattern.
    pub fn of(pattern: UrlPattern) -> Self {
        Self { pattern }
    }
}

impl Rule for Allow {
    fn matches(&self, path: &str) -> bool {
        self.pattern.matches(path)
    }

    fn pattern(&self) -> &UrlPattern {
        &self.pattern
    }

    fn directive_type(&self) -> DirectiveType {
        DirectiveType::Allow
    }
}

impl fmt::Display for Allow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_like_pattern() {
        let allow = Allow::of(UrlPattern::of("/fish"));
        assert!(allow.matches("/fish.html"));
        assert!(!allow.matches("/catfish"));
    }

    #[test]
    fn test_empty_allow_matches_everything() {
        let allow = Allow::of(UrlPattern::of(""));
        assert!(allow.matches("/"));
        assert!(allow.matches("/anything"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Allow::of(UrlPattern::of("/foo")).to_string(), "Allow: /foo");
    }
}
