//! Rule types and trait definitions.

mod allow;
mod disallow;

pub use allow::Allow;
pub use disallow::Disallow;

use crate::{DirectiveType, UrlPattern};

/// Rule trait defines the interface for path rules inside a block.
///
/// Rules are matched against the path and query of a URL, never against
/// its scheme or host.
pub trait Rule: Send + Sync {
    /// Check whether `path` is covered by this rule.
    fn matches(&self, path: &str) -> bool;

    /// Get the pattern of this rule.
    fn pattern(&self) -> &UrlPattern;

    /// Get the directive this rule was parsed from.
    fn directive_type(&self) -> DirectiveType;
}

/// Render a rule as `<Directive>: <pattern>`.
pub(crate) fn render(rule: &dyn Rule, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}: {}", rule.directive_type().label(), rule.pattern())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_trait_object() {
        let allow = Allow::of(UrlPattern::of("/foo"));
        let disallow = Disallow::of(UrlPattern::of("/bar"));
        let rules: [&dyn Rule; 2] = [&allow, &disallow];

        assert_eq!(rules[0].directive_type(), DirectiveType::Allow);
        assert_eq!(rules[1].directive_type(), DirectiveType::Disallow);
        assert!(rules[0].matches("/foo/index.html"));
        assert!(rules[1].matches("/bar"));
        assert_eq!(rules[1].pattern().as_str(), "/bar");
    }
}
