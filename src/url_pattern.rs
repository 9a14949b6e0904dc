//! Path patterns with `*` wildcard and `$` end anchor.

use percent_encoding::percent_decode_str;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// UrlPattern matches the path (and query) of a URL against a robots.txt pattern.
///
/// # Pattern Formats
/// - Empty or `*`: matches every path
/// - Literal: `/fish` - matches `/fish`, `/fish.html`, `/fishheads`, ...
/// - Wildcard: `/*.php` - `*` matches any sequence of characters
/// - Anchored: `/*.php$` - `$` pins the match to the end of the path
///
/// Matching is case-sensitive. The pattern is kept verbatim for display and
/// matched in percent-decoded form, so `/café` and `/caf%C3%A9` are the same
/// rule. Callers pass decoded paths, see [`decode`].
///
/// # Examples
/// ```
/// use robots_txt::UrlPattern;
///
/// let pattern = UrlPattern::of("/*.php$");
/// assert!(pattern.matches("/folder/filename.php"));
/// assert!(!pattern.matches("/filename.php?parameters"));
/// ```
#[derive(Debug, Clone)]
pub struct UrlPattern {
    pattern: String,
    /// Percent-decoded pattern used for matching
    decoded: String,
    /// Compiled wildcard expression, `None` when it failed to compile
    regex: Option<Regex>,
}

impl UrlPattern {
    /// Create a pattern. Any string is accepted, including the empty one.
    pub fn of(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let decoded = decode(&pattern);
        let regex = match Regex::new(&translate(&decoded)) {
            Ok(regex) => Some(regex),
            Err(e) => {
                log::debug!("Pattern {:?} falls back to prefix matching: {}", pattern, e);
                None
            }
        };

        Self {
            pattern,
            decoded,
            regex,
        }
    }

    /// Check whether `url` (a decoded path with optional query) matches this pattern.
    pub fn matches(&self, url: &str) -> bool {
        if self.matches_everything() {
            return true;
        }

        if url == self.decoded {
            return true;
        }

        match &self.regex {
            Some(regex) => regex.is_match(url),
            None => url.starts_with(&self.decoded),
        }
    }

    /// Check if this pattern matches every path (`*` or empty).
    pub fn matches_everything(&self) -> bool {
        self.pattern.is_empty() || self.pattern == "*"
    }

    /// Check if the pattern is the empty string.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Get the verbatim pattern.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

/// Percent-decode a path or pattern. Invalid UTF-8 is replaced, not rejected.
pub(crate) fn decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Translate a robots.txt pattern into an unanchored regular expression.
///
/// Everything is escaped except `*` (any sequence) and `$` (end of input).
fn translate(pattern: &str) -> String {
    let mut expr = String::with_capacity(pattern.len() * 2);
    let mut buf = [0u8; 4];

    for c in pattern.chars() {
        match c {
            '*' => expr.push_str(".*"),
            '$' => expr.push('$'),
            _ => expr.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }

    expr
}

impl PartialEq for UrlPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for UrlPattern {}

impl Hash for UrlPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
    }
}

impl PartialOrd for UrlPattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UrlPattern {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pattern.cmp(&other.pattern)
    }
}

impl fmt::Display for UrlPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl From<&str> for UrlPattern {
    fn from(pattern: &str) -> Self {
        Self::of(pattern)
    }
}

impl Serialize for UrlPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pattern: &str, cases: &[(&str, bool)]) {
        let pattern = UrlPattern::of(pattern);
        for (url, expected) in cases {
            assert_eq!(
                pattern.matches(url),
                *expected,
                "pattern {:?} against {:?}",
                pattern.as_str(),
                url
            );
        }
    }

    #[test]
    fn test_match_everything() {
        let urls = ["/", "/foo", "/foo/bar", "/foo/bar?some=query", ""];
        for pattern in ["", "*"] {
            let pattern = UrlPattern::of(pattern);
            assert!(pattern.matches_everything());
            for url in urls {
                assert!(pattern.matches(url));
            }
        }
    }

    #[test]
    fn test_exact_match() {
        for literal in ["/fish", "/a+b(c)", "/[x]?y=1", "/a.b", "/end$/x"] {
            assert!(UrlPattern::of(literal).matches(literal));
        }
    }

    #[test]
    fn test_root_pattern() {
        check(
            "/",
            &[("/", true), ("/foo", true), ("/foo/bar", true), ("/foo/bar?some=query", true)],
        );
        check(
            "/*",
            &[("/", true), ("/foo", true), ("/foo/bar", true), ("/foo/bar?some=query", true)],
        );
    }

    #[test]
    fn test_prefix_match() {
        let cases = [
            ("/fish", true),
            ("/fish.html", true),
            ("/fish/salmon.html", true),
            ("/fishheads", true),
            ("/fishheads/yummy.html", true),
            ("/fish.php?id=anything", true),
            ("/Fish.asp", false),
            ("/catfish", false),
            ("/?id=fish", false),
        ];
        check("/fish", &cases);
        check("/fish*", &cases);
    }

    #[test]
    fn test_directory_match() {
        check(
            "/fish/",
            &[
                ("/fish/", true),
                ("/fish/?id=anything", true),
                ("/fish/salmon.htm", true),
                ("/fish", false),
                ("/fish.html", false),
                ("/Fish/Salmon.asp", false),
            ],
        );
    }

    #[test]
    fn test_wildcard_match() {
        check(
            "/*.php",
            &[
                ("/filename.php", true),
                ("/folder/filename.php", true),
                ("/folder/filename.php?parameters", true),
                ("/folder/any.php.file.html", true),
                ("/filename.php/", true),
                ("/", false),
                ("/windows.PHP", false),
            ],
        );
        check(
            "/fish*.php",
            &[
                ("/fish.php", true),
                ("/fishheads/catfish.php?parameters", true),
                ("/Fish.PHP", false),
            ],
        );
    }

    #[test]
    fn test_end_anchor() {
        check(
            "/*.php$",
            &[
                ("/filename.php", true),
                ("/folder/filename.php", true),
                ("/filename.php?parameters", false),
                ("/filename.php/", false),
                ("/filename.php5", false),
                ("/windows.PHP", false),
            ],
        );
        check("/$", &[("/", true), ("/page.htm", false)]);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        check(
            "/search?q=a+b",
            &[("/search?q=a+b&page=2", true), ("/searchq=aab", false)],
        );
        check("/a.c", &[("/a.c", true), ("/abc", false)]);
        check("/^x", &[("/^x", true), ("/x", false)]);
    }

    #[test]
    fn test_percent_encoded_pattern() {
        check("/caf%C3%A9", &[("/café/menu", true), ("/cafe", false)]);
        check("/a%20b", &[("/a b", true), ("/a%20b", false)]);
        assert_eq!(UrlPattern::of("/caf%C3%A9").as_str(), "/caf%C3%A9");
        assert_eq!(decode("/caf%C3%A9/%2"), "/café/%2");
    }

    #[test]
    fn test_equality_uses_pattern() {
        assert_eq!(UrlPattern::of("/a"), UrlPattern::from("/a"));
        assert_ne!(UrlPattern::of("/a"), UrlPattern::of("/A"));
        assert!(UrlPattern::of("/a") < UrlPattern::of("/b"));
        assert_eq!(UrlPattern::of("*").to_string(), "*");
    }
}
