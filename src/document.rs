//! Parsed robots.txt documents.

use serde::Serialize;
use std::fmt;
use url::Url;

use crate::block::clean;
use crate::{DirectiveBlock, Walker};

/// Document is a parsed robots.txt file together with the URL it came from.
///
/// # Matching
///
/// Every block targeting the crawler is consulted, in document order. The
/// URL is disallowed as soon as one of them disallows it; a crawler no block
/// targets may fetch everything.
///
/// # Examples
/// ```
/// use robots_txt::Document;
/// use url::Url;
///
/// let robots = Url::parse("https://example.com/robots.txt").unwrap();
/// let document = Document::parse(robots, "User-agent: *\nDisallow: /private\n");
///
/// let page = Url::parse("https://example.com/private/index.html").unwrap();
/// assert!(document.disallows("MyBot/1.0", &page));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    url: Url,
    blocks: Vec<DirectiveBlock>,
}

impl Document {
    /// Create a document from already grouped blocks.
    pub fn new(url: Url, blocks: Vec<DirectiveBlock>) -> Self {
        Self { url, blocks }
    }

    /// Parse robots.txt content fetched from `url`.
    pub fn parse(url: Url, content: &str) -> Self {
        Self::new(url, Walker::parse_str(content))
    }

    /// Get the URL the document was fetched from.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the blocks in document order.
    pub fn blocks(&self) -> &[DirectiveBlock] {
        &self.blocks
    }

    /// Iterate the blocks that apply to `user_agent`.
    pub fn blocks_for<'a>(
        &'a self,
        user_agent: &'a str,
    ) -> impl Iterator<Item = &'a DirectiveBlock> + 'a {
        let lowered = user_agent.to_lowercase();
        self.blocks
            .iter()
            .filter(move |block| block.targets_lowered(&lowered))
    }

    /// Check whether `user_agent` must not fetch `url`.
    pub fn disallows(&self, user_agent: &str, url: &Url) -> bool {
        let path = clean(url);
        let disallowed = self
            .blocks_for(user_agent)
            .any(|block| block.disallows_path(&path));

        if disallowed {
            log::trace!("{} disallowed for {}", url, user_agent);
        }

        disallowed
    }

    /// Check whether `user_agent` may fetch `url`.
    pub fn allows(&self, user_agent: &str, url: &Url) -> bool {
        !self.disallows(user_agent, url)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{}", block)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Allow, Disallow};
    use crate::{UrlPattern, UserAgent};

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn disallowing(agent: &str, pattern: &str) -> DirectiveBlock {
        DirectiveBlock::new(UserAgent::of(agent).unwrap())
            .with_disallow(Disallow::of(UrlPattern::of(pattern)))
    }

    #[test]
    fn test_no_blocks_allows_everything() {
        let document = Document::new(url("https://example.com/robots.txt"), Vec::new());
        assert!(!document.disallows("foo", &url("https://example.com/")));
        assert_eq!(document.to_string(), "");
    }

    #[test]
    fn test_non_targeting_blocks_are_ignored() {
        let document = Document::new(
            url("https://example.com/robots.txt"),
            vec![disallowing("bar", "/")],
        );
        assert!(!document.disallows("foo", &url("https://example.com/page")));
        assert!(document.disallows("bar", &url("https://example.com/page")));
    }

    #[test]
    fn test_any_targeting_block_disallows() {
        let allowing = DirectiveBlock::new(UserAgent::of("foo").unwrap())
            .with_allow(Allow::of(UrlPattern::of("/")));
        let document = Document::new(
            url("https://example.com/robots.txt"),
            vec![allowing, disallowing("*", "/private")],
        );

        assert!(document.disallows("foo", &url("https://example.com/private/x")));
        assert!(document.allows("foo", &url("https://example.com/public/x")));
    }

    #[test]
    fn test_blocks_for() {
        let document = Document::new(
            url("https://example.com/robots.txt"),
            vec![disallowing("foo", "/a"), disallowing("bar", "/b"), disallowing("*", "/c")],
        );
        assert_eq!(document.blocks_for("foo").count(), 2);
        assert_eq!(document.blocks_for("baz").count(), 1);
        assert_eq!(document.blocks_for("FooBot/1.0").count(), 2);
    }

    #[test]
    fn test_mixed_case_agent_and_encoded_url() {
        let document = Document::new(
            url("https://example.com/robots.txt"),
            vec![disallowing("FooBot", "/café")],
        );
        assert!(document.disallows("Mozilla/5.0 (FOOBOT)", &url("https://example.com/café")));
        assert!(!document.disallows("BarBot", &url("https://example.com/café")));
    }

    #[test]
    fn test_display_joins_blocks() {
        let document = Document::new(
            url("https://example.com/robots.txt"),
            vec![disallowing("foo", "/a"), disallowing("bar", "/b")],
        );
        assert_eq!(
            document.to_string(),
            "User-agent: foo\nDisallow: /a\n\nUser-agent: bar\nDisallow: /b"
        );
    }

    #[test]
    fn test_url() {
        let document = Document::new(url("https://example.com/robots.txt"), Vec::new());
        assert_eq!(document.url().as_str(), "https://example.com/robots.txt");
    }
}
