//! robots-txt - A robots.txt parser and policy engine.
//!
//! This crate parses robots.txt files into a queryable [`Document`] and
//! answers the question "may this crawler fetch this URL?".
//!
//! # Features
//!
//! - **Tolerant parsing**: unknown keys, malformed values and directives
//!   outside a `User-agent` group are dropped, never fatal
//! - **Grouping**: consecutive `User-agent` lines share one block of rules
//! - **Wildcards**: `*` matches any sequence, a `$` anchors the end of the path
//! - **Fetching**: optional blocking HTTP layer in [`fetch`]
//!
//! # Quick Start
//!
//! ```
//! use robots_txt::Document;
//! use url::Url;
//!
//! let content = "\
//! User-agent: Foo
//! User-agent: Bar
//! Allow: /foo
//! Disallow: /bar
//!
//! User-agent: *
//! Disallow:
//! Crawl-delay: 20
//! ";
//!
//! let robots = Url::parse("https://example.com/robots.txt").unwrap();
//! let document = Document::parse(robots, content);
//!
//! let bar = Url::parse("https://example.com/bar").unwrap();
//! assert!(document.disallows("Foo", &bar));
//! assert!(!document.disallows("Baz", &bar));
//! ```
//!
//! # Matching Priority
//!
//! 1. Only blocks whose user agent is contained in the crawler name apply
//!    (`*` applies to everyone)
//! 2. Inside a block, any matching Allow overrides any matching Disallow
//! 3. The URL is disallowed if any applicable block disallows it
//! 4. With no applicable block, everything is allowed

mod block;
mod crawl_delay;
mod directive;
mod directive_type;
mod document;
mod error;
mod url_pattern;
mod user_agent;
mod walker;

pub mod fetch;
pub mod rule;

// Re-export core types
pub use block::DirectiveBlock;
pub use crawl_delay::CrawlDelay;
pub use directive::Directive;
pub use directive_type::DirectiveType;
pub use document::Document;
pub use error::{Error, Result};
pub use url_pattern::UrlPattern;
pub use user_agent::UserAgent;
pub use walker::Walker;

// Re-export rule types
pub use rule::{Allow, Disallow, Rule};
