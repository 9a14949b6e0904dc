//! robots.txt line walker.
//!
//! Turns raw lines into [`DirectiveBlock`]s in a fixed sequence of stages:
//!
//! 1. strip a leading byte order mark, ` #` comments, and trim
//! 2. drop blank lines
//! 3. split `key: value` on the first colon
//! 4. keep the supported keys only
//! 5. classify each line into a [`Directive`]
//! 6. merge consecutive `User-agent` lines
//! 7. group directives under the preceding `User-agent`
//!
//! The walker never fails. Lines it cannot use are dropped and logged at
//! trace level.

use std::io::{BufRead, BufReader, Read};

use crate::{Directive, DirectiveBlock, DirectiveType, Result};

/// Byte order mark some editors put at the start of the file.
const BOM: char = '\u{feff}';

/// Comment marker. A `#` not preceded by a space is part of the value.
const COMMENT: &str = " #";

/// robots.txt line walker.
pub struct Walker;

impl Walker {
    /// Group the given lines into blocks, in source order.
    pub fn walk<I, S>(lines: I) -> Vec<DirectiveBlock>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let directives = lines
            .into_iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                let line = line.as_ref();
                let line = if idx == 0 {
                    line.strip_prefix(BOM).unwrap_or(line)
                } else {
                    line
                };
                let line = strip_comment(line);
                if line.is_empty() {
                    return None;
                }
                split(line).and_then(|(key, value)| classify(&key, value))
            })
            .fold(Vec::new(), coalesce);

        let blocks = directives
            .into_iter()
            .fold(Assembly::default(), Assembly::push)
            .finish();

        log::debug!("Parsed {} robots.txt blocks", blocks.len());
        blocks
    }

    /// Parse robots.txt content.
    pub fn parse_str(content: &str) -> Vec<DirectiveBlock> {
        Self::walk(content.lines())
    }

    /// Parse robots.txt content from a reader.
    pub fn parse_reader<R: Read>(reader: R) -> Result<Vec<DirectiveBlock>> {
        let lines = BufReader::new(reader)
            .lines()
            .collect::<std::io::Result<Vec<_>>>()?;
        Ok(Self::walk(lines))
    }
}

/// Remove everything from the first ` #` and trim.
fn strip_comment(line: &str) -> &str {
    let line = match line.find(COMMENT) {
        Some(idx) => &line[..idx],
        None => line,
    };
    line.trim()
}

/// Split a line into a lowercase key and a trimmed value.
///
/// Colons after the first one belong to the value.
fn split(line: &str) -> Option<(String, &str)> {
    match line.split_once(':') {
        Some((key, value)) => Some((key.trim().to_lowercase(), value.trim())),
        None => {
            log::trace!("Dropping line without a key: {:?}", line);
            None
        }
    }
}

/// Turn a key/value pair into a directive, dropping unsupported keys.
fn classify(key: &str, value: &str) -> Option<Directive> {
    let Some(directive_type) = DirectiveType::parse(key) else {
        log::trace!("Ignoring unsupported key: {:?}", key);
        return None;
    };

    let directive = Directive::classify(directive_type, value);
    if directive.is_none() {
        log::trace!("Dropping {} with unusable value: {:?}", directive_type, value);
    }
    directive
}

/// Fold step merging a `User-agent` into a directly preceding one.
fn coalesce(mut directives: Vec<Directive>, directive: Directive) -> Vec<Directive> {
    if let Directive::UserAgent(next) = &directive {
        if let Some(Directive::UserAgent(last)) = directives.last_mut() {
            *last = last.merge(next);
            return directives;
        }
    }

    directives.push(directive);
    directives
}

/// Accumulator for block assembly: closed blocks plus the open one, if any.
#[derive(Default)]
struct Assembly {
    blocks: Vec<DirectiveBlock>,
    open: Option<DirectiveBlock>,
}

impl Assembly {
    /// Fold step. A user agent closes the open block and opens a new one;
    /// any other directive extends the open block or is dropped.
    fn push(self, directive: Directive) -> Self {
        let Assembly { mut blocks, open } = self;

        let open = match (open, directive) {
            (open, Directive::UserAgent(user_agent)) => {
                blocks.extend(open);
                Some(DirectiveBlock::new(user_agent))
            }
            (Some(block), Directive::Allow(allow)) => Some(block.with_allow(allow)),
            (Some(block), Directive::Disallow(disallow)) => Some(block.with_disallow(disallow)),
            (Some(block), Directive::CrawlDelay(delay)) => Some(block.with_crawl_delay(delay)),
            (None, directive) => {
                log::trace!("Dropping {:?} outside of a user-agent group", directive);
                None
            }
        };

        Assembly { blocks, open }
    }

    /// Close the open block and return all blocks.
    fn finish(self) -> Vec<DirectiveBlock> {
        let mut blocks = self.blocks;
        blocks.extend(self.open);
        blocks
    }
}
