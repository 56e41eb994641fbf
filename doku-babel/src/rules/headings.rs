//! Heading rules
//!
//! DokuWiki inverts Markdown's heading scale: a level-1 heading gets the widest
//! wrapper (six `=` on each side) and a level-6 heading the narrowest (one `=`).

use crate::error::ConvertError;
use crate::rule::{PatternRule, Rewrite};
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Deepest Markdown heading level.
pub const MAX_LEVEL: usize = 6;

/// Number of `=` on each side of a converted heading of `level`.
pub fn wrapper_width(level: usize) -> usize {
    MAX_LEVEL + 1 - level
}

/// One rule per level, from level 6 down to level 1.
///
/// Marker counts are exact, so a line only ever matches the rule of its own level
/// once the longer markers have been converted.
pub fn heading_rules() -> Result<Vec<PatternRule>, ConvertError> {
    (1..=MAX_LEVEL)
        .rev()
        .map(|level| {
            let bar = "=".repeat(wrapper_width(level));
            PatternRule::new(
                format!("heading-{level}"),
                &format!("(?mR)^#{{{level}}} ?(.+)$"),
                format!("{bar} ${{1}} {bar}"),
            )
        })
        .collect()
}

/// Strips inline code markup from converted title lines.
///
/// DokuWiki titles cannot hold `<php>` spans, so `== The <php>match</php> syntax ==`
/// becomes `== The match syntax ==`. Every complete span on the line is unwrapped.
#[derive(Debug, Clone)]
pub struct TitleCodeCleanup {
    title: Regex,
    span: Regex,
}

impl TitleCodeCleanup {
    pub fn new() -> Result<Self, ConvertError> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|source| ConvertError::InvalidPattern {
                rule: "heading-code-cleanup".to_string(),
                source,
            })
        };
        Ok(Self {
            title: compile(r"(?mR)^(=+ )(.+)( =+)$")?,
            span: compile(r"<php>(.+?)</php>")?,
        })
    }
}

impl Rewrite for TitleCodeCleanup {
    fn name(&self) -> &str {
        "heading-code-cleanup"
    }

    fn description(&self) -> String {
        format!("/{}/ -> unwrap /{}/", self.title.as_str(), self.span.as_str())
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if !self.span.is_match(text) {
            return Cow::Borrowed(text);
        }
        self.title.replace_all(text, |caps: &Captures| {
            format!(
                "{}{}{}",
                &caps[1],
                self.span.replace_all(&caps[2], "${1}"),
                &caps[3]
            )
        })
    }
}
