//! Rule trait definition
//!
//! This module defines the [`Rewrite`] trait every conversion rule implements, together
//! with the three building blocks the rule tables are made of:
//!
//! - [`PatternRule`]: a regular expression and a replacement template (`${1}` style)
//! - [`EmphasisRule`]: a delimiter pair with guard characters on either side
//! - [`LiteralFixup`]: an exact substring replacement
//!
//! Rules are applied in sequence, each one seeing the output of the previous one.

use crate::error::ConvertError;
use regex::Regex;
use std::borrow::Cow;

/// Trait for text rewriting rules
///
/// Implementors return [`Cow::Borrowed`] when nothing matched, so callers can tell
/// inert rules apart without comparing strings.
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Rewrite for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
///         Cow::Owned(text.to_uppercase())
///     }
/// }
/// ```
pub trait Rewrite: Send + Sync {
    /// The name of this rule (e.g., "heading-1", "italic")
    fn name(&self) -> &str;

    /// Optional human readable form of what the rule matches
    fn description(&self) -> String {
        String::new()
    }

    /// Rewrite `text`, returning it borrowed when the rule does not apply
    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str>;
}

/// A regular expression with a replacement template.
#[derive(Debug, Clone)]
pub struct PatternRule {
    name: String,
    regex: Regex,
    replacement: String,
}

impl PatternRule {
    /// Compile `pattern`. The replacement may reference groups as `${1}`.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self, ConvertError> {
        let name = name.into();
        let regex = Regex::new(pattern).map_err(|source| ConvertError::InvalidPattern {
            rule: name.clone(),
            source,
        })?;
        Ok(Self {
            name,
            regex,
            replacement: replacement.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl Rewrite for PatternRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        format!("/{}/ -> {}", self.pattern(), self.replacement)
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replace_all(text, self.replacement.as_str())
    }
}

/// Single-delimiter emphasis (`*text*`) rewritten to a wrapper (`//text//`).
///
/// Matching follows a non-greedy `\*(.+?)\*`: the enclosed span holds at least one
/// character and never crosses a line break. With a guard set, an opening delimiter
/// preceded by the guard and a closing delimiter followed by it are both rejected,
/// which keeps `/*comment*/` intact.
#[derive(Debug, Clone)]
pub struct EmphasisRule {
    name: String,
    delimiter: char,
    wrapper: String,
    guard: Option<char>,
}

impl EmphasisRule {
    pub fn new(name: impl Into<String>, delimiter: char, wrapper: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            delimiter,
            wrapper: wrapper.into(),
            guard: None,
        }
    }

    /// Reject delimiters touching `guard` on their outer side.
    pub fn with_guard(mut self, guard: char) -> Self {
        self.guard = Some(guard);
        self
    }

    fn guarded_before(&self, text: &str, at: usize) -> bool {
        self.guard.is_some() && text[..at].chars().next_back() == self.guard
    }

    fn guarded_after(&self, text: &str, at: usize) -> bool {
        self.guard.is_some() && text[at..].chars().next() == self.guard
    }

    /// Find the closing delimiter for a span whose content starts at `start`.
    fn find_close(&self, text: &str, start: usize) -> Option<usize> {
        let line_end = text[start..].find('\n').map_or(text.len(), |i| start + i);
        let line = &text[start..line_end];
        let width = self.delimiter.len_utf8();

        let mut from = line.chars().next()?.len_utf8();
        while let Some(i) = line[from..].find(self.delimiter) {
            let close = start + from + i;
            if !self.guarded_after(text, close + width) {
                return Some(close);
            }
            from += i + width;
        }
        None
    }
}

impl Rewrite for EmphasisRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        match self.guard {
            Some(guard) => format!(
                "{d}text{d} -> {w}text{w} (not touching '{guard}')",
                d = self.delimiter,
                w = self.wrapper
            ),
            None => format!(
                "{d}text{d} -> {w}text{w}",
                d = self.delimiter,
                w = self.wrapper
            ),
        }
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let width = self.delimiter.len_utf8();
        let mut output = String::new();
        let mut copied = 0;
        let mut pos = 0;

        while let Some(offset) = text[pos..].find(self.delimiter) {
            let open = pos + offset;
            let content = open + width;
            if self.guarded_before(text, open) {
                pos = content;
                continue;
            }
            match self.find_close(text, content) {
                Some(close) => {
                    output.push_str(&text[copied..open]);
                    output.push_str(&self.wrapper);
                    output.push_str(&text[content..close]);
                    output.push_str(&self.wrapper);
                    copied = close + width;
                    pos = copied;
                }
                None => pos = content,
            }
        }

        if copied == 0 {
            return Cow::Borrowed(text);
        }
        output.push_str(&text[copied..]);
        Cow::Owned(output)
    }
}

/// Exact substring replacement applied after the pattern pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralFixup {
    from: String,
    to: String,
}

impl LiteralFixup {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }
}

impl Rewrite for LiteralFixup {
    fn name(&self) -> &str {
        &self.from
    }

    fn description(&self) -> String {
        format!("{:?} -> {:?}", self.from, self.to)
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.from.is_empty() || !text.contains(self.from.as_str()) {
            return Cow::Borrowed(text);
        }
        Cow::Owned(text.replace(self.from.as_str(), &self.to))
    }
}
