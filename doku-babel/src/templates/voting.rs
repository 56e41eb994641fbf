//! Voting snippet for PHP RFC documents.
//!
//! RFC drafts carry a placeholder token (`VOTING_SNIPPET` by default) where the vote
//! belongs. The snippet is a DokuWiki doodle poll whose title quotes the RFC name,
//! taken from the document's first line (`# PHP RFC: <title>`).

use crate::error::ConvertError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

pub const RFC_TITLE_PREFIX: &str = "# PHP RFC: ";
pub const DEFAULT_SNIPPET_TOKEN: &str = "VOTING_SNIPPET";
pub const DEFAULT_TITLE_TOKEN: &str = "{RFC_TITLE}";
pub const DEFAULT_TEMPLATE: &str = "<doodle title=\"Accept the {RFC_TITLE} RFC?\" auth=\"registered\" voteType=\"single\" closed=\"true\">
   * Yes
   * No
</doodle>";

/// What to do when the first line is not an RFC title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleMode {
    /// Fail the conversion
    #[default]
    Strict,
    /// Cut the prefix length off the first line whatever it holds
    Lenient,
}

impl TitleMode {
    pub fn name(&self) -> &'static str {
        match self {
            TitleMode::Strict => "strict",
            TitleMode::Lenient => "lenient",
        }
    }
}

impl fmt::Display for TitleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TitleMode {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(TitleMode::Strict),
            "lenient" => Ok(TitleMode::Lenient),
            _ => Err(ConvertError::UnknownTitleMode(s.to_string())),
        }
    }
}

/// First line of `document`, without its line terminator.
pub fn first_line(document: &str) -> &str {
    let line = document.split('\n').next().unwrap_or_default();
    line.strip_suffix('\r').unwrap_or(line)
}

/// The RFC title from the first line of `document`.
pub fn extract_title(document: &str, mode: TitleMode) -> Result<&str, ConvertError> {
    let line = first_line(document);
    if let Some(title) = line.strip_prefix(RFC_TITLE_PREFIX) {
        return Ok(title);
    }
    match mode {
        TitleMode::Strict => Err(ConvertError::MissingRfcTitle {
            first_line: line.to_string(),
        }),
        TitleMode::Lenient => {
            let skip = RFC_TITLE_PREFIX.chars().count();
            let title = line
                .char_indices()
                .nth(skip)
                .map_or("", |(offset, _)| &line[offset..]);
            warn!(first_line = line, title, "first line is not an RFC title");
            Ok(title)
        }
    }
}

/// A template with a title token, inserted wherever the snippet token appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VotingTemplate {
    template: String,
    title_token: String,
    snippet_token: String,
}

impl VotingTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            title_token: DEFAULT_TITLE_TOKEN.to_string(),
            snippet_token: DEFAULT_SNIPPET_TOKEN.to_string(),
        }
    }

    pub fn with_title_token(mut self, token: impl Into<String>) -> Self {
        self.title_token = token.into();
        self
    }

    pub fn with_snippet_token(mut self, token: impl Into<String>) -> Self {
        self.snippet_token = token.into();
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn title_token(&self) -> &str {
        &self.title_token
    }

    pub fn snippet_token(&self) -> &str {
        &self.snippet_token
    }

    /// The template with every title token replaced by `title`.
    pub fn render(&self, title: &str) -> String {
        if self.title_token.is_empty() {
            return self.template.clone();
        }
        self.template.replace(&self.title_token, title)
    }

    /// Replace the snippet token in `converted` with the snippet for `source`'s title.
    ///
    /// The title comes from the unconverted `source`, whose first line still reads
    /// `# PHP RFC: ...`. Without a snippet token nothing is checked or changed.
    pub fn insert(
        &self,
        source: &str,
        converted: String,
        mode: TitleMode,
    ) -> Result<String, ConvertError> {
        if self.snippet_token.is_empty() || !converted.contains(&self.snippet_token) {
            return Ok(converted);
        }
        let title = extract_title(source, mode)?;
        Ok(converted.replace(&self.snippet_token, &self.render(title)))
    }
}

impl Default for VotingTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}
