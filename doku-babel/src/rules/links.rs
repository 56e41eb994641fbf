//! Links
//!
//! Links into the PHP wiki's RFC namespace become internal links keyed by the RFC
//! path (`[[rfc:key|text]]`). Every other link becomes `[[target|text]]`.
//!
//! Targets may hold one level of balanced parentheses (`Foo_(bar)`). Link text that
//! is entirely inline code loses its `<php>` markup once the code rules have run.

use crate::error::ConvertError;
use crate::rule::PatternRule;

pub fn rfc_link() -> Result<PatternRule, ConvertError> {
    PatternRule::new(
        "link-rfc",
        r"\[([^\[\]\n]+)\]\(https?://wiki\.php\.net/rfc/((?:[^()\s]|\([^()\s]*\))+)\)",
        "[[rfc:${2}|${1}]]",
    )
}

pub fn external_link() -> Result<PatternRule, ConvertError> {
    PatternRule::new(
        "link",
        r"\[([^\[\]\n]+)\]\(((?:[^()\s]|\([^()\s]*\))+)\)",
        "[[${2}|${1}]]",
    )
}

pub fn link_rules() -> Result<Vec<PatternRule>, ConvertError> {
    Ok(vec![rfc_link()?, external_link()?])
}

/// `[[target|<php>text</php>]]` to `[[target|text]]`.
///
/// Only whole-text spans inside a converted link are unwrapped; table cells, which
/// share the `|` separator, keep their code markup.
pub fn link_text_code() -> Result<PatternRule, ConvertError> {
    PatternRule::new(
        "link-text-code",
        r"\[\[([^|\[\]\n]+)\|<php>([^<\[\]\n]*)</php>\]\]",
        "[[${1}|${2}]]",
    )
}
