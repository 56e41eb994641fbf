//! Ordered rule tables
//!
//! A [`RuleSet`] is built once at startup and passed by reference to every
//! conversion. It holds the pattern rules, applied in order with each rule seeing
//! the previous rule's output, followed by the literal fixups.
//!
//! Two complete tables ship with the crate, selectable by [`Variant`]:
//!
//! - `rfc`: headings, italic (guarded), footnotes, code, lists, links, code-free link
//!   text, title clean-up, then the fixups in [`crate::rules::fixups`]
//! - `basic`: headings, code, lists, links, italic (unguarded); no fixups

use crate::error::ConvertError;
use crate::rule::{LiteralFixup, Rewrite};
use crate::rules::{code, emphasis, fixups, footnotes, headings, links, lists};
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Names of the built-in rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// PHP RFC documents: footnotes, code hint clean-up, voting snippet
    #[default]
    Rfc,
    /// The original table without footnotes or fixups
    Basic,
}

impl Variant {
    pub const ALL: &'static [Variant] = &[Variant::Rfc, Variant::Basic];

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Rfc => "rfc",
            Variant::Basic => "basic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Variant::Rfc => "PHP RFC documents with footnotes, fixups and a voting snippet",
            Variant::Basic => "Headings, code, lists, links and italics only",
        }
    }

    /// Whether documents converted with this table get a voting snippet.
    pub fn inserts_voting(&self) -> bool {
        matches!(self, Variant::Rfc)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .iter()
            .copied()
            .find(|variant| variant.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConvertError::UnknownVariant(s.to_string()))
    }
}

/// Ordered pattern rules plus the literal fixups that follow them.
///
/// # Examples
///
/// ```ignore
/// let mut rules = RuleSet::new();
/// rules.push(PatternRule::new("bold", r"\*\*(.+?)\*\*", "**${1}**")?);
/// rules.push_fixup(LiteralFixup::new("<code >", "<code>"));
///
/// let output = rules.apply("**bold**");
/// ```
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn Rewrite>>,
    fixups: Vec<LiteralFixup>,
}

impl RuleSet {
    /// Create a new empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. It runs after every rule already present.
    pub fn push<R: Rewrite + 'static>(&mut self, rule: R) {
        self.rules.push(Box::new(rule));
    }

    pub fn extend<R, I>(&mut self, rules: I)
    where
        R: Rewrite + 'static,
        I: IntoIterator<Item = R>,
    {
        for rule in rules {
            self.push(rule);
        }
    }

    /// Append a literal fixup. Fixups run after all rules.
    pub fn push_fixup(&mut self, fixup: LiteralFixup) {
        self.fixups.push(fixup);
    }

    pub fn rules(&self) -> impl Iterator<Item = &(dyn Rewrite + 'static)> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    pub fn fixups(&self) -> &[LiteralFixup] {
        &self.fixups
    }

    /// Rule names in application order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules().map(|rule| rule.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len() + self.fixups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.fixups.is_empty()
    }

    /// Run every rule, then every fixup, over `input`.
    pub fn apply(&self, input: &str) -> String {
        let mut text = input.to_string();
        for rule in self.rules() {
            text = run(rule, text);
        }
        for fixup in &self.fixups {
            text = run(fixup, text);
        }
        text
    }

    /// Build the built-in table for `variant`.
    pub fn for_variant(variant: Variant) -> Result<Self, ConvertError> {
        match variant {
            Variant::Rfc => Self::rfc(),
            Variant::Basic => Self::basic(),
        }
    }

    pub fn rfc() -> Result<Self, ConvertError> {
        let mut set = Self::new();
        set.extend(headings::heading_rules()?);
        set.push(emphasis::italic());
        set.push(footnotes::footnote_rule()?);
        set.extend(code::code_rules()?);
        set.push(lists::list_item_rule()?);
        set.extend(links::link_rules()?);
        set.push(links::link_text_code()?);
        set.push(headings::TitleCodeCleanup::new()?);
        for fixup in fixups::fixups() {
            set.push_fixup(fixup);
        }
        Ok(set)
    }

    pub fn basic() -> Result<Self, ConvertError> {
        let mut set = Self::new();
        set.extend(headings::heading_rules()?);
        set.push(code::php_block()?);
        set.push(code::double_backtick()?);
        set.push(code::single_backtick()?);
        set.push(lists::list_item_rule()?);
        set.extend(links::link_rules()?);
        set.push(emphasis::italic_unguarded());
        Ok(set)
    }
}

fn run(rule: &dyn Rewrite, text: String) -> String {
    let changed = match rule.rewrite(&text) {
        Cow::Owned(changed) => Some(changed),
        Cow::Borrowed(_) => None,
    };
    match changed {
        Some(changed) => {
            debug!(rule = rule.name(), "rule rewrote document");
            changed
        }
        None => text,
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rule_names())
            .field("fixups", &self.fixups)
            .finish()
    }
}
