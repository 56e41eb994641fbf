//! Markdown to DokuWiki conversion
//!
//! A [`Converter`] owns a [`RuleSet`] and an optional [`VotingTemplate`]. Conversion
//! is a pure function of the input text: the rule pass (rules, then literal fixups)
//! runs first, the voting snippet is inserted last.

use crate::error::ConvertError;
use crate::ruleset::{RuleSet, Variant};
use crate::templates::{TitleMode, VotingTemplate};

#[derive(Debug)]
pub struct Converter {
    rules: RuleSet,
    voting: Option<VotingTemplate>,
    title_mode: TitleMode,
}

impl Converter {
    /// A converter applying `rules` only, with no voting snippet.
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            voting: None,
            title_mode: TitleMode::default(),
        }
    }

    /// The built-in table for `variant`, with the default voting template when the
    /// variant inserts one.
    pub fn for_variant(variant: Variant) -> Result<Self, ConvertError> {
        let converter = Self::new(RuleSet::for_variant(variant)?);
        if variant.inserts_voting() {
            Ok(converter.with_voting(VotingTemplate::default()))
        } else {
            Ok(converter)
        }
    }

    pub fn with_voting(mut self, voting: VotingTemplate) -> Self {
        self.voting = Some(voting);
        self
    }

    pub fn without_voting(mut self) -> Self {
        self.voting = None;
        self
    }

    pub fn with_title_mode(mut self, mode: TitleMode) -> Self {
        self.title_mode = mode;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn voting(&self) -> Option<&VotingTemplate> {
        self.voting.as_ref()
    }

    pub fn title_mode(&self) -> TitleMode {
        self.title_mode
    }

    /// Convert one Markdown document.
    ///
    /// # Errors
    ///
    /// Only [`ConvertError::MissingRfcTitle`], when the document holds the snippet
    /// token, its first line is not an RFC title, and the title mode is strict.
    pub fn convert(&self, input: &str) -> Result<String, ConvertError> {
        let converted = self.rules.apply(input);
        match &self.voting {
            Some(voting) => voting.insert(input, converted, self.title_mode),
            None => Ok(converted),
        }
    }
}
