//! Markdown to DokuWiki conversion
//!
//!     This crate converts Markdown documents, PHP RFC drafts in particular, into DokuWiki
//!     markup. There is no parser and no tree: the text itself is the only data structure,
//!     and conversion is an ordered cascade of rewrites over it.
//!
//!     This is a pure lib, that is, it powers the md2dw cli but is shell agnostic. No code
//!     here should print, read env vars, or assume a working directory. The one exception is
//!     the batch driver, which reads and writes the files it is handed.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # ConvertError, BatchError
//!     ├── rule.rs                 # Rewrite trait, PatternRule, EmphasisRule, LiteralFixup
//!     ├── ruleset.rs              # RuleSet and the built-in variants
//!     ├── rules
//!     │   ├── headings.rs         # one module per Markdown construct
//!     │   ├── ...
//!     │   └── fixups.rs           # literal post-pass replacements
//!     ├── templates
//!     │   └── voting.rs           # RFC title extraction and the voting snippet
//!     ├── converter.rs            # Converter: rule pass + voting snippet
//!     └── batch.rs                # directory driver
//!
//! Core Algorithm
//!
//!     Rules run in sequence and each one sees the previous one's output. Order is therefore
//!     part of the semantics: headings go first so that `#` never reaches another rule, the
//!     specific code forms come before the generic ones, and RFC links before generic links.
//!     A rule that matches nothing is inert; it is never an error.
//!
//!     After the rules come literal fixups: exact substring replacements that patch the
//!     known false positives of the rules: the italic rule eating C pointer stars, and
//!     language hints DokuWiki cannot colour.
//!
//!     Last, for RFC documents, the `VOTING_SNIPPET` token is replaced by a doodle poll
//!     titled after the RFC, whose name comes from the first line `# PHP RFC: <title>`.
//!
//! Rule Sets
//!
//!     Rule tables are values, built once at startup and passed by reference. Two ship
//!     with the crate (see [`ruleset::Variant`]): `rfc`, the default, and `basic`, the
//!     earlier table without footnotes, fixups or voting. Callers can append their own
//!     [`rule::PatternRule`]s and [`rule::LiteralFixup`]s to either.
//!
//!     Lossy, one way: DokuWiki output is never converted back, and running the converter
//!     over its own output only re-fires rules whose Markdown syntax is still present.
//!
//! Library Choices
//!
//!     Patterns use the `regex` crate. It has no lookaround, so the one rule that needs it
//!     (italics must not touch a `/`) is a small scanner, [`rule::EmphasisRule`], behind
//!     the same [`rule::Rewrite`] trait as the regex rules.
//!
pub mod batch;
pub mod converter;
pub mod error;
pub mod rule;
pub mod rules;
pub mod ruleset;
pub mod templates;

pub use batch::{convert_directory, BatchOptions, BatchReport};
pub use converter::Converter;
pub use error::{BatchError, ConvertError};
pub use rule::{EmphasisRule, LiteralFixup, PatternRule, Rewrite};
pub use ruleset::{RuleSet, Variant};
pub use templates::{TitleMode, VotingTemplate};

/// Converts `input` with the default (`rfc`) rule set and voting template.
///
/// Builds the rule set on every call; hold a [`Converter`] when converting many
/// documents.
pub fn convert(input: &str) -> Result<String, ConvertError> {
    Converter::for_variant(Variant::default())?.convert(input)
}
