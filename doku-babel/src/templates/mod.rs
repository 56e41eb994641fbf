//! Ready-to-insert snippets for converted documents.
//!
//! - **Voting snippets** ([`voting`]): a DokuWiki doodle poll titled after the RFC,
//!   inserted at the `VOTING_SNIPPET` placeholder.
//!
//! # Example
//!
//! ```ignore
//! use doku_babel::templates::{TitleMode, VotingTemplate};
//!
//! let template = VotingTemplate::default();
//! let output = template.insert(source, converted, TitleMode::Strict)?;
//! ```

pub mod voting;

pub use voting::{extract_title, first_line, TitleMode, VotingTemplate};
