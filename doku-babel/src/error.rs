//! Error types for conversion operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building rule sets or converting a document.
///
/// A rule that does not match is never an error: it simply leaves the text
/// untouched. These variants cover configuration problems and violated
/// document conventions only.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A rule pattern failed to compile
    #[error("Invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },
    /// Rule set variant not known
    #[error("Rule set variant '{0}' not found")]
    UnknownVariant(String),
    /// Title mode not known
    #[error("Title mode '{0}' not found")]
    UnknownTitleMode(String),
    /// The document asks for a voting snippet but has no RFC title line
    #[error("First line '{first_line}' does not start with '# PHP RFC: '")]
    MissingRfcTitle { first_line: String },
}

/// Errors raised by the directory driver. The first failure aborts the run.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Error listing directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error creating directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error reading file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error writing file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error converting '{}': {source}", path.display())]
    Convert {
        path: PathBuf,
        #[source]
        source: ConvertError,
    },
}
