//! Directory conversion driver.
//!
//! Converts every file with a given extension in one directory and writes the
//! results, under the same file names, into an output directory. This bridges the
//! [`Converter`] and file I/O for the CLI; for in-memory use call the converter
//! directly.
//!
//! There is no per-file isolation: the first read, convert or write failure aborts
//! the run. Files already converted stay on disk.

use crate::converter::Converter;
use crate::error::BatchError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default subdirectory of the input directory receiving converted files.
pub const DEFAULT_OUTPUT_DIR: &str = "dokuwiki";
pub const DEFAULT_EXTENSION: &str = "md";

/// Where to read from and write to.
///
/// ```ignore
/// let options = BatchOptions::new("rfcs")
///     .with_output_dir("rfcs/wiki")
///     .with_extension("markdown");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// File extension without the leading dot.
    pub extension: String,
}

impl BatchOptions {
    /// Read `input_dir`, write into its `dokuwiki` subdirectory.
    pub fn new(input_dir: impl AsRef<Path>) -> Self {
        let input_dir = input_dir.as_ref().to_path_buf();
        Self {
            output_dir: input_dir.join(DEFAULT_OUTPUT_DIR),
            input_dir,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_output_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.output_dir = path.as_ref().to_path_buf();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }
}

/// Files written by a completed run, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    pub converted: Vec<PathBuf>,
}

/// Regular files in `dir` with `extension`, sorted by file name.
pub fn discover_sources(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, BatchError> {
    let read_dir_error = |source| BatchError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read `source`, convert it, write the result to `destination`.
pub fn convert_file(
    converter: &Converter,
    source: &Path,
    destination: &Path,
) -> Result<(), BatchError> {
    let input = fs::read_to_string(source).map_err(|source_err| BatchError::Read {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    let output = converter
        .convert(&input)
        .map_err(|source_err| BatchError::Convert {
            path: source.to_path_buf(),
            source: source_err,
        })?;
    fs::write(destination, output).map_err(|source_err| BatchError::Write {
        path: destination.to_path_buf(),
        source: source_err,
    })
}

/// Convert every matching file of `options.input_dir`.
///
/// `on_file` receives each file name once its output is written.
pub fn convert_directory<F>(
    converter: &Converter,
    options: &BatchOptions,
    mut on_file: F,
) -> Result<BatchReport, BatchError>
where
    F: FnMut(&str),
{
    let sources = discover_sources(&options.input_dir, &options.extension)?;
    debug!(
        input_dir = %options.input_dir.display(),
        count = sources.len(),
        "discovered sources"
    );

    fs::create_dir_all(&options.output_dir).map_err(|source| BatchError::CreateDir {
        path: options.output_dir.clone(),
        source,
    })?;

    let mut converted = Vec::with_capacity(sources.len());
    for source in sources {
        let Some(name) = source.file_name() else {
            continue;
        };
        let destination = options.output_dir.join(name);
        convert_file(converter, &source, &destination)?;

        let name = name.to_string_lossy();
        info!(file = %name, output = %destination.display(), "converted");
        on_file(&name);
        converted.push(destination);
    }

    Ok(BatchReport {
        output_dir: options.output_dir.clone(),
        converted,
    })
}
