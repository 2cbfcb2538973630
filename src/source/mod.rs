//! Item input sources.
//!
//! This module provides input sources for feed items:
//! - File loading for a path on disk
//! - Stdin for piped input
//! - Unified InputSource enum for both
//!
//! Both accept either a JSON array of items or JSONL (one item per line).

use crate::model::error::InputError;
use crate::model::ContentItem;
use std::path::PathBuf;
use tracing::{debug, warn};

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Items read from a source, plus the count of JSONL lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedItems {
    /// Items in input order.
    pub items: Vec<ContentItem>,
    /// JSONL lines that were not valid items.
    pub skipped: usize,
}

/// Unified input source for feed items.
#[derive(Debug)]
pub enum InputSource {
    /// Items file given on the command line.
    File(FileSource),
    /// Piped standard input.
    Stdin(StdinSource<std::io::Stdin>),
}

impl InputSource {
    /// Read and parse every item from the source.
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O errors or a malformed JSON array.
    pub fn read_items(self) -> Result<ParsedItems, InputError> {
        let text = match self {
            InputSource::File(f) => {
                debug!(path = %f.path().display(), "Reading items from file");
                f.read_to_string()?
            }
            InputSource::Stdin(s) => s.read_to_string()?,
        };
        parse_items(&text)
    }
}

/// Detect and create appropriate input source.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::NoInput` if no file is given and stdin is a terminal.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}

/// Parse a JSON array or JSONL document into items.
///
/// Input whose first non-whitespace character is `[` is parsed as one JSON
/// array; any error there is fatal. Otherwise each non-blank line is one item,
/// and lines that fail to parse are skipped with a warning.
///
/// # Examples
///
/// ```
/// # use newsgrid::source::parse_items;
/// let parsed = parse_items("{\"key\":\"a\"}\nnot json\n{\"key\":\"b\"}\n").unwrap();
/// assert_eq!(parsed.items.len(), 2);
/// assert_eq!(parsed.skipped, 1);
/// ```
pub fn parse_items(text: &str) -> Result<ParsedItems, InputError> {
    if text.trim_start().starts_with('[') {
        let items: Vec<ContentItem> =
            serde_json::from_str(text).map_err(|e| InputError::Malformed {
                line: e.line(),
                reason: e.to_string(),
            })?;
        return Ok(ParsedItems { items, skipped: 0 });
    }

    let mut parsed = ParsedItems::default();
    for (line_number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<ContentItem>(line) {
            Ok(item) => parsed.items.push(item),
            Err(e) => {
                warn!(line = line_number + 1, error = %e, "Skipping malformed item");
                parsed.skipped += 1;
            }
        }
    }
    Ok(parsed)
}
