//! Error types surfaced by the catalog and the loader.
//!
//! The library reports typed errors so callers can tell a bad input line from
//! a missing file or a lookup on a category that was never added. Binaries
//! wrap these in `anyhow` and print the whole chain.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by catalog mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The category key (already uppercased) is not present in the catalog.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

/// A single record that could not be turned into a course.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing ':' between category and course fields")]
    MissingSeparator,
    #[error("expected name:date:level after the category, found {0} field(s)")]
    FieldCount(usize),
    #[error("invalid date '{text}': {reason}")]
    InvalidDate { text: String, reason: &'static str },
    #[error("unknown level '{0}'")]
    UnknownLevel(String),
    #[error("record is not valid UTF-8 (valid up to byte {valid_up_to})")]
    Encoding { valid_up_to: usize },
}

/// Failures while bulk loading a catalog from a text resource.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid record on line {line}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
}
