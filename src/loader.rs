//! Bulk loader for colon-delimited course files.
//!
//! Each non-blank line is one record, `category:name:date:level`. The
//! category is everything before the first ':'; the remainder must split into
//! exactly name, date (`day/month/year`) and level. Every field is trimmed.
//! A record that fails to parse either aborts the load or is skipped with a
//! warning, depending on [`ParsePolicy`].

use crate::catalog::{Catalog, Course, Level};
use crate::error::{LoadError, ParseError};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

const FIELD_SEPARATOR: char = ':';
const DATE_SEPARATOR: char = '/';

/// What to do with a record that cannot be parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Stop at the first bad record and return its line number.
    #[default]
    Abort,
    /// Log the bad record and keep going.
    Skip,
}

/// Counts reported after a load finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// Controls how course files are read into a catalog.
#[derive(Clone, Copy, Debug, Default)]
pub struct Loader {
    pub policy: ParsePolicy,
}

impl Loader {
    pub fn new(policy: ParsePolicy) -> Self {
        Self { policy }
    }

    /// Load a fresh catalog from `path`.
    ///
    /// The file handle is dropped before this returns, whether the load
    /// succeeds or not.
    pub fn load_path(&self, path: &Path) -> Result<Catalog, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut catalog = Catalog::new();
        let summary = self.load_into(&mut catalog, BufReader::new(file), path)?;
        debug!(
            path = %path.display(),
            loaded = summary.loaded,
            skipped = summary.skipped,
            "loaded course catalog"
        );
        Ok(catalog)
    }

    /// Read every record from `reader` into `catalog`.
    ///
    /// Lines are decoded one at a time; a line that is not UTF-8 is a
    /// [`ParseError::Encoding`] handled like any other bad record.
    /// `origin` only labels I/O errors. Under [`ParsePolicy::Abort`] the
    /// catalog may already hold the records before the bad line; callers that
    /// need all-or-nothing should load into a scratch catalog, as
    /// [`Loader::load_path`] does.
    pub fn load_into<R: BufRead>(
        &self,
        catalog: &mut Catalog,
        reader: R,
        origin: &Path,
    ) -> Result<LoadSummary, LoadError> {
        let mut summary = LoadSummary::default();
        for (idx, raw) in reader.split(b'\n').enumerate() {
            let raw = raw.map_err(|source| LoadError::Io {
                path: origin.to_path_buf(),
                source,
            })?;
            // Decoded per line so a badly encoded record goes through the policy.
            let parsed = match String::from_utf8(raw) {
                Ok(text) => {
                    let line = text.trim();
                    if line.is_empty() {
                        continue;
                    }
                    parse_line(line)
                }
                Err(err) => Err(ParseError::Encoding {
                    valid_up_to: err.utf8_error().valid_up_to(),
                }),
            };
            match parsed {
                Ok((category, course)) => {
                    catalog.add(&category, course);
                    summary.loaded += 1;
                }
                Err(source) => match self.policy {
                    ParsePolicy::Abort => {
                        return Err(LoadError::Parse {
                            line: idx + 1,
                            source,
                        });
                    }
                    ParsePolicy::Skip => {
                        warn!(line = idx + 1, error = %source, "skipping malformed course record");
                        summary.skipped += 1;
                    }
                },
            }
        }
        Ok(summary)
    }
}

/// Load `path` with the default (abort on first bad record) policy.
pub fn load_from_path(path: &Path) -> Result<Catalog, LoadError> {
    Loader::default().load_path(path)
}

/// Split one record into its category and course.
///
/// Ex. `"BASES DE DATOS: sql essential training: 3/12/2019 : principiante "`.
pub fn parse_line(line: &str) -> Result<(String, Course), ParseError> {
    let (category, rest) = line
        .split_once(FIELD_SEPARATOR)
        .ok_or(ParseError::MissingSeparator)?;

    let fields: Vec<&str> = rest.split(FIELD_SEPARATOR).map(str::trim).collect();
    let [name, date_text, level_text] = fields.as_slice() else {
        return Err(ParseError::FieldCount(fields.len()));
    };

    let date = parse_date(date_text)?;
    let level: Level = level_text.parse()?;
    Ok((category.trim().to_string(), Course::new(*name, date, level)))
}

/// Parse `day/month/year` into a calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate, ParseError> {
    let text = text.trim();
    let invalid = |reason| ParseError::InvalidDate {
        text: text.to_string(),
        reason,
    };

    let parts: Vec<&str> = text.split(DATE_SEPARATOR).map(str::trim).collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(invalid("expected day/month/year"));
    };
    let day: u32 = day.parse().map_err(|_| invalid("day is not a number"))?;
    let month: u32 = month.parse().map_err(|_| invalid("month is not a number"))?;
    let year: i32 = year.parse().map_err(|_| invalid("year is not a number"))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid("not a calendar date"))
}
