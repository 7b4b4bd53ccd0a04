//! Course records and their difficulty level.

use crate::error::ParseError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Display pattern for publication dates (day/month/year).
pub const DATE_DISPLAY_FORMAT: &str = "%d/%m/%Y";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "BEGINNER",
            Level::Intermediate => "INTERMEDIATE",
            Level::Advanced => "ADVANCED",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive, whitespace-trimmed. The Spanish spellings used by the
/// bundled data file are accepted alongside the English names.
impl FromStr for Level {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "beginner" | "principiante" => Ok(Level::Beginner),
            "intermediate" | "intermedio" => Ok(Level::Intermediate),
            "advanced" | "avanzado" => Ok(Level::Advanced),
            _ => Err(ParseError::UnknownLevel(value.trim().to_string())),
        }
    }
}

impl TryFrom<&str> for Level {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// An online course. Immutable once built; the catalog owns it after `add`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Course {
    name: String,
    date: NaiveDate,
    level: Level,
}

impl Course {
    pub fn new(name: impl Into<String>, date: NaiveDate, level: Level) -> Self {
        Self {
            name: name.into(),
            date,
            level,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Publication date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

/// `<name> - <dd/mm/yyyy> - <LEVEL>`
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.name,
            self.date.format(DATE_DISPLAY_FORMAT),
            self.level
        )
    }
}
