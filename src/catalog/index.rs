//! Category-indexed view of the course catalog.
//!
//! Keys are always stored uppercase in a BTreeMap so iteration is alphabetical
//! and reports come out deterministic. Courses keep their insertion order
//! within a category. A category that has been emptied by deletions keeps its
//! key.

use crate::catalog::{Course, Level};
use crate::error::CatalogError;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// First line of the text report.
pub const REPORT_HEADER: &str = "Online courses offered by the platform";

#[derive(Debug, Default, Clone)]
pub struct Catalog {
    by_category: BTreeMap<String, Vec<Course>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `course` to `category`, creating the category when absent.
    pub fn add(&mut self, category: &str, course: Course) {
        self.by_category
            .entry(normalize_category(category))
            .or_default()
            .push(course);
    }

    /// Number of courses stored under `category`, or `-1` when the category
    /// was never added.
    ///
    /// Use [`Catalog::len_of`] when an `Option` reads better at the call site.
    pub fn count_in(&self, category: &str) -> i64 {
        match self.len_of(category) {
            Some(len) => len as i64,
            None => -1,
        }
    }

    pub fn len_of(&self, category: &str) -> Option<usize> {
        self.courses_in(category).map(<[Course]>::len)
    }

    pub fn courses_in(&self, category: &str) -> Option<&[Course]> {
        self.by_category
            .get(&normalize_category(category))
            .map(Vec::as_slice)
    }

    /// Fresh copy of the category keys in ascending order.
    pub fn categories(&self) -> BTreeSet<String> {
        self.by_category.keys().cloned().collect()
    }

    /// Iterates `(category, courses)` in ascending category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Course])> {
        self.by_category
            .iter()
            .map(|(category, courses)| (category.as_str(), courses.as_slice()))
    }

    /// Total number of courses across every category.
    pub fn total(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Remove every course in `category` whose level equals `level`.
    ///
    /// Returns the removed names sorted ascending (not in insertion order).
    /// Fails with [`CatalogError::UnknownCategory`] when the category does not
    /// exist; the catalog is left untouched in that case.
    pub fn remove_by_level(
        &mut self,
        category: &str,
        level: Level,
    ) -> Result<BTreeSet<String>, CatalogError> {
        let key = normalize_category(category);
        let courses = self
            .by_category
            .get_mut(&key)
            .ok_or(CatalogError::UnknownCategory(key))?;

        let mut removed = BTreeSet::new();
        courses.retain(|course| {
            if course.level() == level {
                removed.insert(course.name().to_string());
                false
            } else {
                true
            }
        });
        Ok(removed)
    }

    /// The earliest published course across the catalog.
    ///
    /// Walks categories alphabetically and courses in insertion order; only a
    /// strictly earlier date replaces the current pick, so ties go to the
    /// first course found.
    pub fn oldest_course(&self) -> Option<&Course> {
        let mut oldest: Option<&Course> = None;
        for course in self.by_category.values().flatten() {
            if oldest.is_none_or(|current| course.date() < current.date()) {
                oldest = Some(course);
            }
        }
        oldest
    }

    /// Name of [`Catalog::oldest_course`], or an empty string for an empty
    /// catalog.
    pub fn oldest(&self) -> String {
        self.oldest_course()
            .map(|course| course.name().to_string())
            .unwrap_or_default()
    }

    /// Text report: header, blank line, then `<CATEGORY> (<count>)` followed
    /// by one line per course for every category.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(64 * (self.total() + self.by_category.len() + 1));
        out.push_str(REPORT_HEADER);
        out.push_str("\n\n");
        for (category, courses) in self.iter() {
            out.push_str(&format!("{category} ({})\n", courses.len()));
            for course in courses {
                out.push_str(&course.to_string());
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn normalize_category(category: &str) -> String {
    category.to_uppercase()
}
