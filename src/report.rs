//! Serializable views of a catalog for machine-readable output.

use crate::catalog::{Catalog, Course};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Serialize)]
pub struct CategorySnapshot<'a> {
    pub name: &'a str,
    pub count: usize,
    pub courses: &'a [Course],
}

/// Point-in-time view of a catalog, categories in ascending order.
#[derive(Debug, Serialize)]
pub struct CatalogSnapshot<'a> {
    pub categories: Vec<CategorySnapshot<'a>>,
    pub total: usize,
    /// `None` when the catalog holds no courses.
    pub oldest: Option<&'a str>,
}

pub fn snapshot(catalog: &Catalog) -> CatalogSnapshot<'_> {
    CatalogSnapshot {
        categories: catalog
            .iter()
            .map(|(name, courses)| CategorySnapshot {
                name,
                count: courses.len(),
                courses,
            })
            .collect(),
        total: catalog.total(),
        oldest: catalog.oldest_course().map(Course::name),
    }
}

/// Pretty-printed JSON of [`snapshot`].
pub fn to_json(catalog: &Catalog) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&snapshot(catalog))
}

/// Renders removed course names as `[a, b, c]`.
pub fn format_removed(names: &BTreeSet<String>) -> String {
    let joined = names
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}
