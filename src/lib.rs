pub mod catalog;
pub mod error;
pub mod loader;
pub mod report;

pub use catalog::{Catalog, Course, DEFAULT_INPUT_PATH, Level};
pub use error::{CatalogError, LoadError, ParseError};
pub use loader::{LoadSummary, Loader, ParsePolicy, load_from_path, parse_date, parse_line};

use anyhow::{Result, bail};
use std::{
    env,
    path::{Path, PathBuf},
};

/// Env var that overrides the input resource when no path is given on the
/// command line.
pub const ENV_INPUT_PATH: &str = "COURSE_CATALOG_INPUT";

const BUNDLED_ROOT: &str = env!("CARGO_MANIFEST_DIR");

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// Pick the course file to load.
///
/// Order: explicit path, `COURSE_CATALOG_INPUT`, `data/courses.txt` under
/// `cwd`, then the copy bundled with the crate. An explicit or env path is
/// returned as-is so a missing file surfaces as a load error naming it.
pub fn resolve_input_path(explicit: Option<PathBuf>, cwd: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    if let Some(raw) = env_non_empty(ENV_INPUT_PATH) {
        return Ok(PathBuf::from(raw));
    }

    let local = cwd.join(DEFAULT_INPUT_PATH);
    if local.is_file() {
        return Ok(local);
    }

    let bundled = Path::new(BUNDLED_ROOT).join(DEFAULT_INPUT_PATH);
    if bundled.is_file() {
        return Ok(bundled);
    }

    bail!(
        "Unable to locate {DEFAULT_INPUT_PATH} under {}. Pass --input or set {ENV_INPUT_PATH}.",
        cwd.display()
    )
}

/// Parse a `CATEGORY:LEVEL` removal request, e.g. `bases de datos:advanced`.
pub fn parse_removal(value: &str) -> Result<(String, Level)> {
    let Some((category, level)) = value.rsplit_once(':') else {
        bail!("expected CATEGORY:LEVEL, got '{value}'");
    };
    let category = category.trim();
    if category.is_empty() {
        bail!("category must not be empty in '{value}'");
    }
    Ok((category.to_string(), level.parse()?))
}
