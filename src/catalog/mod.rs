//! Course catalog wiring.
//!
//! `model` holds the immutable course record and its level tag; `index` holds
//! the category-keyed `Catalog` that owns those records. Loading from disk
//! lives in `crate::loader`.

pub mod index;
pub mod model;

pub use index::{Catalog, REPORT_HEADER};
pub use model::{Course, DATE_DISPLAY_FORMAT, Level};

/// Default relative path to the bundled course list.
pub const DEFAULT_INPUT_PATH: &str = "data/courses.txt";
