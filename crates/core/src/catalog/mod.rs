//! Exercise catalog module - the static table of exercises, units, and
//! per-tier monthly thresholds.

mod catalog_constants;
mod catalog_model;

pub use catalog_constants::EXERCISE_CATALOG;
pub use catalog_model::{find_entry, CatalogEntry, Tier};
