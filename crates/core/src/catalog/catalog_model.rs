//! Catalog domain models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog_constants::EXERCISE_CATALOG;

/// Difficulty tier of a goal, derived by comparing its annual target
/// against the catalog thresholds. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    S,
    M,
    L,
    XL,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::S => "S",
            Tier::M => "M",
            Tier::L => "L",
            Tier::XL => "XL",
        };
        write!(f, "{}", label)
    }
}

/// One row of the static exercise catalog.
///
/// The four thresholds are monthly equivalents in ascending order
/// (`s < m < l < xl`); annual comparisons multiply them by 12.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub exercise: &'static str,
    pub unit: &'static str,
    pub s: f64,
    pub m: f64,
    pub l: f64,
    pub xl: f64,
}

impl CatalogEntry {
    /// Monthly threshold for a tier.
    pub fn monthly_threshold(&self, tier: Tier) -> f64 {
        match tier {
            Tier::S => self.s,
            Tier::M => self.m,
            Tier::L => self.l,
            Tier::XL => self.xl,
        }
    }
}

/// Looks up a catalog entry by its exercise key.
pub fn find_entry(exercise: &str) -> Option<&'static CatalogEntry> {
    EXERCISE_CATALOG.iter().find(|e| e.exercise == exercise)
}
