//! Pacing and tier arithmetic: the small pure helpers every progress view
//! shares.

use chrono::{Datelike, NaiveDate};

use super::progress_model::Period;
use crate::catalog::{CatalogEntry, Tier};
use crate::constants::{DAYS_PER_YEAR, MONTHS_PER_YEAR};

/// Number of days in a calendar month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Fraction of the period elapsed at `now`, in `[0, 1]` (the year variant
/// can reach 366/365 on a leap year's last day - the denominator is a
/// fixed 365 on purpose).
pub fn pacer(period: Period, now: NaiveDate) -> f64 {
    match period {
        Period::Month => now.day() as f64 / days_in_month(now.year(), now.month()) as f64,
        Period::Year => now.ordinal() as f64 / DAYS_PER_YEAR,
    }
}

/// The target an annual goal implies for a period.
pub fn period_target(annual_target: f64, period: Period) -> f64 {
    match period {
        Period::Year => annual_target,
        Period::Month => annual_target / MONTHS_PER_YEAR as f64,
    }
}

/// Raw completion percentage. Not clamped; a zero target yields
/// `NaN`/`Infinity` under IEEE-754 division, which the catalog's positive
/// thresholds rule out in practice.
pub fn percentage(total: f64, target: f64) -> f64 {
    total / target * 100.0
}

/// Classifies an annual target against the catalog thresholds, highest
/// tier first; meeting a threshold exactly counts as that tier.
pub fn classify_tier(annual_target: f64, entry: &CatalogEntry) -> Tier {
    let months = MONTHS_PER_YEAR as f64;
    if annual_target >= entry.xl * months {
        Tier::XL
    } else if annual_target >= entry.l * months {
        Tier::L
    } else if annual_target >= entry.m * months {
        Tier::M
    } else {
        Tier::S
    }
}
