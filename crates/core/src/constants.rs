/// Months in a challenge year, used to scale monthly catalog thresholds
/// to annual targets and back.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Fixed denominator for year pacing. Deliberately not leap-aware.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Headroom factor applied to the XL threshold when scaling absolute
/// race bars. Values beyond it render off-scale.
pub const RACE_SCALE_HEADROOM: f64 = 1.2;
