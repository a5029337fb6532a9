//! Typed result records returned by the progress engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Tier;

/// Reporting period every progress computation is parameterized over.
///
/// `Year` deliberately means "all achievements ever logged", not the
/// calendar year - the historically observed behavior, kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Month,
    Year,
}

/// Which exercises a race board covers: the whole catalog, or only the
/// exercises the named viewer holds goals for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceFilter {
    AllExercises,
    MyExercises(String),
}

/// Progress of one user against one goal for a period.
///
/// `percentage` is raw and may exceed 100 to show overachievement;
/// `bar_percentage()` clamps for rendered bar lengths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub exercise: String,
    pub unit: String,
    pub tier: Tier,
    pub period_target: f64,
    pub total: f64,
    pub percentage: f64,
}

impl GoalProgress {
    pub fn bar_percentage(&self) -> f64 {
        self.percentage.min(100.0)
    }
}

/// One contender on a race board, already ranked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RaceRow {
    pub name: String,
    pub initials: String,
    pub tier: Tier,
    /// Raw percentage of the period target; ties keep input order.
    pub progress: f64,
    /// Absolute value summed for the period, for absolute-mode rendering.
    pub absolute: f64,
    pub unit: String,
}

/// Ranked standings for one exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RaceStanding {
    pub exercise: String,
    pub unit: String,
    /// Fixed absolute scale: XL threshold (annualized for year mode) plus
    /// 20% headroom. Values beyond it render off-scale.
    pub max_absolute: f64,
    pub rows: Vec<RaceRow>,
}

/// One day on a burnup series or its target line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BurnupPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Cumulative series for one user. Points stop at the reference date;
/// future days are omitted rather than extrapolated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BurnupSeries {
    pub name: String,
    pub initials: String,
    pub tier: Tier,
    pub points: Vec<BurnupPoint>,
}

/// Full burnup chart for one exercise: a shared day axis (January 1 through
/// the end of the current month), a linear target line, and one cumulative
/// series per participating user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BurnupChart {
    pub exercise: String,
    pub unit: String,
    pub days: Vec<NaiveDate>,
    pub target: Vec<BurnupPoint>,
    pub series: Vec<BurnupSeries>,
}

/// Month cell of the all-goals matrix. `met` and `future` are independent
/// flags; renderers decide precedence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthCell {
    /// 1-based calendar month.
    pub month: u32,
    pub met: bool,
    pub future: bool,
}

/// Month cell of the per-goal breakdown, ungated by the all-goals rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalMonthCell {
    pub month: u32,
    pub value: f64,
    pub met: bool,
    pub future: bool,
}

/// Per-goal twelve-month breakdown for one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalMatrix {
    pub exercise: String,
    pub unit: String,
    pub monthly_target: f64,
    pub months: Vec<GoalMonthCell>,
}

/// One user's row of the monthly pass/fail matrix, name-sorted in the
/// board output. A user passes a month only when every goal's monthly sum
/// meets `target / 12`; users without goals are marked distinctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatrixRow {
    pub name: String,
    pub has_no_goals: bool,
    pub months: Vec<MonthCell>,
    pub goals: Vec<GoalMatrix>,
}

/// Average clamped goal completion for one user, for the overview chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserAverage {
    pub name: String,
    pub progress: f64,
}

/// Total logged value for one exercise across all users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTotal {
    pub exercise: String,
    pub total: f64,
}

/// Cross-user overview: per-user averages (input order preserved), the
/// pacer reference in percent, and first-seen-ordered exercise totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub period: Period,
    pub pacer_percent: f64,
    pub averages: Vec<UserAverage>,
    pub exercise_totals: Vec<ExerciseTotal>,
}
