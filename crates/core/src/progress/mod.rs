//! Progress module - the single computation engine behind every progress
//! view (dashboards, race leaderboard, burnup chart, monthly matrix).
//!
//! All engine functions are pure: they take an immutable snapshot of users,
//! the static catalog, and an explicit reference date, and return typed
//! result records. Renderers adapt those records to their chart library,
//! never the other way around.

mod engine;
mod pacing;
mod progress_model;
mod progress_service;



pub use engine::{
    build_burnup, build_goal_progress, build_matrix, build_overview, build_race, build_race_board,
    initials, sum_for_period,
};
pub use pacing::{classify_tier, days_in_month, pacer, percentage, period_target};
pub use progress_model::{
    BurnupChart, BurnupPoint, BurnupSeries, ExerciseTotal, GoalMatrix, GoalMonthCell,
    GoalProgress, MatrixRow, MonthCell, Overview, Period, RaceFilter, RaceRow, RaceStanding,
    UserAverage,
};
pub use progress_service::{ProgressService, ProgressServiceTrait};
