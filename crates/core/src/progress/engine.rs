//! The progress engine: pure functions from an in-memory snapshot to typed
//! progress records. No I/O, no clock reads - `now` is always a parameter,
//! so identical inputs yield identical output.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};

use super::pacing::{classify_tier, days_in_month, pacer, percentage, period_target};
use super::progress_model::{
    BurnupChart, BurnupPoint, BurnupSeries, ExerciseTotal, GoalMatrix, GoalMonthCell,
    GoalProgress, MatrixRow, MonthCell, Overview, Period, RaceFilter, RaceRow, RaceStanding,
    UserAverage,
};
use crate::achievements::Achievement;
use crate::catalog::{find_entry, Tier, EXERCISE_CATALOG};
use crate::constants::{DAYS_PER_YEAR, MONTHS_PER_YEAR, RACE_SCALE_HEADROOM};
use crate::users::UserStats;

/// Annual target assumed for the burnup target line when the exercise is
/// missing from the catalog and the viewer has no goal on it.
const FALLBACK_ANNUAL_TARGET: f64 = 100.0;

/// Display initials: first letter of the first two words, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Sums a user's achievement values for one exercise and period.
///
/// `Month` counts only entries in `now`'s calendar month and year. `Year`
/// applies no date filter at all: the "year" total is the lifetime total,
/// matching the long-observed behavior of the tracker.
pub fn sum_for_period(
    achievements: &[Achievement],
    exercise: &str,
    period: Period,
    now: NaiveDate,
) -> f64 {
    achievements
        .iter()
        .filter(|a| a.exercise == exercise)
        .filter(|a| match period {
            Period::Year => true,
            Period::Month => a.date.month() == now.month() && a.date.year() == now.year(),
        })
        .map(|a| a.value)
        .sum()
}

fn monthly_sum(achievements: &[Achievement], exercise: &str, year: i32, month: u32) -> f64 {
    achievements
        .iter()
        .filter(|a| a.exercise == exercise && a.date.year() == year && a.date.month() == month)
        .map(|a| a.value)
        .sum()
}

/// Per-goal progress records for one user's personal dashboard.
pub fn build_goal_progress(user: &UserStats, period: Period, now: NaiveDate) -> Vec<GoalProgress> {
    user.goals
        .iter()
        .map(|goal| {
            let target = period_target(goal.target, period);
            let total = sum_for_period(&user.achievements, &goal.exercise, period, now);
            let tier = find_entry(&goal.exercise)
                .map(|entry| classify_tier(goal.target, entry))
                .unwrap_or(Tier::S);
            GoalProgress {
                exercise: goal.exercise.clone(),
                unit: goal.unit.clone(),
                tier,
                period_target: target,
                total,
                percentage: percentage(total, target),
            }
        })
        .collect()
}

/// Ranked standings for one exercise, or `None` when the exercise is not
/// in the catalog. Rows are sorted by progress descending with a stable
/// sort, so ties keep input order.
pub fn build_race(
    users: &[UserStats],
    exercise: &str,
    period: Period,
    now: NaiveDate,
) -> Option<RaceStanding> {
    let entry = find_entry(exercise)?;

    let mut rows: Vec<RaceRow> = users
        .iter()
        .filter_map(|user| {
            let goal = user.goals.iter().find(|g| g.exercise == exercise)?;
            let target = period_target(goal.target, period);
            let total = sum_for_period(&user.achievements, exercise, period, now);
            Some(RaceRow {
                name: user.name.clone(),
                initials: initials(&user.name),
                tier: classify_tier(goal.target, entry),
                progress: percentage(total, target),
                absolute: total,
                unit: goal.unit.clone(),
            })
        })
        .collect();
    rows.sort_by(|a, b| b.progress.partial_cmp(&a.progress).unwrap_or(Ordering::Equal));

    let scale_months = match period {
        Period::Year => MONTHS_PER_YEAR as f64,
        Period::Month => 1.0,
    };
    Some(RaceStanding {
        exercise: entry.exercise.to_string(),
        unit: entry.unit.to_string(),
        max_absolute: entry.xl * scale_months * RACE_SCALE_HEADROOM,
        rows,
    })
}

/// Race standings for a set of exercises: the whole catalog, or only the
/// viewer's. With `MyExercises`, standings nobody takes part in are
/// dropped; the full board keeps them so every exercise stays visible.
pub fn build_race_board(
    users: &[UserStats],
    period: Period,
    now: NaiveDate,
    filter: &RaceFilter,
) -> Vec<RaceStanding> {
    let exercises: Vec<String> = match filter {
        RaceFilter::AllExercises => EXERCISE_CATALOG
            .iter()
            .map(|e| e.exercise.to_string())
            .collect(),
        RaceFilter::MyExercises(viewer) => users
            .iter()
            .find(|u| &u.name == viewer)
            .map(|u| u.goals.iter().map(|g| g.exercise.clone()).collect())
            .unwrap_or_default(),
    };

    exercises
        .iter()
        .filter_map(|exercise| build_race(users, exercise, period, now))
        .filter(|standing| {
            !standing.rows.is_empty() || matches!(filter, RaceFilter::AllExercises)
        })
        .collect()
}

/// Burnup chart for one exercise: day axis from January 1 through the end
/// of the current month, a linear target line over the whole axis, and a
/// cumulative series per user holding a goal on the exercise. Series stop
/// at `now`; past days without entries carry the running total forward.
///
/// The target line follows the viewer's own goal target when set,
/// otherwise the exercise's XL threshold annualized.
pub fn build_burnup(
    users: &[UserStats],
    exercise: &str,
    viewer: Option<&str>,
    now: NaiveDate,
) -> BurnupChart {
    let entry = find_entry(exercise);
    let year = now.year();
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(now);
    let end = NaiveDate::from_ymd_opt(year, now.month(), days_in_month(year, now.month()))
        .unwrap_or(now);
    let days: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= end).collect();

    let viewer_goal = viewer
        .and_then(|name| users.iter().find(|u| u.name == name))
        .and_then(|u| u.goals.iter().find(|g| g.exercise == exercise));
    let annual_target = match (viewer_goal, entry) {
        (Some(goal), _) => goal.target,
        (None, Some(e)) => e.xl * MONTHS_PER_YEAR as f64,
        (None, None) => FALLBACK_ANNUAL_TARGET,
    };

    let target = days
        .iter()
        .enumerate()
        .map(|(index, date)| BurnupPoint {
            date: *date,
            value: index as f64 / DAYS_PER_YEAR * annual_target,
        })
        .collect();

    let series = users
        .iter()
        .filter(|u| u.goals.iter().any(|g| g.exercise == exercise))
        .map(|user| {
            let tier = user
                .goals
                .iter()
                .find(|g| g.exercise == exercise)
                .zip(entry)
                .map(|(goal, e)| classify_tier(goal.target, e))
                .unwrap_or(Tier::S);

            let mut entries: Vec<(NaiveDate, f64)> = user
                .achievements
                .iter()
                .filter(|a| a.exercise == exercise)
                .map(|a| (a.date, a.value))
                .collect();
            entries.sort_by_key(|(date, _)| *date);

            let mut points = Vec::with_capacity(days.len());
            let mut cumulative = 0.0;
            let mut next = 0;
            for day in &days {
                if *day > now {
                    break;
                }
                while next < entries.len() && entries[next].0 <= *day {
                    cumulative += entries[next].1;
                    next += 1;
                }
                points.push(BurnupPoint {
                    date: *day,
                    value: cumulative,
                });
            }

            BurnupSeries {
                name: user.name.clone(),
                initials: initials(&user.name),
                tier,
                points,
            }
        })
        .collect();

    BurnupChart {
        exercise: exercise.to_string(),
        unit: entry.map(|e| e.unit.to_string()).unwrap_or_default(),
        days,
        target,
        series,
    }
}

/// Monthly pass/fail matrix for every user, name-sorted, including the
/// per-goal breakdown ungated by the all-goals rule.
pub fn build_matrix(users: &[UserStats], now: NaiveDate) -> Vec<MatrixRow> {
    let current_year = now.year();
    let current_month = now.month();

    let mut rows: Vec<MatrixRow> = users
        .iter()
        .map(|user| {
            let has_no_goals = user.goals.is_empty();

            let months = (1..=12u32)
                .map(|month| {
                    if has_no_goals {
                        return MonthCell {
                            month,
                            met: false,
                            future: false,
                        };
                    }
                    let met = user.goals.iter().all(|goal| {
                        monthly_sum(&user.achievements, &goal.exercise, current_year, month)
                            >= goal.target / MONTHS_PER_YEAR as f64
                    });
                    MonthCell {
                        month,
                        met,
                        future: month > current_month,
                    }
                })
                .collect();

            let goals = user
                .goals
                .iter()
                .map(|goal| {
                    let monthly_target = goal.target / MONTHS_PER_YEAR as f64;
                    let months = (1..=12u32)
                        .map(|month| {
                            let value = monthly_sum(
                                &user.achievements,
                                &goal.exercise,
                                current_year,
                                month,
                            );
                            GoalMonthCell {
                                month,
                                value,
                                met: value >= monthly_target,
                                future: month > current_month,
                            }
                        })
                        .collect();
                    GoalMatrix {
                        exercise: goal.exercise.clone(),
                        unit: goal.unit.clone(),
                        monthly_target,
                        months,
                    }
                })
                .collect();

            MatrixRow {
                name: user.name.clone(),
                has_no_goals,
                months,
                goals,
            }
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

/// Cross-user overview: each user's average clamped goal completion for
/// the period (zero for users without goals, input order kept), the pacer
/// reference in percent, and exercise totals in first-seen order.
pub fn build_overview(users: &[UserStats], period: Period, now: NaiveDate) -> Overview {
    let averages = users
        .iter()
        .map(|user| {
            let progress = if user.goals.is_empty() {
                0.0
            } else {
                let total: f64 = user
                    .goals
                    .iter()
                    .map(|goal| {
                        let target = period_target(goal.target, period);
                        let sum =
                            sum_for_period(&user.achievements, &goal.exercise, period, now);
                        percentage(sum, target).min(100.0)
                    })
                    .sum();
                total / user.goals.len() as f64
            };
            UserAverage {
                name: user.name.clone(),
                progress,
            }
        })
        .collect();

    let mut exercise_totals: Vec<ExerciseTotal> = Vec::new();
    for user in users {
        for achievement in &user.achievements {
            match exercise_totals
                .iter_mut()
                .find(|t| t.exercise == achievement.exercise)
            {
                Some(total) => total.total += achievement.value,
                None => exercise_totals.push(ExerciseTotal {
                    exercise: achievement.exercise.clone(),
                    total: achievement.value,
                }),
            }
        }
    }

    Overview {
        period,
        pacer_percent: pacer(period, now) * 100.0,
        averages,
        exercise_totals,
    }
}
