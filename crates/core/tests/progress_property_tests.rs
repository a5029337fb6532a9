//! Property-based tests for the progress engine.
//!
//! These verify the universal invariants of the pure computation layer
//! across randomized inputs, using the `proptest` crate for test case
//! generation.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use pushfit_core::achievements::Achievement;
use pushfit_core::catalog::{Tier, EXERCISE_CATALOG};
use pushfit_core::goals::Goal;
use pushfit_core::progress::{
    build_burnup, build_race, classify_tier, pacer, sum_for_period, Period,
};
use pushfit_core::users::UserStats;

// =============================================================================
// Generators
// =============================================================================

/// Tier order for monotonicity checks; the enum itself stays unordered.
fn rank(tier: Tier) -> u8 {
    match tier {
        Tier::S => 0,
        Tier::M => 1,
        Tier::L => 2,
        Tier::XL => 3,
    }
}

fn achievement(user_id: &str, exercise: &str, value: f64, date: NaiveDate) -> Achievement {
    Achievement {
        id: format!("{user_id}-{exercise}-{date}"),
        user_id: user_id.to_string(),
        exercise: exercise.to_string(),
        value,
        date,
        created_at: date.and_hms_opt(12, 0, 0).unwrap(),
    }
}

fn make_user(
    tag: usize,
    goals: Vec<(&'static str, f64)>,
    achievements: Vec<(&'static str, f64, NaiveDate)>,
) -> UserStats {
    let id = format!("user-{tag}");
    // One goal per exercise, matching the registration upsert invariant.
    let mut seen = std::collections::HashSet::new();
    let goals = goals
        .into_iter()
        .filter(|(exercise, _)| seen.insert(*exercise))
        .map(|(exercise, target)| Goal {
            id: format!("{id}-{exercise}"),
            user_id: id.clone(),
            exercise: exercise.to_string(),
            target,
            unit: EXERCISE_CATALOG
                .iter()
                .find(|e| e.exercise == exercise)
                .map(|e| e.unit)
                .unwrap_or("Anzahl")
                .to_string(),
        })
        .collect();
    let achievements = achievements
        .into_iter()
        .map(|(exercise, value, date)| achievement(&id, exercise, value, date))
        .collect();
    UserStats {
        id: id.clone(),
        name: format!("User {tag}"),
        goals,
        achievements,
    }
}

/// Generates a valid calendar date between 2024 and 2027. Days stop at 28
/// so every (year, month) combination stays valid.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2024i32..2028, 1u32..13, 1u32..29)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Picks one exercise name from the compiled-in catalog.
fn arb_exercise() -> impl Strategy<Value = &'static str> {
    (0..EXERCISE_CATALOG.len()).prop_map(|i| EXERCISE_CATALOG[i].exercise)
}

/// Generates between one and `max` users, each with a random set of goals
/// and a random batch of achievements.
fn arb_users(max: usize) -> impl Strategy<Value = Vec<UserStats>> {
    proptest::collection::vec(
        (
            proptest::collection::vec((arb_exercise(), 1.0f64..5000.0), 0..4),
            proptest::collection::vec((arb_exercise(), 0.1f64..500.0, arb_date()), 0..20),
        ),
        1..=max,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(tag, (goals, achievements))| make_user(tag, goals, achievements))
            .collect()
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Raising an annual target never lowers the classified tier, and any
    /// target at or above the annualized XL threshold classifies as XL.
    #[test]
    fn prop_classify_tier_is_monotone(
        entry_idx in 0..EXERCISE_CATALOG.len(),
        target in 0.0f64..50_000.0,
        bump in 0.0f64..10_000.0,
    ) {
        let entry = &EXERCISE_CATALOG[entry_idx];
        let lower = classify_tier(target, entry);
        let higher = classify_tier(target + bump, entry);
        prop_assert!(rank(lower) <= rank(higher));
        prop_assert_eq!(classify_tier(entry.xl * 12.0 + target, entry), Tier::XL);
    }

    /// Month sums count only the reference month: entries logged in any
    /// other month never change the result, down to the exact bits.
    #[test]
    fn prop_month_sum_ignores_other_months(
        now in arb_date(),
        inside in proptest::collection::vec((1u32..29, 0.1f64..500.0), 0..15),
        outside in proptest::collection::vec((1u32..12, 1u32..29, 0.1f64..500.0), 0..15),
    ) {
        let exercise = "Joggen";
        let mut entries: Vec<Achievement> = inside
            .iter()
            .map(|(day, value)| {
                let date = NaiveDate::from_ymd_opt(now.year(), now.month(), *day).unwrap();
                achievement("u1", exercise, *value, date)
            })
            .collect();
        let expected = sum_for_period(&entries, exercise, Period::Month, now);

        for (offset, day, value) in &outside {
            // Shifting by 1..=11 months can never land back on `now`'s month.
            let month = (now.month() - 1 + offset) % 12 + 1;
            let date = NaiveDate::from_ymd_opt(now.year(), month, *day).unwrap();
            entries.push(achievement("u1", exercise, *value, date));
        }
        prop_assert_eq!(sum_for_period(&entries, exercise, Period::Month, now), expected);
    }

    /// Race standings are deterministic and ranked: the same snapshot
    /// produces the same board twice, ordered by descending progress.
    #[test]
    fn prop_race_is_deterministic_and_sorted(
        users in arb_users(5),
        exercise in arb_exercise(),
        now in arb_date(),
    ) {
        let first = build_race(&users, exercise, Period::Month, now);
        let second = build_race(&users, exercise, Period::Month, now);
        prop_assert_eq!(&first, &second);

        if let Some(standing) = &first {
            for pair in standing.rows.windows(2) {
                prop_assert!(pair[0].progress >= pair[1].progress);
            }
        }
    }

    /// Burnup series are cumulative: non-decreasing day over day, capped
    /// at the reference date, never longer than the shared day axis.
    #[test]
    fn prop_burnup_series_are_nondecreasing(
        users in arb_users(4),
        exercise in arb_exercise(),
        now in arb_date(),
    ) {
        let chart = build_burnup(&users, exercise, None, now);
        prop_assert!(!chart.days.is_empty());
        for series in &chart.series {
            prop_assert!(series.points.len() <= chart.days.len());
            for point in &series.points {
                prop_assert!(point.date <= now);
            }
            for pair in series.points.windows(2) {
                prop_assert!(pair[1].value >= pair[0].value);
            }
        }
    }

    /// The pacer stays inside its documented bounds; the year variant can
    /// exceed 1 only via the fixed 365 denominator on a leap day.
    #[test]
    fn prop_pacer_stays_in_bounds(now in arb_date()) {
        let month = pacer(Period::Month, now);
        prop_assert!(month > 0.0 && month <= 1.0);
        let year = pacer(Period::Year, now);
        prop_assert!(year > 0.0 && year <= 366.0 / 365.0);
    }
}
