use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use diesel::prelude::*;
use tempfile::{tempdir, TempDir};

use pushfit_core::achievements::{AchievementRepositoryTrait, NewAchievement};
use pushfit_core::auth::LoginAttemptRepositoryTrait;
use pushfit_core::errors::{DatabaseError, Error};
use pushfit_core::goals::NewGoal;
use pushfit_core::users::UserRepositoryTrait;
use pushfit_storage_sqlite::achievements::AchievementRepository;
use pushfit_storage_sqlite::auth::LoginAttemptRepository;
use pushfit_storage_sqlite::users::UserRepository;
use pushfit_storage_sqlite::{db, schema, DbPool, StorageError, WriteHandle};

// The TempDir must stay alive for the duration of the test; dropping it
// deletes the database file under the pool.
fn setup() -> (Arc<DbPool>, WriteHandle, TempDir) {
    // Each test gets its own database file; a leaked DATABASE_URL would
    // make every test resolve to the same one.
    std::env::remove_var("DATABASE_URL");
    let tmp = tempdir().unwrap();
    let db_path = db::init(tmp.path().to_str().unwrap()).unwrap();
    let pool = db::create_pool(&db_path).unwrap();
    db::run_migrations(&pool).unwrap();
    let writer = db::spawn_writer((*pool).clone());
    (pool, writer, tmp)
}

fn goal(exercise: &str, target: f64, unit: &str) -> NewGoal {
    NewGoal {
        exercise: exercise.to_string(),
        target,
        unit: unit.to_string(),
    }
}

fn entry(exercise: &str, value: f64, date: NaiveDate) -> NewAchievement {
    NewAchievement {
        exercise: exercise.to_string(),
        value,
        date,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_upsert_user_with_goals() {
    let (pool, writer, _tmp) = setup();
    let repo = UserRepository::new(pool.clone(), writer);

    let user = repo
        .upsert_with_goals("Anna", vec![goal("Joggen", 720.0, "km")], None)
        .await
        .unwrap();
    assert!(!user.id.is_empty());
    assert_eq!(user.name, "Anna");
    assert!(user.password_hash.is_none());

    // A user without a credential adopts the submitted hash
    let user = repo
        .upsert_with_goals("Anna", vec![], Some("hash-1".to_string()))
        .await
        .unwrap();
    assert_eq!(user.password_hash.as_deref(), Some("hash-1"));

    // A stored credential is never replaced by registration
    let user = repo
        .upsert_with_goals("Anna", vec![], Some("hash-2".to_string()))
        .await
        .unwrap();
    assert_eq!(user.password_hash.as_deref(), Some("hash-1"));

    // Goals upsert on (user, exercise): update one, add one
    repo.upsert_with_goals(
        "Anna",
        vec![goal("Joggen", 840.0, "km"), goal("Plank", 120.0, "Minuten")],
        None,
    )
    .await
    .unwrap();

    let users = repo.list_with_goals().unwrap();
    assert_eq!(users.len(), 1);
    assert!(users[0].has_password);
    let goals = &users[0].goals;
    assert_eq!(goals.len(), 2);
    let joggen = goals.iter().find(|g| g.exercise == "Joggen").unwrap();
    assert_eq!(joggen.target, 840.0);

    // Same id across upserts
    let again = repo.get_by_name("Anna").unwrap().unwrap();
    assert_eq!(again.id, user.id);
    assert!(repo.get_by_name("Nobody").unwrap().is_none());
}

#[tokio::test]
async fn test_list_with_goals_orders_by_name() {
    let (pool, writer, _tmp) = setup();
    let repo = UserRepository::new(pool.clone(), writer);

    for name in ["Zoe", "Anna", "Mara"] {
        repo.upsert_with_goals(name, vec![goal("Joggen", 240.0, "km")], None)
            .await
            .unwrap();
    }

    let users = repo.list_with_goals().unwrap();
    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Anna", "Mara", "Zoe"]);
}

#[tokio::test]
async fn test_set_password_hash_for_missing_user() {
    let (pool, writer, _tmp) = setup();
    let repo = UserRepository::new(pool.clone(), writer);

    let err = repo.set_password_hash("missing", "hash").await.unwrap_err();
    assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));
}

#[tokio::test]
async fn test_achievements_roundtrip_and_ordering() {
    let (pool, writer, _tmp) = setup();
    let users = UserRepository::new(pool.clone(), writer.clone());
    let achievements = AchievementRepository::new(pool.clone(), writer);

    let anna = users
        .upsert_with_goals("Anna", vec![goal("Joggen", 720.0, "km")], None)
        .await
        .unwrap();
    let ben = users
        .upsert_with_goals("Ben", vec![goal("Joggen", 240.0, "km")], None)
        .await
        .unwrap();

    // Inserted out of date order on purpose
    achievements
        .insert(&anna.id, entry("Joggen", 10.0, date(2025, 3, 5)))
        .await
        .unwrap();
    let first = achievements
        .insert(&anna.id, entry("Joggen", 5.0, date(2025, 1, 2)))
        .await
        .unwrap();
    achievements
        .insert(&ben.id, entry("Joggen", 4.0, date(2025, 2, 14)))
        .await
        .unwrap();

    assert!(!first.id.is_empty());
    assert_eq!(first.user_id, anna.id);

    // Personal log is newest first
    let mine = achievements.list_for_user(&anna.id).unwrap();
    let dates: Vec<NaiveDate> = mine.iter().map(|a| a.date).collect();
    assert_eq!(dates, vec![date(2025, 3, 5), date(2025, 1, 2)]);

    // Shared log covers all users, newest first
    let all = achievements.list_all().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].date, date(2025, 3, 5));
    assert_eq!(all[2].date, date(2025, 1, 2));

    // The stats snapshot attaches achievements date ascending
    let stats = users.load_stats().unwrap();
    let anna_stats = stats.iter().find(|u| u.name == "Anna").unwrap();
    let dates: Vec<NaiveDate> = anna_stats.achievements.iter().map(|a| a.date).collect();
    assert_eq!(dates, vec![date(2025, 1, 2), date(2025, 3, 5)]);

    // Delete reports affected rows; the id is gone afterwards
    assert_eq!(achievements.delete(&first.id).await.unwrap(), 1);
    assert_eq!(achievements.delete(&first.id).await.unwrap(), 0);
    let err = achievements.get_by_id(&first.id).unwrap_err();
    assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));
}

#[tokio::test]
async fn test_login_attempts_window_and_pruning() {
    let (pool, writer, _tmp) = setup();
    let users = UserRepository::new(pool.clone(), writer.clone());
    let attempts = LoginAttemptRepository::new(pool.clone(), writer);

    let anna = users
        .upsert_with_goals("Anna", vec![goal("Joggen", 720.0, "km")], None)
        .await
        .unwrap();

    let attempt = attempts.record_failure(&anna.id).await.unwrap();
    assert_eq!(attempt.user_id, anna.id);

    let now = Utc::now().naive_utc();
    assert_eq!(
        attempts.count_since(&anna.id, now - Duration::minutes(5)).unwrap(),
        1
    );
    assert_eq!(
        attempts.count_since(&anna.id, now + Duration::seconds(2)).unwrap(),
        0
    );

    // Seed a row well past the attempt window straight into the table
    {
        use schema::login_attempts::dsl::*;
        let mut conn = pool.get().unwrap();
        diesel::insert_into(login_attempts)
            .values((
                id.eq("stale"),
                user_id.eq(&anna.id),
                created_at.eq(now - Duration::minutes(30)),
            ))
            .execute(&mut conn)
            .unwrap();
        assert_eq!(
            attempts.count_since(&anna.id, now - Duration::hours(2)).unwrap(),
            2
        );
    }

    // The next recorded failure sweeps out-of-window rows
    attempts.record_failure(&anna.id).await.unwrap();
    assert_eq!(
        attempts.count_since(&anna.id, now - Duration::hours(2)).unwrap(),
        2
    );
    {
        use schema::login_attempts::dsl::*;
        let mut conn = pool.get().unwrap();
        let ids: Vec<String> = login_attempts.select(id).load(&mut conn).unwrap();
        assert!(!ids.contains(&"stale".to_string()));
    }
}

#[tokio::test]
async fn test_unique_name_maps_to_core_error() {
    let (pool, writer, _tmp) = setup();
    let users = UserRepository::new(pool.clone(), writer);

    users
        .upsert_with_goals("Anna", vec![goal("Joggen", 720.0, "km")], None)
        .await
        .unwrap();

    let now = Utc::now().naive_utc();
    let mut conn = pool.get().unwrap();
    let result = diesel::insert_into(schema::users::table)
        .values((
            schema::users::id.eq("dup"),
            schema::users::name.eq("Anna"),
            schema::users::created_at.eq(now),
            schema::users::updated_at.eq(now),
        ))
        .execute(&mut conn);

    let core_err: Error = StorageError::from(result.unwrap_err()).into();
    assert!(matches!(
        core_err,
        Error::Database(DatabaseError::UniqueViolation(_))
    ));
}
