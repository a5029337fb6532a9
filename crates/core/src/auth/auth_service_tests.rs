#[cfg(test)]
mod tests {
    use crate::auth::{
        AuthError, AuthService, AuthServiceTrait, Credentials, LoginAttempt,
        LoginAttemptRepositoryTrait, PinHasher, MAX_LOGIN_ATTEMPTS,
    };
    use crate::errors::Result;
    use crate::goals::NewGoal;
    use crate::users::{User, UserRepositoryTrait, UserStats, UserSummary};
    use crate::Error;
    use async_trait::async_trait;
    use chrono::{Duration, NaiveDateTime, Utc};
    use std::sync::{Arc, Mutex};

    // --- Mock UserRepository ---
    #[derive(Clone, Default)]
    struct MockUserRepository {
        users: Arc<Mutex<Vec<User>>>,
    }

    impl MockUserRepository {
        fn with_user(self, name: &str, password_hash: Option<&str>) -> Self {
            let now = Utc::now().naive_utc();
            self.users.lock().unwrap().push(User {
                id: format!("user-{name}"),
                name: name.to_string(),
                password_hash: password_hash.map(|h| h.to_string()),
                created_at: now,
                updated_at: now,
            });
            self
        }

        fn stored_hash(&self, name: &str) -> Option<String> {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.name == name)
                .and_then(|u| u.password_hash.clone())
        }
    }

    #[async_trait]
    impl UserRepositoryTrait for MockUserRepository {
        fn get_by_id(&self, _user_id: &str) -> Result<User> {
            unimplemented!()
        }

        fn get_by_name(&self, name: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.name == name)
                .cloned())
        }

        fn list_with_goals(&self) -> Result<Vec<UserSummary>> {
            unimplemented!()
        }

        fn load_stats(&self) -> Result<Vec<UserStats>> {
            unimplemented!()
        }

        async fn upsert_with_goals(
            &self,
            _name: &str,
            _goals: Vec<NewGoal>,
            _password_hash: Option<String>,
        ) -> Result<User> {
            unimplemented!()
        }

        async fn set_password_hash(&self, user_id: &str, password_hash: &str) -> Result<()> {
            let mut users = self.users.lock().unwrap();
            let user = users.iter_mut().find(|u| u.id == user_id).unwrap();
            user.password_hash = Some(password_hash.to_string());
            Ok(())
        }
    }

    // --- Mock LoginAttemptRepository ---
    #[derive(Clone, Default)]
    struct MockAttemptRepository {
        attempts: Arc<Mutex<Vec<LoginAttempt>>>,
    }

    impl MockAttemptRepository {
        fn seed_failures(&self, user_id: &str, count: i64, at: NaiveDateTime) {
            let mut attempts = self.attempts.lock().unwrap();
            for n in 0..count {
                attempts.push(LoginAttempt {
                    id: format!("attempt-{user_id}-{n}"),
                    user_id: user_id.to_string(),
                    created_at: at,
                });
            }
        }

        fn count(&self) -> usize {
            self.attempts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LoginAttemptRepositoryTrait for MockAttemptRepository {
        fn count_since(&self, user_id: &str, since: NaiveDateTime) -> Result<i64> {
            Ok(self
                .attempts
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.user_id == user_id && a.created_at >= since)
                .count() as i64)
        }

        async fn record_failure(&self, user_id: &str) -> Result<LoginAttempt> {
            let attempt = LoginAttempt {
                id: format!("attempt-{}", self.count()),
                user_id: user_id.to_string(),
                created_at: Utc::now().naive_utc(),
            };
            self.attempts.lock().unwrap().push(attempt.clone());
            Ok(attempt)
        }
    }

    // --- Mock PinHasher ---
    struct MockPinHasher;

    impl PinHasher for MockPinHasher {
        fn hash(&self, pin: &str) -> Result<String> {
            Ok(format!("hashed:{pin}"))
        }

        fn verify(&self, pin: &str, password_hash: &str) -> Result<bool> {
            Ok(password_hash == format!("hashed:{pin}"))
        }
    }

    fn service(
        users: MockUserRepository,
        attempts: MockAttemptRepository,
    ) -> AuthService {
        AuthService::new(Arc::new(users), Arc::new(attempts), Arc::new(MockPinHasher))
    }

    fn credentials(name: &str, pin: &str) -> Credentials {
        Credentials {
            name: name.to_string(),
            pin: pin.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_first_use_adopts_submitted_pin() {
        let users = MockUserRepository::default().with_user("Anna", None);
        let sut = service(users.clone(), MockAttemptRepository::default());

        let user = sut.login(credentials("Anna", "1234")).await.unwrap();
        assert_eq!(user.name, "Anna");
        assert_eq!(users.stored_hash("Anna").as_deref(), Some("hashed:1234"));

        // The adopted PIN is now the credential.
        assert!(sut.login(credentials("Anna", "1234")).await.is_ok());
        assert!(matches!(
            sut.login(credentials("Anna", "9999")).await,
            Err(Error::Auth(AuthError::InvalidPin))
        ));
    }

    #[tokio::test]
    async fn test_login_with_correct_pin_succeeds() {
        let users = MockUserRepository::default().with_user("Anna", Some("hashed:1234"));
        let attempts = MockAttemptRepository::default();
        let sut = service(users, attempts.clone());

        assert!(sut.login(credentials("Anna", "1234")).await.is_ok());
        assert_eq!(attempts.count(), 0);
    }

    #[tokio::test]
    async fn test_login_wrong_pin_records_a_failure() {
        let users = MockUserRepository::default().with_user("Anna", Some("hashed:1234"));
        let attempts = MockAttemptRepository::default();
        let sut = service(users, attempts.clone());

        let result = sut.login(credentials("Anna", "0000")).await;
        assert!(matches!(result, Err(Error::Auth(AuthError::InvalidPin))));
        assert_eq!(attempts.count(), 1);
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let sut = service(MockUserRepository::default(), MockAttemptRepository::default());
        let result = sut.login(credentials("Nobody", "1234")).await;
        assert!(matches!(
            result,
            Err(Error::Auth(AuthError::UserNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_login_locks_after_repeated_failures() {
        let users = MockUserRepository::default().with_user("Anna", Some("hashed:1234"));
        let attempts = MockAttemptRepository::default();
        attempts.seed_failures("user-Anna", MAX_LOGIN_ATTEMPTS, Utc::now().naive_utc());
        let sut = service(users, attempts);

        // Even the correct PIN is refused while the window is saturated.
        let result = sut.login(credentials("Anna", "1234")).await;
        assert!(matches!(
            result,
            Err(Error::Auth(AuthError::TooManyAttempts))
        ));
    }

    #[tokio::test]
    async fn test_login_failures_expire_with_the_window() {
        let users = MockUserRepository::default().with_user("Anna", Some("hashed:1234"));
        let attempts = MockAttemptRepository::default();
        let stale = Utc::now().naive_utc() - Duration::minutes(10);
        attempts.seed_failures("user-Anna", MAX_LOGIN_ATTEMPTS, stale);
        let sut = service(users, attempts);

        assert!(sut.login(credentials("Anna", "1234")).await.is_ok());
    }

    #[tokio::test]
    async fn test_login_rejects_malformed_credentials() {
        let users = MockUserRepository::default().with_user("Anna", Some("hashed:1234"));
        let sut = service(users, MockAttemptRepository::default());

        for pin in ["12", "12345", "abcd"] {
            let result = sut.login(credentials("Anna", pin)).await;
            assert!(
                matches!(result, Err(Error::Validation(_))),
                "pin {pin:?} should be rejected"
            );
        }
    }
}
