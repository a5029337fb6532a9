use std::sync::Arc;

use rand::{rngs::OsRng, RngCore};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::auth::{Argon2PinHasher, AuthManager};
use crate::config::Config;
use pushfit_core::{
    achievements::{AchievementService, AchievementServiceTrait},
    auth::{AuthService, AuthServiceTrait, PinHasher},
    progress::{ProgressService, ProgressServiceTrait},
    users::{UserService, UserServiceTrait},
};
use pushfit_storage_sqlite::db;
use pushfit_storage_sqlite::{
    achievements::AchievementRepository, auth::LoginAttemptRepository, users::UserRepository,
};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub achievement_service: Arc<dyn AchievementServiceTrait>,
    pub auth_service: Arc<dyn AuthServiceTrait>,
    pub progress_service: Arc<dyn ProgressServiceTrait>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let log_format = std::env::var("PF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    // Ensure DATABASE_URL aligns with PF_DB_PATH so storage picks the right file
    std::env::set_var("DATABASE_URL", &config.db_path);
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let pin_hasher: Arc<dyn PinHasher> = Arc::new(Argon2PinHasher);

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let achievement_repository =
        Arc::new(AchievementRepository::new(pool.clone(), writer.clone()));
    let attempt_repository = Arc::new(LoginAttemptRepository::new(pool.clone(), writer.clone()));

    let user_service = Arc::new(UserService::new(
        user_repository.clone(),
        pin_hasher.clone(),
    ));
    let achievement_service = Arc::new(AchievementService::new(achievement_repository));
    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        attempt_repository,
        pin_hasher,
    ));
    let progress_service = Arc::new(ProgressService::new(user_repository));

    let jwt_secret = match &config.jwt_secret {
        Some(secret) => secret.clone(),
        None => {
            tracing::warn!(
                "PF_SECRET_KEY is not set; using a random signing key, sessions will not survive a restart"
            );
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes.to_vec()
        }
    };
    let auth = Arc::new(AuthManager::new(&jwt_secret, config.token_ttl));

    Ok(Arc::new(AppState {
        user_service,
        achievement_service,
        auth_service,
        progress_service,
        auth,
    }))
}
