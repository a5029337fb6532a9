use std::{net::SocketAddr, time::Duration};

use crate::auth::decode_secret_key;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    /// Decoded JWT signing key. `None` means no `PF_SECRET_KEY` was set and
    /// a random per-process key is generated at startup.
    pub jwt_secret: Option<Vec<u8>>,
    pub token_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("PF_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid PF_LISTEN_ADDR");
        let db_path = std::env::var("PF_DB_PATH").unwrap_or_else(|_| "./db/pushfit.db".into());
        let cors_allow = std::env::var("PF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("PF_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let static_dir = std::env::var("PF_STATIC_DIR").unwrap_or_else(|_| "dist".into());
        let jwt_secret = std::env::var("PF_SECRET_KEY")
            .ok()
            .map(|raw| decode_secret_key(&raw).expect("Invalid PF_SECRET_KEY"));
        let token_ttl_secs: u64 = std::env::var("PF_TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "86400".into())
            .parse()
            .unwrap_or(86400);
        Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            jwt_secret,
            token_ttl: Duration::from_secs(token_ttl_secs),
        }
    }
}
