use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{auth::require_jwt, config::Config, main_lib::AppState};

pub mod achievements;
pub mod auth;
pub mod catalog;
pub mod health;
pub mod progress;
pub mod users;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let public = Router::new()
        .merge(health::router())
        .merge(catalog::router())
        .merge(users::router())
        .merge(auth::router())
        .merge(progress::router());

    let protected = Router::new()
        .merge(achievements::router())
        .merge(auth::protected_router())
        .layer(middleware::from_fn_with_state(state.clone(), require_jwt));

    Router::new()
        .nest("/api/v1", public.merge(protected))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
