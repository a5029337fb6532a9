use std::sync::Arc;

use axum::{routing::get, Json, Router};
use pushfit_core::catalog::{CatalogEntry, EXERCISE_CATALOG};

use crate::main_lib::AppState;

/// The static exercise catalog, served so front ends do not hard-code it.
async fn get_catalog() -> Json<&'static [CatalogEntry]> {
    Json(EXERCISE_CATALOG.as_slice())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/catalog", get(get_catalog))
}
