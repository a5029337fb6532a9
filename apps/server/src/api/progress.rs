use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use pushfit_core::progress::{
    BurnupChart, GoalMatrix, GoalProgress, MatrixRow, Overview, Period, RaceFilter, RaceStanding,
};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct PeriodQuery {
    #[serde(default)]
    period: Period,
}

#[derive(Deserialize)]
struct RaceQuery {
    #[serde(default)]
    period: Period,
    /// Restricts the board to the exercises this user holds goals for.
    viewer: Option<String>,
}

#[derive(Deserialize)]
struct BurnupQuery {
    exercise: String,
    /// The target line follows this user's goal when set.
    viewer: Option<String>,
}

async fn race_board(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RaceQuery>,
) -> ApiResult<Json<Vec<RaceStanding>>> {
    let filter = match query.viewer {
        Some(viewer) => RaceFilter::MyExercises(viewer),
        None => RaceFilter::AllExercises,
    };
    let standings = state.progress_service.race_board(query.period, &filter)?;
    Ok(Json(standings))
}

async fn burnup(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BurnupQuery>,
) -> ApiResult<Json<BurnupChart>> {
    let chart = state
        .progress_service
        .burnup(&query.exercise, query.viewer.as_deref())?;
    Ok(Json(chart))
}

async fn matrix(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<MatrixRow>>> {
    let rows = state.progress_service.matrix()?;
    Ok(Json(rows))
}

async fn goal_matrix(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<GoalMatrix>>> {
    let goals = state.progress_service.goal_matrix(&name)?;
    Ok(Json(goals))
}

async fn overview(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<Json<Overview>> {
    let overview = state.progress_service.overview(query.period)?;
    Ok(Json(overview))
}

async fn goal_progress(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<Json<Vec<GoalProgress>>> {
    let progress = state.progress_service.goal_progress(&name, query.period)?;
    Ok(Json(progress))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/progress/race", get(race_board))
        .route("/progress/burnup", get(burnup))
        .route("/progress/matrix", get(matrix))
        .route("/progress/matrix/{name}/goals", get(goal_matrix))
        .route("/progress/overview", get(overview))
        .route("/progress/goals/{name}", get(goal_progress))
}
