use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::models::TripSummary;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/schedules", get(search_schedules))
        .route("/schedules/{id}", get(get_schedule))
}

#[derive(Debug, Deserialize)]
struct SchedulesQuery {
    from: Option<String>,
    to: Option<String>,
    // дата отправления в формате YYYY-MM-DD
    date: Option<String>,
}

// GET /api/schedules?from&to&date
async fn search_schedules(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SchedulesQuery>,
) -> Json<Vec<TripSummary>> {
    let trips = state.store.search_schedules(
        params.from.as_deref(),
        params.to.as_deref(),
        params.date.as_deref(),
    );
    tracing::debug!(
        "schedules search from={:?} to={:?} date={:?} -> {} trips",
        params.from,
        params.to,
        params.date,
        trips.len()
    );
    Json(trips)
}

// GET /api/schedules/{id}
async fn get_schedule(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TripSummary>, (StatusCode, String)> {
    state
        .store
        .trip(&id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Рейс не найден".to_string()))
}
