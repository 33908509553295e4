use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::models::Agency;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/reference/agencies", get(list_agencies))
}

// GET /api/reference/agencies
async fn list_agencies(State(state): State<Arc<AppState>>) -> Json<Vec<Agency>> {
    Json(state.store.agencies().to_vec())
}
