use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::models::SeatSchema;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/seatSchemas", get(list_seat_schemas))
}

#[derive(Debug, Deserialize)]
struct SchemaQuery {
    #[serde(rename = "tripId")]
    trip_id: Option<String>,
}

// GET /api/seatSchemas?tripId={id}
//
// Ответ всегда массив; неизвестный рейс даёт пустой массив, а не 404 -
// потребитель сам трактует пустоту как "не найдено".
async fn list_seat_schemas(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SchemaQuery>,
) -> Json<Vec<SeatSchema>> {
    match params.trip_id.as_deref() {
        Some(trip_id) => Json(state.store.schemas_for_trip(trip_id)),
        None => Json(Vec::new()),
    }
}
