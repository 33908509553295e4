pub mod reference;
pub mod sales;
pub mod schedules;
pub mod seat_schemas;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(reference::routes())
        .merge(schedules::routes())
        .merge(seat_schemas::routes())
        .merge(sales::routes())
}
