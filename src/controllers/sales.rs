//! sales.rs
//!
//! Имитация кассы. Продажа отвечает после фиксированной искусственной
//! задержки и всегда целиком: частичных и потоковых результатов нет.
//! Повторная отправка после отказа неотличима от новой продажи -
//! ключа идемпотентности в протоколе нет.

use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use std::sync::Arc;
use tokio::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::models::{SeatStatus, TicketSaleRequest, TicketSaleResponse};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/tickets/sell", post(sell_ticket))
}

/// Код подтверждения: AT-<дата>-<3 случайных символа>.
fn generate_pnr() -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!(
        "AT-{}-{}",
        Utc::now().format("%Y%m%d"),
        random[..3].to_uppercase()
    )
}

fn decline(message: impl Into<String>) -> Json<TicketSaleResponse> {
    Json(TicketSaleResponse {
        ok: false,
        pnr: String::new(),
        message: message.into(),
    })
}

// POST /api/tickets/sell (зеркало: POST /sales)
pub async fn sell_ticket(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TicketSaleRequest>,
) -> Json<TicketSaleResponse> {
    // искусственная задержка "обработки платежа"
    tokio::time::sleep(Duration::from_millis(state.config.sale.delay_ms)).await;

    if let Err(errors) = request.validate() {
        warn!("sale rejected, invalid payload: {}", errors);
        return decline("Данные пассажиров не прошли проверку");
    }

    if request.seats.is_empty() {
        return decline("Не выбрано ни одного места");
    }

    let schemas = state.store.schemas_for_trip(&request.trip_id);
    let Some(schema) = schemas.first() else {
        warn!("sale rejected, unknown trip {}", request.trip_id);
        return decline("Рейс не найден");
    };

    for &no in &request.seats {
        match schema.seat_by_no(no) {
            None => return decline(format!("Место {} не существует", no)),
            Some(seat) if seat.status == SeatStatus::Taken => {
                return decline(format!("Место {} уже продано", no));
            }
            Some(_) => {}
        }
    }

    let pnr = generate_pnr();
    info!(
        "ticket sold: trip={} seats={:?} pnr={}",
        request.trip_id, request.seats, pnr
    );
    Json(TicketSaleResponse {
        ok: true,
        pnr,
        message: "Payment step mocked".to_string(),
    })
}
