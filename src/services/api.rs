//! api.rs
//!
//! Клиент HTTP API бэкенда бронирования.
//!
//! Все вызовы - обычные запрос-ответ без таймаута, повторов и отмены:
//! медленный бэкенд задерживает только индикатор загрузки вызвавшего
//! шага. Ошибки перехватываются на границе шага и в межшаговую сессию
//! не попадают.

use reqwest::{Client, StatusCode};

use crate::config::ApiConfig;
use crate::error::BookingError;
use crate::models::{Agency, SeatSchema, TicketSaleRequest, TicketSaleResponse, TripSummary};

#[derive(Debug, Clone)]
pub struct BackendClient {
    http_client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Справочник касс для выпадающих списков поиска.
    pub async fn get_agencies(&self) -> Result<Vec<Agency>, BookingError> {
        let agencies = self
            .http_client
            .get(format!("{}/reference/agencies", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(agencies)
    }

    /// Рейсы по маршруту на дату (`YYYY-MM-DD`).
    pub async fn get_schedules(
        &self,
        from: &str,
        to: &str,
        date: &str,
    ) -> Result<Vec<TripSummary>, BookingError> {
        let trips = self
            .http_client
            .get(format!("{}/schedules", self.base_url))
            .query(&[("from", from), ("to", to), ("date", date)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(trips)
    }

    /// Один рейс по идентификатору.
    pub async fn get_trip(&self, id: &str) -> Result<TripSummary, BookingError> {
        let response = self
            .http_client
            .get(format!("{}/schedules/{}", self.base_url, id))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(BookingError::NotFound(format!("рейс {id}")));
        }
        Ok(response.error_for_status()?.json().await?)
    }

    /// Схема мест рейса. Бэкенд отвечает массивом; берётся первый
    /// элемент, пустой массив означает "не найдено".
    pub async fn get_seat_schema(&self, trip_id: &str) -> Result<SeatSchema, BookingError> {
        let schemas: Vec<SeatSchema> = self
            .http_client
            .get(format!("{}/seatSchemas", self.base_url))
            .query(&[("tripId", trip_id)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        schemas
            .into_iter()
            .next()
            .ok_or_else(|| BookingError::NotFound(format!("схема мест рейса {trip_id}")))
    }

    /// Продажа билета. Ответ возвращается как есть: решение об успехе
    /// или повторе принимает шаг оплаты. Ключа идемпотентности нет,
    /// повторная отправка для бэкенда - новая продажа.
    pub async fn sell_ticket(
        &self,
        request: &TicketSaleRequest,
    ) -> Result<TicketSaleResponse, BookingError> {
        let response = self
            .http_client
            .post(format!("{}/tickets/sell", self.base_url))
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response)
    }
}
