pub mod booking;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// Shared state для мок-бэкенда
#[derive(Clone)]
pub struct AppState {
    pub store: store::DataStore,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        let store = store::DataStore::seed();
        Arc::new(Self { store, config })
    }
}

/// Собирает приложение мок-бэкенда. Общая точка для main и тестов.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Bus Booking Mock API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        // Маршруты API из модуля controllers
        .nest("/api", controllers::routes())
        // Историческое зеркало кассы в корне
        .route("/sales", post(controllers::sales::sell_ticket))
        .with_state(state)
        // Фронтенд ходит с другого origin, поэтому CORS открыт
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
