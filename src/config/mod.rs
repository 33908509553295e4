use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub sale: SaleConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

// Базовый адрес API для клиента мастера
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

// Настройки имитации кассы
#[derive(Debug, Clone, Deserialize)]
pub struct SaleConfig {
    // искусственная задержка ответа кассы
    pub delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3001".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "bus_booking=debug,tower_http=debug".to_string()),
            },
            api: ApiConfig {
                base_url: env::var("API_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:3001/api".to_string()),
            },
            sale: SaleConfig {
                delay_ms: env::var("SALE_DELAY_MS")
                    .unwrap_or_else(|_| "500".to_string())
                    .parse()
                    .expect("SALE_DELAY_MS must be a valid number"),
            },
        }
    }
}
