use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// Касса/пункт отправления из справочника
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    pub id: String,
    pub name: String,
}

// Один рейс в расписании
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub id: String,
    pub company: String,
    pub from: String,
    pub to: String,
    // Время отправления/прибытия хранится вместе со смещением (+03:00)
    pub departure: DateTime<FixedOffset>,
    pub arrival: DateTime<FixedOffset>,
    pub price: f64,
    pub available_seats: u32,
}
