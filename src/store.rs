//! store.rs
//!
//! Хранилище данных мок-бэкенда. Всё живёт в памяти: справочник касс,
//! неделя расписаний и схемы мест. После генерации данные только
//! читаются, поэтому блокировки не нужны.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};

use crate::models::{Agency, Seat, SeatLayout, SeatSchema, SeatStatus, TripSummary, CELL_AISLE};

/// Часовой пояс расписаний: все времена отдаются со смещением +03:00.
fn schedule_offset() -> FixedOffset {
    FixedOffset::east_opt(3 * 3600).expect("+03:00 is a valid offset")
}

// Шаблон ежедневного рейса
struct TripTemplate {
    company: &'static str,
    from: &'static str,
    to: &'static str,
    departure: (u32, u32),
    arrival: (u32, u32),
    price: f64,
    rows: u16,
    // каждое taken_step-е место уже продано
    taken_step: u32,
}

const TRIP_TEMPLATES: [TripTemplate; 2] = [
    TripTemplate {
        company: "Metro Turizm",
        from: "ist",
        to: "ank",
        departure: (8, 30),
        arrival: (14, 45),
        price: 250.0,
        rows: 10,
        taken_step: 7,
    },
    TripTemplate {
        company: "Kamil Koç",
        from: "ist",
        to: "izm",
        departure: (14, 0),
        arrival: (21, 30),
        price: 350.0,
        rows: 12,
        taken_step: 5,
    },
];

#[derive(Debug, Clone)]
pub struct DataStore {
    agencies: Vec<Agency>,
    schedules: Vec<TripSummary>,
    schemas: Vec<SeatSchema>,
}

impl DataStore {
    /// Генерирует неделю расписаний начиная с сегодняшнего дня:
    /// по два рейса в день из шаблонов, каждому - своя схема мест.
    pub fn seed() -> Self {
        let offset = schedule_offset();
        let today = Utc::now().with_timezone(&offset).date_naive();

        let agencies = vec![
            Agency { id: "ist".to_string(), name: "İstanbul".to_string() },
            Agency { id: "ank".to_string(), name: "Ankara".to_string() },
            Agency { id: "izm".to_string(), name: "İzmir".to_string() },
        ];

        let mut schedules = Vec::new();
        let mut schemas = Vec::new();

        for day in 0..7i64 {
            let date = today + Duration::days(day);
            for (slot, template) in TRIP_TEMPLATES.iter().enumerate() {
                let id = format!("TRIP-{}-{}", date.format("%Y%m%d"), slot + 1);
                let (layout, seats) = build_cabin(template);
                let available =
                    seats.iter().filter(|s| s.status == SeatStatus::Empty).count() as u32;

                schedules.push(TripSummary {
                    id: id.clone(),
                    company: template.company.to_string(),
                    from: template.from.to_string(),
                    to: template.to.to_string(),
                    departure: at(date, template.departure, offset),
                    arrival: at(date, template.arrival, offset),
                    price: template.price,
                    available_seats: available,
                });
                schemas.push(SeatSchema {
                    trip_id: id,
                    layout,
                    seats,
                    unit_price: template.price,
                });
            }
        }

        Self { agencies, schedules, schemas }
    }

    pub fn agencies(&self) -> &[Agency] {
        &self.agencies
    }

    pub fn schedules(&self) -> &[TripSummary] {
        &self.schedules
    }

    /// Поиск рейсов. Отсутствующий параметр не фильтрует; дата
    /// сравнивается с датой отправления (подстрочная семантика
    /// `departure_like` исходного мока).
    pub fn search_schedules(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        date: Option<&str>,
    ) -> Vec<TripSummary> {
        self.schedules
            .iter()
            .filter(|trip| from.is_none_or(|f| trip.from == f))
            .filter(|trip| to.is_none_or(|t| trip.to == t))
            .filter(|trip| {
                date.is_none_or(|d| trip.departure.format("%Y-%m-%d").to_string() == d)
            })
            .cloned()
            .collect()
    }

    pub fn trip(&self, id: &str) -> Option<&TripSummary> {
        self.schedules.iter().find(|t| t.id == id)
    }

    /// Схемы мест рейса. Потребитель берёт первый элемент массива,
    /// пустой массив означает "не найдено".
    pub fn schemas_for_trip(&self, trip_id: &str) -> Vec<SeatSchema> {
        self.schemas
            .iter()
            .filter(|s| s.trip_id == trip_id)
            .cloned()
            .collect()
    }
}

fn at(date: NaiveDate, (hour, minute): (u32, u32), offset: FixedOffset) -> DateTime<FixedOffset> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).expect("template time is valid");
    date.and_time(time)
        .and_local_timezone(offset)
        .single()
        .expect("fixed offset has no gaps")
}

/// Салон 2+2: пять колонок с проходом посередине. Левые позиции первого
/// ряда остаются без записей мест - это пространство водителя.
fn build_cabin(template: &TripTemplate) -> (SeatLayout, Vec<Seat>) {
    let cols: u16 = 5;
    let mut cells = Vec::with_capacity(template.rows as usize * cols as usize);
    for _ in 0..template.rows {
        cells.extend_from_slice(&[1, 1, CELL_AISLE, 1, 1]);
    }
    let layout = SeatLayout { rows: template.rows, cols, cells };

    let mut seats = Vec::new();
    let mut no = 0u32;
    for row in 1..=template.rows {
        for col in [1u16, 2, 4, 5] {
            if row == 1 && col <= 2 {
                continue;
            }
            no += 1;
            let status = if no % template.taken_step == 0 {
                SeatStatus::Taken
            } else {
                SeatStatus::Empty
            };
            seats.push(Seat { no, row, col, status });
        }
    }
    (layout, seats)
}
