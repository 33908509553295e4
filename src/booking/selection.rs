//! selection.rs
//!
//! Локальное состояние выбора мест. Хранит номера выбранных мест в
//! порядке кликов, следит за лимитом и считает итоговую сумму. Никаких
//! сетевых вызовов выбор не порождает.

use crate::error::BookingError;
use crate::models::{Seat, SeatStatus};

/// Больше этого числа мест за одну бронь выбрать нельзя.
pub const MAX_SELECTED_SEATS: usize = 4;

/// Результат успешного переключения места.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Набор выбранных мест. Создаётся пустым при входе на шаг выбора и
/// сбрасывается при выходе из мастера.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatSelection {
    // порядок кликов, не порядок номеров
    seats: Vec<u32>,
}

impl SeatSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Переключает место по клику.
    ///
    /// Занятое место отклоняется всегда. Попытка добавить место сверх
    /// лимита отклоняется без изменения состояния. Уже выбранное место
    /// убирается, остальное добавляется в конец.
    pub fn toggle(&mut self, seat: &Seat) -> Result<Toggle, BookingError> {
        if seat.status == SeatStatus::Taken {
            return Err(BookingError::SeatUnavailable(seat.no));
        }

        if let Some(pos) = self.seats.iter().position(|&no| no == seat.no) {
            self.seats.remove(pos);
            return Ok(Toggle::Removed);
        }

        if self.seats.len() >= MAX_SELECTED_SEATS {
            return Err(BookingError::SelectionLimitExceeded(MAX_SELECTED_SEATS));
        }

        self.seats.push(seat.no);
        Ok(Toggle::Added)
    }

    pub fn contains(&self, no: u32) -> bool {
        self.seats.contains(&no)
    }

    /// Номера выбранных мест в порядке кликов.
    pub fn seats(&self) -> &[u32] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Итоговая сумма: цена за место умножается на число выбранных мест.
    pub fn total(&self, unit_price: f64) -> f64 {
        unit_price * self.seats.len() as f64
    }

    /// Сброс при выходе из мастера или новом поиске.
    pub fn clear(&mut self) {
        self.seats.clear();
    }
}
