use serde::{Deserialize, Serialize};

/// Статус места, как его отдаёт бэкенд.
/// Выбор блокирует только `Taken`; `Reserved` и `Selected` приходят из
/// схемы, но остаются кликабельными.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Empty,
    Taken,
    Selected,
    Reserved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub no: u32,
    // 1-индексация, как в схеме салона
    pub row: u16,
    pub col: u16,
    pub status: SeatStatus,
}

/// Код ячейки "проход" в сетке салона. Любой другой код - позиция,
/// которая разрешается через записи мест.
pub const CELL_AISLE: u8 = 2;

/// Прямоугольная сетка салона: rows*cols кодов ячеек, по строкам.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatLayout {
    pub rows: u16,
    pub cols: u16,
    pub cells: Vec<u8>,
}

impl SeatLayout {
    /// Ожидаемое число ячеек.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Код ячейки по 1-индексированным координатам.
    pub fn cell_at(&self, row: u16, col: u16) -> Option<u8> {
        if row == 0 || col == 0 || row > self.rows || col > self.cols {
            return None;
        }
        let idx = (row as usize - 1) * self.cols as usize + (col as usize - 1);
        self.cells.get(idx).copied()
    }
}

/// Схема мест одного рейса: сетка + записи мест + цена за место.
/// Читается с бэкенда и никогда не мутируется клиентом.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatSchema {
    pub trip_id: String,
    pub layout: SeatLayout,
    pub seats: Vec<Seat>,
    pub unit_price: f64,
}

impl SeatSchema {
    /// Запись места по 1-индексированным координатам сетки.
    pub fn seat_at(&self, row: u16, col: u16) -> Option<&Seat> {
        self.seats.iter().find(|s| s.row == row && s.col == col)
    }

    /// Запись места по номеру.
    pub fn seat_by_no(&self, no: u32) -> Option<&Seat> {
        self.seats.iter().find(|s| s.no == no)
    }
}
