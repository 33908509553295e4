//! grid.rs
//!
//! Раскладка салона: превращает прямоугольную сетку кодов ячеек и записи
//! мест в последовательность отрисовываемых ячеек. Чистая функция: один и
//! тот же вход всегда даёт одну и ту же последовательность.

use crate::error::BookingError;
use crate::models::{Seat, SeatLayout, CELL_AISLE};

/// Одна отрисовываемая ячейка сетки салона.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Проход: некликабельный разделитель.
    Aisle,
    /// Позиция без записи места. Это не ошибка данных: так выглядит,
    /// например, пустое пространство рядом с водителем.
    Gap,
    /// Интерактивное место с записью из схемы.
    Seat(Seat),
}

impl Cell {
    pub fn is_interactive(&self) -> bool {
        matches!(self, Cell::Seat(_))
    }
}

/// Разворачивает сетку в ровно `rows * cols` ячеек по строкам.
///
/// Код прохода даёт `Cell::Aisle`; любой другой код разрешается через
/// записи мест по координатам (row, col), без записи получается `Gap`.
pub fn render(layout: &SeatLayout, seats: &[Seat]) -> Result<Vec<Cell>, BookingError> {
    if layout.rows == 0 || layout.cols == 0 {
        return Err(BookingError::Validation(
            "сетка салона должна иметь хотя бы одну строку и колонку".to_string(),
        ));
    }
    if layout.cells.len() != layout.cell_count() {
        return Err(BookingError::Validation(format!(
            "сетка салона повреждена: ожидалось {} ячеек, получено {}",
            layout.cell_count(),
            layout.cells.len()
        )));
    }

    let mut cells = Vec::with_capacity(layout.cell_count());
    for (idx, &code) in layout.cells.iter().enumerate() {
        let row = (idx / layout.cols as usize) as u16 + 1;
        let col = (idx % layout.cols as usize) as u16 + 1;
        if code == CELL_AISLE {
            cells.push(Cell::Aisle);
            continue;
        }
        match seats.iter().find(|s| s.row == row && s.col == col) {
            Some(seat) => cells.push(Cell::Seat(seat.clone())),
            None => cells.push(Cell::Gap),
        }
    }
    Ok(cells)
}
