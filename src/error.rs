use thiserror::Error;

/// Единая классификация ошибок мастера бронирования.
///
/// Ни одна из них не фатальна для процесса: худший исход -
/// принудительный возврат на шаг поиска. Сетевые ошибки и ошибки
/// валидации перехватываются на границе шага, который их вызвал, и не
/// попадают в межшаговую сессию.
#[derive(Debug, Error)]
pub enum BookingError {
    /// Запрос к бэкенду отклонён или вернул не-2xx.
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// Данных нет: пустой массив схем мест, неизвестный рейс.
    #[error("{0} not found")]
    NotFound(String),

    /// Данные формы или схемы не прошли проверку.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Попытка выбрать пятое место.
    #[error("selection limit of {0} seats reached")]
    SelectionLimitExceeded(usize),

    /// Место уже занято.
    #[error("seat {0} is already taken")]
    SeatUnavailable(u32),

    /// Шаг получил сессию без обязательных полей.
    #[error("incomplete booking data: {0}")]
    IncompleteBookingData(&'static str),

    /// Код подтверждения до ввода данных пассажиров.
    #[error("confirmation applied before passenger data")]
    PrematureConfirmation,

    /// Касса отклонила продажу; мастер остаётся на шаге оплаты.
    #[error("payment declined: {0}")]
    PaymentDeclined(String),
}

impl From<validator::ValidationErrors> for BookingError {
    fn from(errors: validator::ValidationErrors) -> Self {
        BookingError::Validation(errors.to_string())
    }
}
