//! wizard.rs
//!
//! Шаги мастера бронирования и переходы между ними.
//!
//! Резолвер - единственный источник истины о текущем шаге: он получает
//! явные события (клик по индикатору, исход оплаты), а не разбирает
//! строки маршрута. Таблица шагов индексируется перечислением, без
//! строковых ключей.

use crate::booking::session::BookingSession;
use crate::error::BookingError;
use crate::models::TicketSaleResponse;

/// Линейный порядок: поиск, выбор мест, пассажиры, оплата, подтверждение.
/// `Confirmed` терминален и достижим только по явному признаку успеха.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Search,
    SeatSelection,
    PassengerInfo,
    Payment,
    Confirmed,
}

/// Навигируемые шаги в порядке отображения. Индекс 5 зарезервирован за
/// экраном подтверждения и в таблицу не входит.
pub const NAV_STEPS: [WizardStep; 4] = [
    WizardStep::Search,
    WizardStep::SeatSelection,
    WizardStep::PassengerInfo,
    WizardStep::Payment,
];

impl WizardStep {
    /// 1-базовый индекс для индикатора прогресса.
    pub fn index(self) -> usize {
        match self {
            WizardStep::Search => 1,
            WizardStep::SeatSelection => 2,
            WizardStep::PassengerInfo => 3,
            WizardStep::Payment => 4,
            WizardStep::Confirmed => 5,
        }
    }

    /// Обратное отображение индикатора: позиционный поиск по таблице.
    /// Индекс 5 не является навигируемым шагом и даёт `None`.
    pub fn from_index(index: usize) -> Option<WizardStep> {
        match index {
            1..=4 => Some(NAV_STEPS[index - 1]),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Search => "search",
            WizardStep::SeatSelection => "seatSelection",
            WizardStep::PassengerInfo => "passengerInfo",
            WizardStep::Payment => "payment",
            WizardStep::Confirmed => "confirmed",
        }
    }
}

/// Итог попытки входа на шаг.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResolution {
    Render(WizardStep),
    /// Обязательных полей сессии нет: показывать шаг нельзя,
    /// мастер жёстко возвращается к поиску.
    RedirectToSearch,
}

/// Самый дальний индекс, до которого данные сессии уже заполнены.
pub fn populated_frontier(session: Option<&BookingSession>) -> usize {
    match session {
        None => WizardStep::Search.index(),
        Some(s) if s.has_passenger_data() => WizardStep::Payment.index(),
        Some(_) => WizardStep::PassengerInfo.index(),
    }
}

/// Проверка входа на шаг: шаг без обязательных данных не рендерится
/// с неопределёнными полями, а закрывается редиректом на поиск.
pub fn resolve_entry(step: WizardStep, session: Option<&BookingSession>) -> StepResolution {
    let allowed = match step {
        WizardStep::Search | WizardStep::SeatSelection => true,
        WizardStep::PassengerInfo => session.is_some(),
        WizardStep::Payment => session.is_some_and(|s| s.has_passenger_data()),
        WizardStep::Confirmed => session.is_some_and(|s| s.is_confirmed()),
    };
    if allowed {
        StepResolution::Render(step)
    } else {
        StepResolution::RedirectToSearch
    }
}

/// Держит текущий шаг и применяет события навигации.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardStepResolver {
    current: WizardStep,
}

impl Default for WizardStepResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardStepResolver {
    pub fn new() -> Self {
        Self { current: WizardStep::Search }
    }

    pub fn current(&self) -> WizardStep {
        self.current
    }

    /// Индекс для индикатора; признак успеха принудительно показывает
    /// экран подтверждения (индекс 5) независимо от текущей страницы.
    pub fn display_index(&self, success: bool) -> usize {
        if success {
            WizardStep::Confirmed.index()
        } else {
            self.current.index()
        }
    }

    /// Явный вход на шаг с проверкой сессии. При отказе текущим шагом
    /// становится поиск.
    pub fn enter(
        &mut self,
        step: WizardStep,
        session: Option<&BookingSession>,
    ) -> StepResolution {
        let resolution = resolve_entry(step, session);
        self.current = match &resolution {
            StepResolution::Render(step) => *step,
            StepResolution::RedirectToSearch => WizardStep::Search,
        };
        resolution
    }

    /// Клик по индикатору. Цели за границей заполненных данных и
    /// индекс 5 игнорируются без смены шага.
    pub fn on_step_change(
        &mut self,
        target_index: usize,
        session: Option<&BookingSession>,
    ) -> Option<WizardStep> {
        let step = WizardStep::from_index(target_index)?;
        if target_index > populated_frontier(session) {
            return None;
        }
        self.current = step;
        Some(step)
    }

    /// Исход оплаты: успех переводит в терминальное подтверждение,
    /// отказ оставляет мастер на шаге оплаты для повтора.
    pub fn complete_payment(&mut self, success: bool) -> WizardStep {
        if success && self.current == WizardStep::Payment {
            self.current = WizardStep::Confirmed;
        }
        self.current
    }
}

/// Применяет ответ кассы к сессии и резолверу.
///
/// Успех дописывает код подтверждения и завершает мастер; отказ ничего
/// не меняет и поднимает `PaymentDeclined`, чтобы пользователь повторил
/// оплату вручную. Ключа идемпотентности нет: повторная отправка для
/// кассы неотличима от новой продажи.
pub fn apply_sale_outcome(
    resolver: &mut WizardStepResolver,
    session: &BookingSession,
    response: &TicketSaleResponse,
) -> Result<BookingSession, BookingError> {
    if !response.ok {
        resolver.complete_payment(false);
        return Err(BookingError::PaymentDeclined(response.message.clone()));
    }
    let confirmed = session.clone().with_confirmation(response.pnr.clone())?;
    resolver.complete_payment(true);
    Ok(confirmed)
}
