//! session.rs
//!
//! Межшаговая сессия бронирования. Каждый шаг мастера читает полную
//! накопленную сессию и передаёт дальше строго расширенную копию:
//! поля, записанные ранними шагами, поздние шаги изменить не могут.
//! Сессия передаётся явно, как значение, а не через глобальное состояние.

use validator::Validate;

use crate::booking::selection::SeatSelection;
use crate::error::BookingError;
use crate::models::{ContactInfo, Passenger, TicketSaleRequest, TripSummary};

#[derive(Debug, Clone, PartialEq)]
pub struct BookingSession {
    trip: TripSummary,
    selected_seats: Vec<u32>,
    total_amount: f64,
    passengers: Option<Vec<Passenger>>,
    contact: Option<ContactInfo>,
    confirmation_code: Option<String>,
}

impl BookingSession {
    /// Фиксирует итог шага выбора мест: рейс, места и сумму.
    /// Пассажиры, контакты и код подтверждения на этом шаге отсутствуют.
    pub fn from_seat_selection(
        trip: TripSummary,
        selection: &SeatSelection,
        total_amount: f64,
    ) -> Result<Self, BookingError> {
        if selection.is_empty() {
            return Err(BookingError::IncompleteBookingData(
                "выбор мест пуст",
            ));
        }
        Ok(Self {
            trip,
            selected_seats: selection.seats().to_vec(),
            total_amount,
            passengers: None,
            contact: None,
            confirmation_code: None,
        })
    }

    /// Дописывает данные пассажиров и контакты.
    ///
    /// Пассажиров должно быть ровно столько же, сколько выбранных мест,
    /// каждый привязан к своему месту, и все поля проходят проверку.
    pub fn with_passenger_data(
        self,
        passengers: Vec<Passenger>,
        contact: ContactInfo,
    ) -> Result<Self, BookingError> {
        if passengers.len() != self.selected_seats.len() {
            return Err(BookingError::IncompleteBookingData(
                "число пассажиров не совпадает с числом мест",
            ));
        }
        for passenger in &passengers {
            if !self.selected_seats.contains(&passenger.seat) {
                return Err(BookingError::IncompleteBookingData(
                    "пассажир привязан к невыбранному месту",
                ));
            }
        }
        let mut seen = Vec::with_capacity(passengers.len());
        for passenger in &passengers {
            if seen.contains(&passenger.seat) {
                return Err(BookingError::IncompleteBookingData(
                    "на одно место записано два пассажира",
                ));
            }
            seen.push(passenger.seat);
        }

        for passenger in &passengers {
            passenger.validate()?;
        }
        contact.validate()?;

        Ok(Self {
            passengers: Some(passengers),
            contact: Some(contact),
            ..self
        })
    }

    /// Дописывает код подтверждения после успешной продажи.
    /// Допустимо только когда данные пассажиров уже в сессии.
    pub fn with_confirmation(self, pnr: impl Into<String>) -> Result<Self, BookingError> {
        if self.passengers.is_none() || self.contact.is_none() {
            return Err(BookingError::PrematureConfirmation);
        }
        Ok(Self {
            confirmation_code: Some(pnr.into()),
            ..self
        })
    }

    /// Тело запроса продажи для кассы.
    pub fn sale_request(&self) -> Result<TicketSaleRequest, BookingError> {
        let (passengers, contact) = match (&self.passengers, &self.contact) {
            (Some(p), Some(c)) => (p.clone(), c.clone()),
            _ => {
                return Err(BookingError::IncompleteBookingData(
                    "нет данных пассажиров для оплаты",
                ))
            }
        };
        Ok(TicketSaleRequest {
            trip_id: self.trip.id.clone(),
            seats: self.selected_seats.clone(),
            contact,
            passengers,
        })
    }

    pub fn trip(&self) -> &TripSummary {
        &self.trip
    }

    /// Номера мест в порядке кликов.
    pub fn selected_seats(&self) -> &[u32] {
        &self.selected_seats
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn passengers(&self) -> Option<&[Passenger]> {
        self.passengers.as_deref()
    }

    pub fn contact(&self) -> Option<&ContactInfo> {
        self.contact.as_ref()
    }

    pub fn confirmation_code(&self) -> Option<&str> {
        self.confirmation_code.as_deref()
    }

    pub fn has_passenger_data(&self) -> bool {
        self.passengers.is_some() && self.contact.is_some()
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmation_code.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, SeatStatus};
    use chrono::DateTime;

    fn sample_trip() -> TripSummary {
        TripSummary {
            id: "TRIP-20251201-1".to_string(),
            company: "Metro Turizm".to_string(),
            from: "ist".to_string(),
            to: "ank".to_string(),
            departure: DateTime::parse_from_rfc3339("2025-12-01T08:30:00+03:00").unwrap(),
            arrival: DateTime::parse_from_rfc3339("2025-12-01T14:45:00+03:00").unwrap(),
            price: 250.0,
            available_seats: 30,
        }
    }

    fn selection_of(seats: &[u32]) -> SeatSelection {
        let mut selection = SeatSelection::new();
        for &no in seats {
            let seat = crate::models::Seat { no, row: 1, col: 1, status: SeatStatus::Empty };
            selection.toggle(&seat).unwrap();
        }
        selection
    }

    fn passenger(seat: u32) -> Passenger {
        Passenger {
            seat,
            first_name: "Иван".to_string(),
            last_name: "Петров".to_string(),
            id_no: "12345678901".to_string(),
            gender: Gender::Male,
        }
    }

    fn contact() -> ContactInfo {
        ContactInfo {
            email: "ivan@example.com".to_string(),
            phone: "5551234567".to_string(),
        }
    }

    #[test]
    fn empty_selection_is_rejected() {
        let err = BookingSession::from_seat_selection(sample_trip(), &SeatSelection::new(), 0.0)
            .unwrap_err();
        assert!(matches!(err, BookingError::IncompleteBookingData(_)));
    }

    #[test]
    fn passenger_count_mismatch_fails() {
        let session =
            BookingSession::from_seat_selection(sample_trip(), &selection_of(&[4, 12]), 500.0)
                .unwrap();
        let err = session
            .with_passenger_data(vec![passenger(4)], contact())
            .unwrap_err();
        assert!(matches!(err, BookingError::IncompleteBookingData(_)));
    }

    #[test]
    fn passenger_on_unselected_seat_fails() {
        let session =
            BookingSession::from_seat_selection(sample_trip(), &selection_of(&[4, 12]), 500.0)
                .unwrap();
        let err = session
            .with_passenger_data(vec![passenger(4), passenger(7)], contact())
            .unwrap_err();
        assert!(matches!(err, BookingError::IncompleteBookingData(_)));
    }

    #[test]
    fn duplicate_passenger_seats_fail() {
        let session =
            BookingSession::from_seat_selection(sample_trip(), &selection_of(&[4, 12]), 500.0)
                .unwrap();
        let err = session
            .with_passenger_data(vec![passenger(4), passenger(4)], contact())
            .unwrap_err();
        assert!(matches!(err, BookingError::IncompleteBookingData(_)));
    }

    #[test]
    fn invalid_passenger_fields_fail_validation() {
        let session =
            BookingSession::from_seat_selection(sample_trip(), &selection_of(&[4]), 250.0)
                .unwrap();
        let mut bad = passenger(4);
        bad.id_no = "12AB".to_string();
        let err = session.with_passenger_data(vec![bad], contact()).unwrap_err();
        assert!(matches!(err, BookingError::Validation(_)));
    }

    #[test]
    fn confirmation_before_passengers_is_premature() {
        let session =
            BookingSession::from_seat_selection(sample_trip(), &selection_of(&[4]), 250.0)
                .unwrap();
        let err = session.with_confirmation("AT-20251201-ABC").unwrap_err();
        assert!(matches!(err, BookingError::PrematureConfirmation));
    }

    #[test]
    fn append_only_chain_keeps_early_fields() {
        let trip = sample_trip();
        let session =
            BookingSession::from_seat_selection(trip.clone(), &selection_of(&[4, 12]), 500.0)
                .unwrap();
        let session = session
            .with_passenger_data(vec![passenger(4), passenger(12)], contact())
            .unwrap();
        let session = session.with_confirmation("AT-20251201-XYZ").unwrap();

        assert_eq!(session.trip(), &trip);
        assert_eq!(session.selected_seats(), &[4, 12]);
        assert_eq!(session.total_amount(), 500.0);
        assert_eq!(session.passengers().unwrap().len(), 2);
        assert_eq!(session.confirmation_code(), Some("AT-20251201-XYZ"));
    }

    #[test]
    fn sale_request_mirrors_session() {
        let session =
            BookingSession::from_seat_selection(sample_trip(), &selection_of(&[4, 12]), 500.0)
                .unwrap()
                .with_passenger_data(vec![passenger(4), passenger(12)], contact())
                .unwrap();
        let request = session.sale_request().unwrap();
        assert_eq!(request.trip_id, "TRIP-20251201-1");
        assert_eq!(request.seats, vec![4, 12]);
        assert_eq!(request.passengers.len(), 2);
    }

    #[test]
    fn sale_request_without_passengers_fails() {
        let session =
            BookingSession::from_seat_selection(sample_trip(), &selection_of(&[4]), 250.0)
                .unwrap();
        assert!(matches!(
            session.sale_request().unwrap_err(),
            BookingError::IncompleteBookingData(_)
        ));
    }
}
