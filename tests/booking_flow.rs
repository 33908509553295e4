//! Сквозной прогон мастера бронирования против мок-бэкенда,
//! поднятого в том же процессе на случайном порту.

use chrono::{FixedOffset, Utc};

use bus_booking::booking::wizard::apply_sale_outcome;
use bus_booking::booking::{
    grid, BookingSession, SeatSelection, StepResolution, WizardStep, WizardStepResolver,
};
use bus_booking::config::{ApiConfig, AppConfig, Config, SaleConfig};
use bus_booking::error::BookingError;
use bus_booking::models::{ContactInfo, Gender, Passenger, SeatStatus, TicketSaleRequest};
use bus_booking::services::BackendClient;
use bus_booking::{app, AppState};

fn test_config() -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "bus_booking=debug".to_string(),
        },
        api: ApiConfig {
            base_url: "http://localhost:3001/api".to_string(),
        },
        sale: SaleConfig {
            // короткая задержка, чтобы не тормозить тесты
            delay_ms: 10,
        },
    }
}

async fn spawn_backend() -> BackendClient {
    let state = AppState::new(test_config());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(state);
    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service()).await.unwrap();
    });
    BackendClient::new(format!("http://{}/api", addr))
}

fn today_in_schedule_zone() -> String {
    let offset = FixedOffset::east_opt(3 * 3600).unwrap();
    Utc::now().with_timezone(&offset).format("%Y-%m-%d").to_string()
}

fn passenger_for(seat: u32) -> Passenger {
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

#[tokio::test]
async fn full_wizard_flow_ends_confirmed() {
    let client = spawn_backend().await;
    let mut resolver = WizardStepResolver::new();

    // Шаг 1: поиск
    let agencies = client.get_agencies().await.unwrap();
    assert_eq!(agencies.len(), 3);

    let date = today_in_schedule_zone();
    let trips = client.get_schedules("ist", "ank", &date).await.unwrap();
    assert_eq!(trips.len(), 1);
    let trip = client.get_trip(&trips[0].id).await.unwrap();

    // Шаг 2: выбор мест
    resolver.enter(WizardStep::SeatSelection, None);
    let schema = client.get_seat_schema(&trip.id).await.unwrap();
    let cells = grid::render(&schema.layout, &schema.seats).unwrap();
    assert_eq!(cells.len(), schema.layout.cell_count());

    let mut selection = SeatSelection::new();

    // занятое место отклоняется
    let taken = schema
        .seats
        .iter()
        .find(|s| s.status == SeatStatus::Taken)
        .expect("в схеме есть проданные места");
    assert!(matches!(
        selection.toggle(taken).unwrap_err(),
        BookingError::SeatUnavailable(_)
    ));

    // добираем до лимита и упираемся в него
    let empties: Vec<_> = schema
        .seats
        .iter()
        .filter(|s| s.status == SeatStatus::Empty)
        .take(5)
        .collect();
    for seat in &empties[..4] {
        selection.toggle(seat).unwrap();
    }
    assert!(matches!(
        selection.toggle(empties[4]).unwrap_err(),
        BookingError::SelectionLimitExceeded(_)
    ));

    // оставляем два места, сумма пересчитывается
    selection.toggle(empties[2]).unwrap();
    selection.toggle(empties[3]).unwrap();
    let total = selection.total(schema.unit_price);
    assert_eq!(total, schema.unit_price * 2.0);

    // Шаг 3: пассажиры
    let session =
        BookingSession::from_seat_selection(trip.clone(), &selection, total).unwrap();
    assert_eq!(
        resolver.enter(WizardStep::PassengerInfo, Some(&session)),
        StepResolution::Render(WizardStep::PassengerInfo)
    );
    let passengers: Vec<Passenger> =
        session.selected_seats().iter().map(|&s| passenger_for(s)).collect();
    let session = session.with_passenger_data(passengers, contact()).unwrap();

    // Шаг 4: оплата
    assert_eq!(
        resolver.enter(WizardStep::Payment, Some(&session)),
        StepResolution::Render(WizardStep::Payment)
    );
    let response = client.sell_ticket(&session.sale_request().unwrap()).await.unwrap();
    assert!(response.ok, "касса отклонила продажу: {}", response.message);
    assert!(response.pnr.starts_with("AT-"));

    // Терминальное подтверждение
    let confirmed = apply_sale_outcome(&mut resolver, &session, &response).unwrap();
    assert_eq!(resolver.current(), WizardStep::Confirmed);
    assert_eq!(resolver.display_index(true), 5);
    assert_eq!(confirmed.trip().id, trip.id);
    assert_eq!(confirmed.selected_seats(), session.selected_seats());
    assert_eq!(confirmed.total_amount(), total);
    assert_eq!(confirmed.confirmation_code(), Some(response.pnr.as_str()));
}

#[tokio::test]
async fn declined_sale_keeps_wizard_on_payment() {
    let client = spawn_backend().await;
    let mut resolver = WizardStepResolver::new();

    let date = today_in_schedule_zone();
    let trips = client.get_schedules("ist", "izm", &date).await.unwrap();
    let trip = trips[0].clone();
    let schema = client.get_seat_schema(&trip.id).await.unwrap();

    let empty = schema
        .seats
        .iter()
        .find(|s| s.status == SeatStatus::Empty)
        .unwrap();
    let taken = schema
        .seats
        .iter()
        .find(|s| s.status == SeatStatus::Taken)
        .unwrap();

    let mut selection = SeatSelection::new();
    selection.toggle(empty).unwrap();
    let session =
        BookingSession::from_seat_selection(trip.clone(), &selection, schema.unit_price)
            .unwrap()
            .with_passenger_data(vec![passenger_for(empty.no)], contact())
            .unwrap();
    resolver.enter(WizardStep::Payment, Some(&session));

    // запрос в обход выбора называет проданное место
    let request = TicketSaleRequest {
        trip_id: trip.id.clone(),
        seats: vec![taken.no],
        contact: contact(),
        passengers: vec![passenger_for(taken.no)],
    };
    let response = client.sell_ticket(&request).await.unwrap();
    assert!(!response.ok);

    let err = apply_sale_outcome(&mut resolver, &session, &response).unwrap_err();
    assert!(matches!(err, BookingError::PaymentDeclined(_)));
    // мастер остаётся на оплате, сессия не тронута
    assert_eq!(resolver.current(), WizardStep::Payment);
    assert!(session.confirmation_code().is_none());
}

#[tokio::test]
async fn unknown_trip_surfaces_as_not_found() {
    let client = spawn_backend().await;

    assert!(matches!(
        client.get_trip("TRIP-00000000-9").await.unwrap_err(),
        BookingError::NotFound(_)
    ));
    assert!(matches!(
        client.get_seat_schema("TRIP-00000000-9").await.unwrap_err(),
        BookingError::NotFound(_)
    ));
}

#[tokio::test]
async fn sales_root_alias_answers_like_the_api_path() {
    let state = AppState::new(test_config());
    let trip_id = state.store.schedules()[0].id.clone();
    let seat_no = state
        .store
        .schemas_for_trip(&trip_id)
        .remove(0)
        .seats
        .iter()
        .find(|s| s.status == SeatStatus::Empty)
        .unwrap()
        .no;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(state);
    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service()).await.unwrap();
    });

    let request = TicketSaleRequest {
        trip_id,
        seats: vec![seat_no],
        contact: contact(),
        passengers: vec![passenger_for(seat_no)],
    };
    let response: bus_booking::models::TicketSaleResponse = reqwest::Client::new()
        .post(format!("http://{}/sales", addr))
        .json(&request)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(response.ok);
    assert_eq!(response.message, "Payment step mocked");
}
