pub mod passenger;
pub mod seat;
pub mod trip;

pub use passenger::{ContactInfo, Gender, Passenger, TicketSaleRequest, TicketSaleResponse};
pub use seat::{Seat, SeatLayout, SeatSchema, SeatStatus, CELL_AISLE};
pub use trip::{Agency, TripSummary};
