pub mod grid;
pub mod selection;
pub mod session;
pub mod wizard;

pub use grid::{render, Cell};
pub use selection::{SeatSelection, Toggle, MAX_SELECTED_SEATS};
pub use session::BookingSession;
pub use wizard::{StepResolution, WizardStep, WizardStepResolver};
