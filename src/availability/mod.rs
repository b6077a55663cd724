//! Availability logic for the hotel booking engine.
//!
//! This module contains the date range validation rules, the overlap-based
//! room selection, the per-date occupancy computation, and the
//! [`BookingManager`] that runs them over the storage collaborators.

mod clock;
mod manager;
mod occupancy;
mod range_validation;
mod room_selection;

pub use clock::{Clock, FixedClock, SystemClock};
pub use manager::BookingManager;
pub use occupancy::{DateOccupancy, fully_occupied_dates, occupancy_by_date};
pub use range_validation::{validate_report_range, validate_reservation_range};
pub use room_selection::{find_first_free_room, room_is_free};
