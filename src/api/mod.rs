//! HTTP API module for the hotel booking engine.
//!
//! This module provides the REST API endpoints for room availability,
//! booking creation, and occupancy reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MAX_OCCUPANCY_REPORT_DAYS, create_router};
pub use request::{CreateBookingRequest, DateRangeQuery};
pub use response::{
    ApiError, ApiErrorResponse, AvailableRoomResponse, FullyOccupiedResponse,
    RoomAvailabilityResponse,
};
pub use state::AppState;
