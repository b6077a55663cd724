//! Request types for the hotel booking API.
//!
//! This module defines the JSON bodies and query strings accepted by the
//! endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CustomerId, NewBooking};

/// Request body for `POST /bookings`.
///
/// The room is chosen by the server; clients only say who and when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// The customer making the booking.
    pub customer_id: CustomerId,
    /// First night of the stay.
    pub start_date: NaiveDate,
    /// Last night of the stay (inclusive).
    pub end_date: NaiveDate,
}

/// Query string carrying an inclusive date range, e.g. `?start=2026-11-01&end=2026-11-03`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateRangeQuery {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl From<CreateBookingRequest> for NewBooking {
    fn from(req: CreateBookingRequest) -> Self {
        NewBooking {
            customer_id: req.customer_id,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}
