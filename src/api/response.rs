//! Response types for the hotel booking API.
//!
//! This module defines the success bodies, the error response structure,
//! and the mapping from [`BookingError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::BookingError;
use crate::models::{BookingId, RoomId};

/// Body of `GET /availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableRoomResponse {
    /// First day of the queried range.
    pub start: NaiveDate,
    /// Last day of the queried range.
    pub end: NaiveDate,
    /// Whether any room is free for the whole range.
    pub available: bool,
    /// The room that would be assigned, if any.
    pub room_id: Option<RoomId>,
}

/// Body of `GET /rooms/:id/availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomAvailabilityResponse {
    /// The room queried.
    pub room_id: RoomId,
    /// First day of the queried range.
    pub start: NaiveDate,
    /// Last day of the queried range.
    pub end: NaiveDate,
    /// Whether the room has no overlapping active booking.
    pub available: bool,
}

/// Body of `GET /occupancy/fully-occupied`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullyOccupiedResponse {
    /// First day of the queried range.
    pub start: NaiveDate,
    /// Last day of the queried range.
    pub end: NaiveDate,
    /// Dates on which every room is booked, ascending.
    pub dates: Vec<NaiveDate>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the response for a booking request no room can satisfy.
    pub fn no_room_available(start: NaiveDate, end: NaiveDate) -> Self {
        Self::with_details(
            "NO_ROOM_AVAILABLE",
            format!("No room is available from {} to {}", start, end),
            "Every room has an active booking overlapping the requested dates",
        )
    }

    /// Creates the response for a report range wider than the API serves.
    pub fn range_too_wide(days: i64, limit: i64) -> Self {
        Self::with_details(
            "RANGE_TOO_WIDE",
            format!("Range spans {} days", days),
            format!("At most {} days can be reported per request", limit),
        )
    }

    /// Creates an internal error response.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    /// Creates a booking not found error response.
    pub fn booking_not_found(id: BookingId) -> Self {
        Self::new("BOOKING_NOT_FOUND", format!("Booking not found: {}", id))
    }

    /// Creates a room not found error response.
    pub fn room_not_found(id: RoomId) -> Self {
        Self::new("ROOM_NOT_FOUND", format!("Room not found: {}", id))
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<BookingError> for ApiErrorResponse {
    fn from(error: BookingError) -> Self {
        match error {
            BookingError::InvalidRange { start, end, reason } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RANGE",
                    format!("Invalid date range {} to {}", start, end),
                    reason,
                ),
            },
            BookingError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            BookingError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            BookingError::InvalidConfig { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid configuration", message),
            },
            BookingError::Storage { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORAGE_ERROR", "Booking storage failed", message),
            },
        }
    }
}
