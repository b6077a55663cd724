//! HTTP request handlers for the hotel booking API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! handler translates a request into one call on the [`BookingManager`]
//! held in [`AppState`].
//!
//! [`BookingManager`]: crate::availability::BookingManager

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::models::{BookingId, NewBooking, RoomId};

use super::request::{CreateBookingRequest, DateRangeQuery};
use super::response::{
    ApiError, ApiErrorResponse, AvailableRoomResponse, FullyOccupiedResponse,
    RoomAvailabilityResponse,
};
use super::state::AppState;

/// Widest range, in days, `GET /occupancy` reports in one response.
///
/// That endpoint returns one entry per day, so the body grows with the range.
pub const MAX_OCCUPANCY_REPORT_DAYS: i64 = 3_660;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rooms", get(list_rooms_handler))
        .route("/rooms/:id/availability", get(room_availability_handler))
        .route("/availability", get(find_available_room_handler))
        .route(
            "/bookings",
            get(list_bookings_handler).post(create_booking_handler),
        )
        .route("/bookings/:id", get(get_booking_handler))
        .route("/occupancy", get(occupancy_handler))
        .route("/occupancy/fully-occupied", get(fully_occupied_handler))
        .with_state(state)
}

/// Handler for POST /bookings.
///
/// Books the first free room for the requested dates. Responds 201 with the
/// stored booking, or 409 when every room is taken.
async fn create_booking_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing booking request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id).into_response(),
    };

    let new_booking: NewBooking = request.into();
    let (start, end) = (new_booking.start_date, new_booking.end_date);

    let started = Instant::now();
    let manager = state.shared_manager();
    let outcome =
        tokio::task::spawn_blocking(move || manager.create_booking_detailed(new_booking)).await;

    let created = match outcome {
        Ok(created) => created,
        Err(join_error) => {
            error!(
                correlation_id = %correlation_id,
                error = %join_error,
                "Booking task failed"
            );
            return ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::internal("Booking could not be completed"),
            )
            .into_response();
        }
    };

    match created {
        Ok(Some(booking)) => {
            info!(
                correlation_id = %correlation_id,
                booking_id = booking.id,
                room_id = booking.room_id,
                duration_us = started.elapsed().as_micros(),
                "Booking created"
            );
            (StatusCode::CREATED, Json(booking)).into_response()
        }
        Ok(None) => {
            info!(
                correlation_id = %correlation_id,
                %start,
                %end,
                "No room available"
            );
            ApiErrorResponse::new(StatusCode::CONFLICT, ApiError::no_room_available(start, end))
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Booking failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /availability?start=&end=.
///
/// Reports the room a booking for the range would get. "No room" is a
/// normal 200 response with `available: false`.
async fn find_available_room_handler(
    State(state): State<AppState>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Result<Json<AvailableRoomResponse>, ApiErrorResponse> {
    let DateRangeQuery { start, end } = range_query(query)?;

    let room_id = state.manager().find_available_room(start, end).map_err(|err| {
        warn!(%start, %end, error = %err, "Availability query rejected");
        ApiErrorResponse::from(err)
    })?;

    Ok(Json(AvailableRoomResponse {
        start,
        end,
        available: room_id.is_some(),
        room_id,
    }))
}

/// Handler for GET /rooms/:id/availability?start=&end=.
async fn room_availability_handler(
    State(state): State<AppState>,
    id: Result<Path<RoomId>, PathRejection>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Result<Json<RoomAvailabilityResponse>, ApiErrorResponse> {
    let Path(room_id) = id.map_err(path_rejection_response)?;
    let DateRangeQuery { start, end } = range_query(query)?;

    let manager = state.manager();
    if manager.room(room_id)?.is_none() {
        return Err(ApiErrorResponse::new(
            StatusCode::NOT_FOUND,
            ApiError::room_not_found(room_id),
        ));
    }

    let available = manager.is_room_available(room_id, start, end)?;
    Ok(Json(RoomAvailabilityResponse {
        room_id,
        start,
        end,
        available,
    }))
}

/// Handler for GET /occupancy/fully-occupied?start=&end=.
async fn fully_occupied_handler(
    State(state): State<AppState>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Result<Json<FullyOccupiedResponse>, ApiErrorResponse> {
    let DateRangeQuery { start, end } = range_query(query)?;

    let dates = state.manager().fully_occupied_dates(start, end)?;
    debug!(%start, %end, count = dates.len(), "Fully occupied dates served");

    Ok(Json(FullyOccupiedResponse { start, end, dates }))
}

/// Handler for GET /occupancy?start=&end=.
///
/// Ranges wider than [`MAX_OCCUPANCY_REPORT_DAYS`] are refused before the
/// report is built.
async fn occupancy_handler(
    State(state): State<AppState>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let DateRangeQuery { start, end } = range_query(query)?;

    let days = (end - start).num_days() + 1;
    if days > MAX_OCCUPANCY_REPORT_DAYS {
        warn!(%start, %end, days, "Occupancy report range too wide");
        return Err(ApiErrorResponse::new(
            StatusCode::BAD_REQUEST,
            ApiError::range_too_wide(days, MAX_OCCUPANCY_REPORT_DAYS),
        ));
    }

    Ok(Json(state.manager().occupancy_by_date(start, end)?))
}

/// Handler for GET /rooms.
async fn list_rooms_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    Ok(Json(state.manager().rooms()?))
}

/// Handler for GET /bookings.
async fn list_bookings_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    Ok(Json(state.manager().bookings()?))
}

/// Handler for GET /bookings/:id.
async fn get_booking_handler(
    State(state): State<AppState>,
    id: Result<Path<BookingId>, PathRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let Path(booking_id) = id.map_err(path_rejection_response)?;

    match state.manager().booking(booking_id)? {
        Some(booking) => Ok(Json(booking)),
        None => Err(ApiErrorResponse::new(
            StatusCode::NOT_FOUND,
            ApiError::booking_not_found(booking_id),
        )),
    }
}

fn range_query(
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Result<DateRangeQuery, ApiErrorResponse> {
    query.map(|Query(range)| range).map_err(|rejection| {
        ApiErrorResponse::new(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error(rejection.body_text()),
        )
    })
}

fn path_rejection_response(rejection: PathRejection) -> ApiErrorResponse {
    ApiErrorResponse::new(
        StatusCode::BAD_REQUEST,
        ApiError::validation_error(rejection.body_text()),
    )
}

fn json_rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
}
