//! Integration tests for the hotel booking engine.
//!
//! This test suite covers:
//! - Room lookup for free and colliding ranges
//! - Booking creation through the HTTP API
//! - Fully occupied date reports
//! - File-backed booking persistence across restarts
//! - Error cases
//! - Properties of the overlap and occupancy rules

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use serde_json::{Value, json};
use tower::ServiceExt;

use hotel_booking::api::{AppState, create_router};
use hotel_booking::availability::{
    BookingManager, FixedClock, find_first_free_room, fully_occupied_dates,
};
use hotel_booking::config::ConfigLoader;
use hotel_booking::models::{Booking, DateRange, NewBooking, Room};
use hotel_booking::repository::{
    BookingRepository, InMemoryBookingRepository, InMemoryRoomRepository,
    JsonFileBookingRepository,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn in_days(n: u64) -> NaiveDate {
    today().checked_add_days(Days::new(n)).unwrap()
}

fn existing_booking(id: u32, room_id: u32) -> Booking {
    Booking {
        id,
        customer_id: 1,
        room_id,
        start_date: in_days(10),
        end_date: in_days(20),
        is_active: true,
    }
}

/// Every configured room is booked from today+10 to today+20.
fn create_test_manager() -> BookingManager {
    let config = ConfigLoader::load("./config/hotel").expect("Failed to load config");
    let bookings: Vec<Booking> = config
        .rooms()
        .iter()
        .enumerate()
        .map(|(i, room)| existing_booking(i as u32 + 1, room.id))
        .collect();

    BookingManager::with_clock(
        Arc::new(InMemoryBookingRepository::with_bookings(bookings)),
        Arc::new(config.room_repository()),
        Arc::new(FixedClock(today())),
    )
}

fn create_router_for_test() -> Router {
    create_router(AppState::new(create_test_manager()))
}

async fn call(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn booking_body(start: u64, end: u64) -> Value {
    json!({
        "customer_id": 42,
        "start_date": in_days(start),
        "end_date": in_days(end)
    })
}

fn tmp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("hotel_booking_integration");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

// =============================================================================
// Room lookup
// =============================================================================

#[test]
fn test_find_room_start_today_is_invalid_range() {
    let manager = create_test_manager();
    assert!(manager.find_available_room(today(), today()).is_err());
}

#[test]
fn test_find_room_tomorrow_returns_a_room() {
    let manager = create_test_manager();
    assert_eq!(manager.find_available_room(in_days(1), in_days(1)).unwrap(), Some(1));
}

#[test]
fn test_find_room_collisions_with_existing_booking() {
    let manager = create_test_manager();

    // before-and-into, into-and-after, around, inside, shared end day
    for (start, end) in [(8, 11), (18, 23), (8, 22), (12, 18), (20, 25)] {
        assert_eq!(
            manager.find_available_room(in_days(start), in_days(end)).unwrap(),
            None,
            "today+{}..=today+{} should collide",
            start,
            end
        );
    }
}

#[test]
fn test_find_room_in_unbooked_period() {
    let manager = create_test_manager();
    assert!(manager.find_available_room(in_days(5), in_days(9)).unwrap().is_some());
    assert!(manager.find_available_room(in_days(21), in_days(22)).unwrap().is_some());
}

// =============================================================================
// Booking creation over HTTP
// =============================================================================

#[tokio::test]
async fn test_book_free_period_then_list_it() {
    let router = create_router_for_test();

    let (status, created) = call(router.clone(), "POST", "/bookings", Some(booking_body(5, 9))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["room_id"], 1);
    assert_eq!(created["customer_id"], 42);

    let id = created["id"].as_u64().unwrap();
    let (status, fetched) = call(router.clone(), "GET", &format!("/bookings/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, all) = call(router, "GET", "/bookings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_rooms_fill_in_order_then_conflict() {
    let router = create_router_for_test();

    for expected_room in 1..=4 {
        let (status, created) =
            call(router.clone(), "POST", "/bookings", Some(booking_body(2, 3))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["room_id"], expected_room);
    }

    let (status, error) = call(router.clone(), "POST", "/bookings", Some(booking_body(3, 4))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "NO_ROOM_AVAILABLE");

    let (_, all) = call(router, "GET", "/bookings", None).await;
    assert_eq!(all.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_booking_in_the_past_is_rejected() {
    let router = create_router_for_test();
    let body = json!({
        "customer_id": 42,
        "start_date": "2020-01-01",
        "end_date": "2020-01-02"
    });

    let (status, error) = call(router, "POST", "/bookings", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_RANGE");
}

#[tokio::test]
async fn test_booking_with_reversed_dates_is_rejected() {
    let router = create_router_for_test();
    let (status, error) = call(router, "POST", "/bookings", Some(booking_body(6, 4))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_RANGE");
}

#[tokio::test]
async fn test_availability_endpoint() {
    let router = create_router_for_test();

    let uri = format!("/availability?start={}&end={}", in_days(21), in_days(22));
    let (status, json) = call(router.clone(), "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["available"], true);
    assert_eq!(json["room_id"], 1);

    let uri = format!("/availability?start={}&end={}", today(), in_days(2));
    let (status, json) = call(router, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_RANGE");
}

#[tokio::test]
async fn test_room_availability_endpoint() {
    let router = create_router_for_test();

    let uri = format!("/rooms/2/availability?start={}&end={}", in_days(20), in_days(21));
    let (status, json) = call(router.clone(), "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["available"], false);

    let (status, rooms) = call(router, "GET", "/rooms", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rooms.as_array().unwrap().len(), 4);
}

// =============================================================================
// Occupancy
// =============================================================================

#[tokio::test]
async fn test_fully_occupied_dates_inside_booking() {
    let router = create_router_for_test();
    let uri = format!(
        "/occupancy/fully-occupied?start={}&end={}",
        in_days(10),
        in_days(19)
    );

    let (status, json) = call(router, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["dates"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_fully_occupied_dates_tail_overlap() {
    let router = create_router_for_test();
    let uri = format!(
        "/occupancy/fully-occupied?start={}&end={}",
        in_days(20),
        in_days(23)
    );

    let (_, json) = call(router, "GET", &uri, None).await;
    let dates = json["dates"].as_array().unwrap();
    assert_eq!(dates.len(), 1);
    assert_eq!(dates[0], in_days(20).to_string());
}

#[tokio::test]
async fn test_occupancy_report_counts_rooms_per_day() {
    let router = create_router_for_test();
    let uri = format!("/occupancy?start={}&end={}", in_days(9), in_days(10));

    let (status, json) = call(router, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let days = json.as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["occupied_rooms"], 0);
    assert_eq!(days[1]["occupied_rooms"], 4);
    assert_eq!(days[1]["total_rooms"], 4);
}

#[tokio::test]
async fn test_fully_occupied_over_a_century_is_answered() {
    let router = create_router_for_test();
    let uri = "/occupancy/fully-occupied?start=2000-01-01&end=2099-12-31";

    let (status, json) = call(router, "GET", uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["dates"].as_array().unwrap().len(), 11);
}

#[test]
fn test_engine_accepts_any_ordered_report_range() {
    let manager = create_test_manager();
    let start = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2999, 12, 31).unwrap();

    let dates = manager.fully_occupied_dates(start, end).unwrap();
    assert_eq!(dates.first(), Some(&in_days(10)));
    assert_eq!(dates.last(), Some(&in_days(20)));
}

#[tokio::test]
async fn test_occupancy_report_range_too_wide_is_rejected() {
    let router = create_router_for_test();
    let uri = "/occupancy?start=2000-01-01&end=2099-12-31";

    let (status, json) = call(router, "GET", uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "RANGE_TOO_WIDE");
}

#[test]
fn test_hotel_without_rooms_is_never_fully_occupied() {
    let manager = BookingManager::with_clock(
        Arc::new(InMemoryBookingRepository::with_bookings(vec![existing_booking(1, 1)])),
        Arc::new(InMemoryRoomRepository::new(vec![])),
        Arc::new(FixedClock(today())),
    );

    assert!(manager.fully_occupied_dates(in_days(0), in_days(30)).unwrap().is_empty());
    assert_eq!(manager.find_available_room(in_days(1), in_days(2)).unwrap(), None);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_file_backed_bookings_block_rooms_after_restart() {
    let path = tmp_path("block_rooms_after_restart.json");
    let _ = std::fs::remove_file(&path);
    let rooms = || Arc::new(InMemoryRoomRepository::new(vec![Room::new(1, "Only")]));
    let stay = NewBooking {
        customer_id: 3,
        start_date: in_days(4),
        end_date: in_days(6),
    };

    {
        let manager = BookingManager::with_clock(
            Arc::new(JsonFileBookingRepository::open(&path).unwrap()),
            rooms(),
            Arc::new(FixedClock(today())),
        );
        assert!(manager.create_booking(stay.clone()).unwrap());
    }

    let store = Arc::new(JsonFileBookingRepository::open(&path).unwrap());
    assert_eq!(store.get_all().unwrap().len(), 1);

    let manager = BookingManager::with_clock(store, rooms(), Arc::new(FixedClock(today())));
    assert!(!manager.create_booking(stay).unwrap());
}

// =============================================================================
// Properties
// =============================================================================

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

fn day_at(offset: u64) -> NaiveDate {
    base().checked_add_days(Days::new(offset)).unwrap()
}

fn range_from(offset: u64, len: u64) -> DateRange {
    DateRange::new(day_at(offset), day_at(offset + len)).unwrap()
}

fn three_rooms() -> Vec<Room> {
    vec![Room::new(1, "A"), Room::new(2, "B"), Room::new(3, "C")]
}

/// Bookings from `(room, offset, len, active)` tuples. A negative-length
/// tuple yields a booking with its dates reversed.
fn bookings_from(stays: &[(u32, u64, i64, bool)]) -> Vec<Booking> {
    stays
        .iter()
        .enumerate()
        .map(|(i, &(room_id, offset, len, is_active))| {
            let start = day_at(offset);
            let end = if len >= 0 {
                day_at(offset + len as u64)
            } else {
                start.checked_sub_days(Days::new(len.unsigned_abs())).unwrap()
            };
            Booking {
                id: i as u32 + 1,
                customer_id: 1,
                room_id,
                start_date: start,
                end_date: end,
                is_active,
            }
        })
        .collect()
}

/// True if `booking` is active and covers `date`, checked one day at a time.
fn covers_day(booking: &Booking, date: NaiveDate) -> bool {
    booking.is_active && booking.start_date <= date && date <= booking.end_date
}

fn stays_strategy() -> impl Strategy<Value = Vec<(u32, u64, i64, bool)>> {
    prop::collection::vec((1u32..5, 0u64..60, -3i64..10, prop::bool::weighted(0.85)), 0..25)
}

proptest! {
    #[test]
    fn prop_first_free_room_matches_day_by_day_check(
        stays in stays_strategy(),
        q in 3u64..60,
        ql in 0u64..15,
    ) {
        let rooms = three_rooms();
        let bookings = bookings_from(&stays);
        let query = range_from(q, ql);

        let expected = rooms
            .iter()
            .find(|room| {
                query.days().all(|date| {
                    !bookings.iter().any(|b| b.room_id == room.id && covers_day(b, date))
                })
            })
            .map(|room| room.id);

        prop_assert_eq!(find_first_free_room(&rooms, &bookings, &query), expected);
    }

    #[test]
    fn prop_fully_occupied_dates_match_day_by_day_check(
        stays in stays_strategy(),
        q in 3u64..60,
        ql in 0u64..30,
    ) {
        let rooms = three_rooms();
        let bookings = bookings_from(&stays);
        let query = range_from(q, ql);

        let expected: Vec<NaiveDate> = query
            .days()
            .filter(|date| {
                rooms.iter().all(|room| {
                    bookings.iter().any(|b| b.room_id == room.id && covers_day(b, *date))
                })
            })
            .collect();

        prop_assert_eq!(fully_occupied_dates(&rooms, &bookings, &query), expected);
    }

    #[test]
    fn prop_booked_range_is_never_offered_again(
        offset in 1u64..60,
        len in 0u64..10,
        q in 1u64..80,
        ql in 0u64..10,
    ) {
        let manager = BookingManager::with_clock(
            Arc::new(InMemoryBookingRepository::new()),
            Arc::new(InMemoryRoomRepository::new(vec![Room::new(1, "A")])),
            Arc::new(FixedClock(today())),
        );
        let stay = NewBooking {
            customer_id: 1,
            start_date: in_days(offset),
            end_date: in_days(offset + len),
        };
        prop_assert!(manager.create_booking(stay).unwrap());

        let shares_a_day = q <= offset + len && q + ql >= offset;
        let room = manager.find_available_room(in_days(q), in_days(q + ql)).unwrap();
        prop_assert_eq!(room.is_none(), shares_a_day);
    }

    #[test]
    fn prop_free_room_found_when_nothing_overlaps(offset in 1u64..100, len in 0u64..20) {
        let manager = BookingManager::with_clock(
            Arc::new(InMemoryBookingRepository::new()),
            Arc::new(InMemoryRoomRepository::new(vec![Room::new(1, "A")])),
            Arc::new(FixedClock(today())),
        );
        let room = manager.find_available_room(in_days(offset), in_days(offset + len)).unwrap();
        prop_assert_eq!(room, Some(1));
    }
}
