//! Per-date occupancy across all rooms.
//!
//! A date is fully occupied when every known room has at least one active
//! booking covering it. Bookings for room ids outside the room set are
//! ignored, so they can never push a date over the line.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Booking, DateRange, Room, RoomId};

/// How many rooms are taken on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOccupancy {
    /// The date being reported.
    pub date: NaiveDate,
    /// Distinct rooms with an active booking covering the date.
    pub occupied_rooms: usize,
    /// Distinct rooms known to the hotel.
    pub total_rooms: usize,
}

impl DateOccupancy {
    /// Returns true if every room is taken. A hotel with no rooms is never full.
    pub fn is_fully_occupied(&self) -> bool {
        self.total_rooms > 0 && self.occupied_rooms == self.total_rooms
    }
}

/// Counts the occupied rooms for every date of `range`, in ascending order.
///
/// Several bookings on the same room for the same date count once.
pub fn occupancy_by_date(
    rooms: &[Room],
    bookings: &[Booking],
    range: &DateRange,
) -> Vec<DateOccupancy> {
    let known: HashSet<RoomId> = rooms.iter().map(|r| r.id).collect();
    let mut per_day: Vec<HashSet<RoomId>> = vec![HashSet::new(); range.len_days() as usize];

    for (room_id, covered) in covered_spans(&known, bookings, range) {
        let offset = (covered.start() - range.start()).num_days() as usize;
        let span = covered.len_days() as usize;

        for rooms_that_day in &mut per_day[offset..offset + span] {
            rooms_that_day.insert(room_id);
        }
    }

    range
        .days()
        .zip(per_day)
        .map(|(date, occupied)| DateOccupancy {
            date,
            occupied_rooms: occupied.len(),
            total_rooms: known.len(),
        })
        .collect()
}

/// Returns the dates of `range` on which every room is booked.
///
/// Only the part of `range` covered by some booking is walked, so a wide
/// query over a sparse calendar stays cheap.
///
/// # Example
///
/// ```
/// use hotel_booking::availability::fully_occupied_dates;
/// use hotel_booking::models::{Booking, DateRange, Room};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2026, 9, day).unwrap();
/// let rooms = vec![Room::new(1, "A")];
/// let bookings = vec![Booking {
///     id: 1,
///     customer_id: 1,
///     room_id: 1,
///     start_date: d(3),
///     end_date: d(4),
///     is_active: true,
/// }];
///
/// let full = fully_occupied_dates(&rooms, &bookings, &DateRange::new(d(1), d(5)).unwrap());
/// assert_eq!(full, vec![d(3), d(4)]);
/// ```
pub fn fully_occupied_dates(
    rooms: &[Room],
    bookings: &[Booking],
    range: &DateRange,
) -> Vec<NaiveDate> {
    if rooms.is_empty() {
        return Vec::new();
    }

    let known: HashSet<RoomId> = rooms.iter().map(|r| r.id).collect();
    let window = covered_spans(&known, bookings, range)
        .map(|(_, covered)| covered)
        .reduce(|a, b| DateRange::span_of(&a, &b));
    let Some(window) = window else {
        return Vec::new();
    };

    occupancy_by_date(rooms, bookings, &window)
        .into_iter()
        .filter(DateOccupancy::is_fully_occupied)
        .map(|o| o.date)
        .collect()
}

/// The part of `range` each relevant booking covers, paired with its room.
fn covered_spans<'a>(
    known: &'a HashSet<RoomId>,
    bookings: &'a [Booking],
    range: &'a DateRange,
) -> impl Iterator<Item = (RoomId, DateRange)> + 'a {
    bookings
        .iter()
        .filter(|b| known.contains(&b.room_id))
        .filter_map(|b| {
            let covered = b.active_range()?.intersection(range)?;
            Some((b.room_id, covered))
        })
}
