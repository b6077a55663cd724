//! In-memory stores.

use parking_lot::RwLock;

use crate::error::{BookingError, BookingResult};
use crate::models::{Booking, BookingId, Room, RoomId};

use super::{BookingRepository, RoomRepository};

/// A booking store held entirely in memory.
///
/// Ids are assigned sequentially starting after the highest id already
/// present, so seeding with existing bookings keeps ids unique.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<Vec<Booking>>,
}

impl InMemoryBookingRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `bookings`, keeping their ids.
    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: RwLock::new(bookings),
        }
    }

    /// Number of stored bookings.
    pub fn len(&self) -> usize {
        self.bookings.read().len()
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.bookings.read().is_empty()
    }
}

impl BookingRepository for InMemoryBookingRepository {
    fn get_all(&self) -> BookingResult<Vec<Booking>> {
        Ok(self.bookings.read().clone())
    }

    fn get(&self, id: BookingId) -> BookingResult<Option<Booking>> {
        Ok(self.bookings.read().iter().find(|b| b.id == id).cloned())
    }

    fn add(&self, mut booking: Booking) -> BookingResult<Booking> {
        let mut bookings = self.bookings.write();
        booking.id = next_id(&bookings)?;
        bookings.push(booking.clone());
        Ok(booking)
    }
}

pub(super) fn next_id(bookings: &[Booking]) -> BookingResult<BookingId> {
    bookings
        .iter()
        .map(|b| b.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| BookingError::storage("booking id space exhausted"))
}

/// A fixed set of rooms held in memory.
#[derive(Debug, Default)]
pub struct InMemoryRoomRepository {
    rooms: Vec<Room>,
}

impl InMemoryRoomRepository {
    /// Creates a store holding `rooms` in the given order.
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }
}

impl RoomRepository for InMemoryRoomRepository {
    fn get_all(&self) -> BookingResult<Vec<Room>> {
        Ok(self.rooms.clone())
    }

    fn get(&self, id: RoomId) -> BookingResult<Option<Room>> {
        Ok(self.rooms.iter().find(|r| r.id == id).cloned())
    }
}
