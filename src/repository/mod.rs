//! Storage collaborators consumed by the availability engine.
//!
//! The engine only needs snapshot reads and single inserts, so each store
//! is a small capability trait. [`InMemoryBookingRepository`] and
//! [`InMemoryRoomRepository`] back tests and the default server;
//! [`JsonFileBookingRepository`] keeps bookings across restarts.

mod json_file;
mod memory;

use crate::error::BookingResult;
use crate::models::{Booking, BookingId, Room, RoomId};

pub use json_file::JsonFileBookingRepository;
pub use memory::{InMemoryBookingRepository, InMemoryRoomRepository};

/// Read and insert access to bookings.
pub trait BookingRepository: Send + Sync {
    /// Returns a snapshot of every stored booking, in insertion order.
    fn get_all(&self) -> BookingResult<Vec<Booking>>;

    /// Looks up a single booking by id.
    fn get(&self, id: BookingId) -> BookingResult<Option<Booking>>;

    /// Stores a new booking.
    ///
    /// The store assigns the id, ignoring whatever `booking.id` holds, and
    /// returns the booking as stored. The insert either fully succeeds or
    /// leaves the store untouched.
    fn add(&self, booking: Booking) -> BookingResult<Booking>;
}

/// Read access to rooms.
pub trait RoomRepository: Send + Sync {
    /// Returns a snapshot of every room, in enumeration order.
    fn get_all(&self) -> BookingResult<Vec<Room>>;

    /// Looks up a single room by id.
    fn get(&self, id: RoomId) -> BookingResult<Option<Room>>;
}
