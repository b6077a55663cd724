//! Core data models for the hotel booking engine.
//!
//! This module contains the domain models used throughout the engine.

mod booking;
mod date_range;
mod room;

pub use booking::{Booking, BookingId, CustomerId, NewBooking};
pub use date_range::DateRange;
pub use room::{Room, RoomId};
