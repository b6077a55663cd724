//! Configuration loading and management for the hotel booking engine.
//!
//! This module loads the hotel configuration from YAML files: hotel
//! metadata, server settings, and the list of rooms.
//!
//! # Example
//!
//! ```no_run
//! use hotel_booking::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hotel").unwrap();
//! println!("Loaded hotel: {}", config.hotel().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HotelMetadata, ServerConfig};
