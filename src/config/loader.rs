//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading hotel
//! configurations from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{BookingError, BookingResult};
use crate::models::{Room, RoomId};
use crate::repository::InMemoryRoomRepository;

use super::types::{HotelConfig, HotelFile, HotelMetadata, RoomsFile, ServerConfig};

/// Loads and provides access to hotel configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/hotel/
/// ├── hotel.yaml   # Hotel metadata and server settings
/// └── rooms.yaml   # Rooms, in the order they are offered
/// ```
///
/// # Example
///
/// ```no_run
/// use hotel_booking::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/hotel")?;
/// println!("{} has {} rooms", loader.hotel().name, loader.rooms().len());
/// # Ok::<(), hotel_booking::error::BookingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: HotelConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Two rooms share an id
    pub fn load<P: AsRef<Path>>(path: P) -> BookingResult<Self> {
        let path = path.as_ref();

        let hotel_file = Self::load_yaml::<HotelFile>(&path.join("hotel.yaml"))?;
        let rooms_file = Self::load_yaml::<RoomsFile>(&path.join("rooms.yaml"))?;

        Self::check_unique_ids(&rooms_file.rooms)?;
        if rooms_file.rooms.is_empty() {
            warn!(path = %path.display(), "No rooms configured, every date will be unavailable");
        }

        let mut server = hotel_file.server;
        if let Some(file) = server.bookings_file.take() {
            // Relative booking files live next to the configuration.
            server.bookings_file = Some(if file.is_relative() {
                path.join(file)
            } else {
                file
            });
        }

        let config = HotelConfig::new(hotel_file.hotel, server, rooms_file.rooms);
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> BookingResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| BookingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| BookingError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check_unique_ids(rooms: &[Room]) -> BookingResult<()> {
        let mut seen: HashSet<RoomId> = HashSet::new();
        for room in rooms {
            if !seen.insert(room.id) {
                return Err(BookingError::InvalidConfig {
                    message: format!("duplicate room id {}", room.id),
                });
            }
        }
        Ok(())
    }

    /// Returns the hotel metadata.
    pub fn hotel(&self) -> &HotelMetadata {
        self.config.hotel()
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        self.config.server()
    }

    /// Returns the configured rooms.
    pub fn rooms(&self) -> &[Room] {
        self.config.rooms()
    }

    /// Builds a room store holding the configured rooms.
    pub fn room_repository(&self) -> InMemoryRoomRepository {
        InMemoryRoomRepository::new(self.config.rooms().to_vec())
    }
}
