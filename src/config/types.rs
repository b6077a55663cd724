//! Configuration types for the hotel.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::path::PathBuf;

use serde::Deserialize;

use crate::models::Room;

/// Metadata about the hotel.
#[derive(Debug, Clone, Deserialize)]
pub struct HotelMetadata {
    /// The hotel's display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// File to persist bookings in. Bookings are kept in memory only when absent.
    #[serde(default)]
    pub bookings_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            bookings_file: None,
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

/// Structure of hotel.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct HotelFile {
    /// Hotel metadata.
    pub hotel: HotelMetadata,
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Structure of rooms.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomsFile {
    /// The rooms, in the order availability checks try them.
    pub rooms: Vec<Room>,
}

/// The complete hotel configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct HotelConfig {
    metadata: HotelMetadata,
    server: ServerConfig,
    rooms: Vec<Room>,
}

impl HotelConfig {
    /// Creates a new HotelConfig from its component parts.
    pub fn new(metadata: HotelMetadata, server: ServerConfig, rooms: Vec<Room>) -> Self {
        Self {
            metadata,
            server,
            rooms,
        }
    }

    /// Returns the hotel metadata.
    pub fn hotel(&self) -> &HotelMetadata {
        &self.metadata
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns the configured rooms in enumeration order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}
