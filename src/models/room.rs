//! Room model.

use serde::{Deserialize, Serialize};

/// Identifier of a room, unique and stable for the room's lifetime.
pub type RoomId = u32;

/// A bookable room.
///
/// Rooms are immutable once created; their lifecycle belongs to the room
/// store, not to the availability engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for the room.
    pub id: RoomId,
    /// Human-readable label (e.g., "A", "Sea view double").
    pub description: String,
}

impl Room {
    /// Creates a room with the given id and description.
    pub fn new(id: RoomId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_room() {
        let json = r#"{ "id": 7, "description": "Garden suite" }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room, Room::new(7, "Garden suite"));
    }

    #[test]
    fn test_deserialize_room_missing_description_fails() {
        let json = r#"{ "id": 7 }"#;
        assert!(serde_json::from_str::<Room>(json).is_err());
    }
}
