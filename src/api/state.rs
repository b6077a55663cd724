//! Application state for the hotel booking API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::availability::BookingManager;

/// Shared application state.
///
/// Holds the booking manager that every handler queries. All requests go
/// through the same manager so its booking lock covers every writer.
#[derive(Clone)]
pub struct AppState {
    manager: Arc<BookingManager>,
}

impl AppState {
    /// Creates a new application state around the given manager.
    pub fn new(manager: BookingManager) -> Self {
        Self {
            manager: Arc::new(manager),
        }
    }

    /// Returns a reference to the booking manager.
    pub fn manager(&self) -> &BookingManager {
        &self.manager
    }

    /// Returns an owned handle to the manager, for work moved off the
    /// async runtime.
    pub fn shared_manager(&self) -> Arc<BookingManager> {
        Arc::clone(&self.manager)
    }
}
