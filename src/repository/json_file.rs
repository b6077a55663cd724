//! Booking store persisted to a JSON file.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{BookingError, BookingResult};
use crate::models::{Booking, BookingId};

use super::BookingRepository;
use super::memory::next_id;

/// A booking store that rewrites a JSON array of bookings on every insert.
///
/// The whole list is kept in memory and mirrored to disk. Each write goes to
/// a sibling temp file, is synced, and is then renamed over the real one, so
/// a crash mid-write leaves the previous snapshot intact. The in-memory copy is only
/// updated once the file write succeeded.
#[derive(Debug)]
pub struct JsonFileBookingRepository {
    path: PathBuf,
    bookings: RwLock<Vec<Booking>>,
}

impl JsonFileBookingRepository {
    /// Opens the store at `path`, loading existing bookings if the file exists.
    ///
    /// A missing file is treated as an empty store and is created on the
    /// first insert.
    pub fn open<P: AsRef<Path>>(path: P) -> BookingResult<Self> {
        let path = path.as_ref().to_path_buf();

        let bookings = if path.exists() {
            let content = fs::read_to_string(&path).map_err(BookingError::storage)?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content).map_err(|e| BookingError::Storage {
                    message: format!("{}: {}", path.display(), e),
                })?
            }
        } else {
            Vec::new()
        };

        debug!(path = %path.display(), count = bookings.len(), "Opened booking file");

        Ok(Self {
            path,
            bookings: RwLock::new(bookings),
        })
    }

    fn persist(&self, bookings: &[Booking]) -> BookingResult<()> {
        let json = serde_json::to_string_pretty(bookings).map_err(BookingError::storage)?;
        let tmp = self.path.with_extension("json.tmp");

        let mut file = File::create(&tmp).map_err(BookingError::storage)?;
        file.write_all(json.as_bytes()).map_err(BookingError::storage)?;
        file.sync_all().map_err(BookingError::storage)?;
        drop(file);

        fs::rename(&tmp, &self.path).map_err(BookingError::storage)
    }
}

impl BookingRepository for JsonFileBookingRepository {
    fn get_all(&self) -> BookingResult<Vec<Booking>> {
        Ok(self.bookings.read().clone())
    }

    fn get(&self, id: BookingId) -> BookingResult<Option<Booking>> {
        Ok(self.bookings.read().iter().find(|b| b.id == id).cloned())
    }

    fn add(&self, mut booking: Booking) -> BookingResult<Booking> {
        let mut bookings = self.bookings.write();
        booking.id = next_id(&bookings)?;

        let mut updated = bookings.clone();
        updated.push(booking.clone());
        self.persist(&updated)?;

        *bookings = updated;
        Ok(booking)
    }
}
