//! The appointment snapshot record shared by slot computation and layout.
//!
//! The storage layer owns appointments; the engine only ever sees a read-only
//! snapshot for the relevant day(s). Timestamps are optional because the
//! backing rows are nullable -- a record missing either timestamp is a data
//! error that the layout reports instead of positioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A booked appointment as fetched from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub owner_id: Option<String>,
    pub title: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

impl Appointment {
    /// The appointment's time span, if both timestamps are present.
    ///
    /// Records without a full span cannot conflict with a slot and cannot be
    /// positioned on the calendar; every consumer goes through this method so
    /// the missing-timestamp case is decided in one place.
    pub fn span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.starts_at, self.ends_at) {
            (Some(starts_at), Some(ends_at)) => Some((starts_at, ends_at)),
            _ => None,
        }
    }
}
