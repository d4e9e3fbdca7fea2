//! # slotwise-engine
//!
//! Timezone-correct slot computation and calendar overlap layout for
//! scheduling/booking pages.
//!
//! The engine turns an event owner's weekly availability (minute offsets in
//! the owner's IANA timezone) into the concrete bookable slots a visitor
//! sees for a calendar day in their own timezone, and arranges a day's
//! booked appointments into the nested column structure the calendar view
//! renders. Both computations are pure functions over an immutable snapshot:
//! no I/O, no locks, safe to run concurrently per request.
//!
//! ## Modules
//!
//! - [`slots`] — weekly availability + bookings → ordered bookable [`Slot`]s
//! - [`layout`] — day's appointments → nested [`OverlapGroup`] forest
//! - [`geometry`] — layout forest → flat pixel/percent [`PlacedBlock`]s
//! - [`availability`] — weekly rules, validation, date-picker helpers
//! - [`appointment`] — the read-only appointment snapshot record
//! - [`dst`] — local-midnight resolution across DST transitions
//! - [`error`] — error types
//!
//! A slot computed as available may still race with a concurrent booking;
//! at-most-once booking is the storage write path's guarantee, not the
//! engine's.

pub mod appointment;
pub mod availability;
pub mod dst;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod slots;

pub use appointment::Appointment;
pub use availability::{first_available_date, validate_rules, DayOfWeek, WeeklyRule};
pub use error::ScheduleError;
pub use geometry::{place_blocks, PlacedBlock};
pub use layout::{layout_day, DayLayout, OverlapGroup};
pub use slots::{compute_available_slots, EventType, Slot};
