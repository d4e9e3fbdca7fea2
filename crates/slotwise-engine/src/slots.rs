//! Availability-to-slot computation.
//!
//! Converts an event type's weekly availability window (owner timezone) into
//! the concrete bookable slots for one calendar day, displayed in the
//! visitor's timezone, with past times and booked conflicts removed.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::appointment::Appointment;
use crate::availability::{self, DayOfWeek, WeeklyRule};
use crate::dst;
use crate::error::{Result, ScheduleError};

/// A bookable event template. Read-only input to the slot computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventType {
    pub title: String,
    pub location: String,
    /// Length of one booked slot, in minutes. Must be positive.
    pub duration_minutes: u32,
    /// IANA identifier of the timezone the weekly offsets are defined in.
    pub timezone: String,
}

/// One bookable time offered to a visitor. Ephemeral; recomputed per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// The absolute start instant. The booking write path derives the end as
    /// `start + duration`.
    pub start: DateTime<Utc>,
    /// Minutes since the visitor-local midnight of the target date. Stable
    /// selection identifier; can exceed 1439 when the owner's window spills
    /// past the visitor's midnight.
    pub offset_minutes: i64,
    /// e.g. "2:30pm"
    pub display_12h: String,
    /// e.g. "14:30"
    pub display_24h: String,
}

fn parse_timezone(identifier: &str) -> Result<Tz> {
    identifier
        .parse()
        .map_err(|_| ScheduleError::InvalidTimezone(identifier.to_string()))
}

/// Compute the bookable slots for `target_date`, the calendar date the
/// visitor picked (interpreted in the visitor's local calendar).
///
/// The window is anchored at the owner-local midnight of `target_date`; the
/// rule's offsets are added as absolute durations, so on a DST transition
/// day the window follows the elapsed-time reading of the configuration
/// rather than re-resolving the wall clock.
///
/// `booked` may be any superset of the appointments near the window; slots
/// are filtered by absolute-instant overlap against each appointment's
/// half-open span, never by date equality. Appointments missing a timestamp
/// cannot conflict and are skipped.
///
/// # Errors
/// `InvalidTimezone` for an unknown owner or visitor identifier,
/// `InvalidAvailability` for a malformed rule set, `InvalidDuration` for a
/// zero-length event. A day with no availability is `Ok` and empty.
pub fn compute_available_slots(
    event: &EventType,
    rules: &[WeeklyRule],
    target_date: NaiveDate,
    visitor_timezone: &str,
    booked: &[Appointment],
    now: DateTime<Utc>,
) -> Result<Vec<Slot>> {
    if event.duration_minutes == 0 {
        return Err(ScheduleError::InvalidDuration(event.duration_minutes));
    }
    availability::validate_rules(rules)?;

    let owner_tz = parse_timezone(&event.timezone)?;
    let visitor_tz = parse_timezone(visitor_timezone)?;

    let selected_day = DayOfWeek::from_date(target_date);
    let Some(rule) = rules.iter().find(|rule| rule.day == selected_day) else {
        return Ok(Vec::new());
    };
    if !rule.enabled {
        return Ok(Vec::new());
    }

    let owner_midnight = dst::local_midnight(target_date, owner_tz);
    let window_start = owner_midnight + Duration::minutes(i64::from(rule.start_minutes));
    let window_end = owner_midnight + Duration::minutes(i64::from(rule.end_minutes));
    let duration = Duration::minutes(i64::from(event.duration_minutes));

    let visitor_midnight = dst::local_midnight(target_date, visitor_tz);
    let visitor_today = now.with_timezone(&visitor_tz).date_naive();

    let mut slots = Vec::new();
    let mut candidate = window_start;

    // A slot ending exactly at the window end is valid; the first candidate
    // that would overrun stops the walk, so partial trailing slots are never
    // emitted.
    while candidate + duration <= window_end {
        let local = candidate.with_timezone(&visitor_tz);

        // Past times are filtered only when the candidate falls on the
        // visitor's current local date; other dates are unreachable through
        // the picker and need no handling.
        let past = candidate < now && local.date_naive() == visitor_today;

        let conflicts = booked.iter().any(|appointment| {
            appointment.span().is_some_and(|(starts_at, ends_at)| {
                candidate < ends_at && candidate + duration > starts_at
            })
        });

        if !past && !conflicts {
            slots.push(Slot {
                start: candidate,
                offset_minutes: (candidate - visitor_midnight).num_minutes(),
                display_12h: local.format("%-I:%M%P").to_string(),
                display_24h: local.format("%H:%M").to_string(),
            });
        }

        candidate += duration;
    }

    Ok(slots)
}
