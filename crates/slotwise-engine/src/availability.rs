//! Weekly availability rules and the date-picker helpers derived from them.
//!
//! An event owner configures one rule per weekday: an enabled flag plus start
//! and end offsets in minutes since local midnight, expressed in the owner's
//! timezone. The rule set is immutable input to a single slot computation;
//! the event-configuration subsystem owns mutation.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Day of week as the configuration UI names it.
///
/// The serialized form is the lowercase day name; `index()` follows the
/// calendar convention (0 = Sunday .. 6 = Saturday) used for day-picker
/// alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days in configuration order (Monday first).
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Calendar index, 0 = Sunday .. 6 = Saturday.
    pub fn index(self) -> u32 {
        match self {
            DayOfWeek::Sunday => 0,
            DayOfWeek::Monday => 1,
            DayOfWeek::Tuesday => 2,
            DayOfWeek::Wednesday => 3,
            DayOfWeek::Thursday => 4,
            DayOfWeek::Friday => 5,
            DayOfWeek::Saturday => 6,
        }
    }

    /// Inverse of [`index`](Self::index).
    pub fn from_index(index: u32) -> Option<DayOfWeek> {
        Self::ALL.into_iter().find(|day| day.index() == index)
    }

    /// The weekday of a calendar date.
    pub fn from_date(date: NaiveDate) -> DayOfWeek {
        match date.weekday() {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

/// One weekday's recurring bookable window, in the owner's timezone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyRule {
    pub day: DayOfWeek,
    pub enabled: bool,
    /// Minutes since local midnight, 0..=1439.
    pub start_minutes: u32,
    /// Minutes since local midnight, up to 1440 (end of day). Must exceed
    /// `start_minutes` when the day is enabled.
    pub end_minutes: u32,
}

impl WeeklyRule {
    /// An enabled rule for `day` spanning `start..end` minutes.
    pub fn new(day: DayOfWeek, start_minutes: u32, end_minutes: u32) -> WeeklyRule {
        WeeklyRule {
            day,
            enabled: true,
            start_minutes,
            end_minutes,
        }
    }

    /// A disabled rule for `day` (offsets kept for the config UI).
    pub fn disabled(day: DayOfWeek, start_minutes: u32, end_minutes: u32) -> WeeklyRule {
        WeeklyRule {
            day,
            enabled: false,
            start_minutes,
            end_minutes,
        }
    }
}

/// Validate a weekly rule set: exactly 7 rules, one per distinct day, and
/// every enabled window well-formed.
///
/// # Errors
/// Returns `ScheduleError::InvalidAvailability` describing the first
/// violation found.
pub fn validate_rules(rules: &[WeeklyRule]) -> Result<()> {
    if rules.len() != 7 {
        return Err(ScheduleError::InvalidAvailability(format!(
            "expected 7 weekly rules, got {}",
            rules.len()
        )));
    }

    let mut seen = [false; 7];
    for rule in rules {
        let index = rule.day.index() as usize;
        if seen[index] {
            return Err(ScheduleError::InvalidAvailability(format!(
                "duplicate rule for {:?}",
                rule.day
            )));
        }
        seen[index] = true;

        if rule.start_minutes > 1439 || rule.end_minutes > 1440 {
            return Err(ScheduleError::InvalidAvailability(format!(
                "{:?} offsets out of range: {}..{}",
                rule.day, rule.start_minutes, rule.end_minutes
            )));
        }
        // Disabled days may carry stale offsets; only enabled windows must
        // be well-ordered.
        if rule.enabled && rule.start_minutes >= rule.end_minutes {
            return Err(ScheduleError::InvalidAvailability(format!(
                "{:?} enabled with start {} >= end {}",
                rule.day, rule.start_minutes, rule.end_minutes
            )));
        }
    }

    Ok(())
}

/// Calendar indices (0 = Sunday) of the enabled days, in rule order.
pub fn enabled_day_indices(rules: &[WeeklyRule]) -> Vec<u32> {
    rules
        .iter()
        .filter(|rule| rule.enabled)
        .map(|rule| rule.day.index())
        .collect()
}

/// Calendar indices (0 = Sunday) of the disabled days, in rule order.
pub fn disabled_day_indices(rules: &[WeeklyRule]) -> Vec<u32> {
    rules
        .iter()
        .filter(|rule| !rule.enabled)
        .map(|rule| rule.day.index())
        .collect()
}

/// The first date the date picker should pre-select: the next date on or
/// after `today` whose weekday is enabled, preferring a strictly later
/// weekday and wrapping to the first enabled rule otherwise.
///
/// With no enabled days `today` is returned unchanged -- the caller renders
/// an empty picker rather than searching forever.
pub fn first_available_date(today: NaiveDate, rules: &[WeeklyRule]) -> NaiveDate {
    let enabled = enabled_day_indices(rules);
    let Some(&first) = enabled.first() else {
        return today;
    };

    let day_index = DayOfWeek::from_date(today).index();
    let next = enabled
        .iter()
        .copied()
        .find(|&day| day > day_index)
        .unwrap_or(first);

    let diff = if next >= day_index {
        next - day_index
    } else {
        7 - (day_index - next)
    };

    today + Duration::days(i64::from(diff))
}
