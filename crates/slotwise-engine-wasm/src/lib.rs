//! WASM bindings for slotwise-engine.
//!
//! Exposes slot computation, overlap layout, and day placement to the
//! JavaScript booking UI via `wasm-bindgen`. All complex types are passed as
//! JSON strings; field names follow the UI's camelCase conventions
//! (`startsAt`, `display12`, ...).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slotwise-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/slotwise-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slotwise_engine_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use slotwise_engine::appointment::Appointment;
use slotwise_engine::availability::{DayOfWeek, WeeklyRule};
use slotwise_engine::geometry::PlacedBlock;
use slotwise_engine::layout::{DayLayout, OverlapGroup};
use slotwise_engine::slots::{EventType, Slot};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Event type as the UI sends it.
#[derive(Deserialize)]
struct EventTypeInput {
    title: String,
    location: String,
    #[serde(rename = "durationMinutes")]
    duration_minutes: u32,
    timezone: String,
}

impl From<EventTypeInput> for EventType {
    fn from(input: EventTypeInput) -> Self {
        Self {
            title: input.title,
            location: input.location,
            duration_minutes: input.duration_minutes,
            timezone: input.timezone,
        }
    }
}

/// One weekly availability rule, using the configuration form's field names.
#[derive(Deserialize)]
struct WeeklyRuleInput {
    day: DayOfWeek,
    enabled: bool,
    #[serde(rename = "startTime")]
    start_minutes: u32,
    #[serde(rename = "endTime")]
    end_minutes: u32,
}

impl From<WeeklyRuleInput> for WeeklyRule {
    fn from(input: WeeklyRuleInput) -> Self {
        Self {
            day: input.day,
            enabled: input.enabled,
            start_minutes: input.start_minutes,
            end_minutes: input.end_minutes,
        }
    }
}

/// Appointment rows as fetched by the UI. Timestamps stay optional strings;
/// the engine decides what a missing one means.
#[derive(Deserialize)]
struct AppointmentInput {
    id: String,
    #[serde(rename = "userId", default)]
    user_id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(rename = "startsAt", default)]
    starts_at: Option<String>,
    #[serde(rename = "endsAt", default)]
    ends_at: Option<String>,
}

#[derive(Serialize)]
struct AppointmentDto {
    id: String,
    #[serde(rename = "userId")]
    user_id: Option<String>,
    title: Option<String>,
    #[serde(rename = "startsAt")]
    starts_at: Option<String>,
    #[serde(rename = "endsAt")]
    ends_at: Option<String>,
}

impl From<&Appointment> for AppointmentDto {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id.clone(),
            user_id: appointment.owner_id.clone(),
            title: appointment.title.clone(),
            starts_at: appointment.starts_at.map(|dt| dt.to_rfc3339()),
            ends_at: appointment.ends_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

#[derive(Serialize)]
struct SlotDto {
    start: String,
    offset: i64,
    display12: String,
    display24: String,
}

impl From<&Slot> for SlotDto {
    fn from(slot: &Slot) -> Self {
        Self {
            start: slot.start.to_rfc3339(),
            offset: slot.offset_minutes,
            display12: slot.display_12h.clone(),
            display24: slot.display_24h.clone(),
        }
    }
}

#[derive(Serialize)]
struct OverlapGroupDto {
    appointment: AppointmentDto,
    children: Vec<Vec<OverlapGroupDto>>,
}

impl From<&OverlapGroup> for OverlapGroupDto {
    fn from(group: &OverlapGroup) -> Self {
        Self {
            appointment: AppointmentDto::from(&group.appointment),
            children: group
                .children
                .iter()
                .map(|bucket| bucket.iter().map(OverlapGroupDto::from).collect())
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct DayLayoutDto {
    groups: Vec<Vec<OverlapGroupDto>>,
    skipped: Vec<String>,
}

impl From<&DayLayout> for DayLayoutDto {
    fn from(layout: &DayLayout) -> Self {
        Self {
            groups: layout
                .groups
                .iter()
                .map(|bucket| bucket.iter().map(OverlapGroupDto::from).collect())
                .collect(),
            skipped: layout.skipped.clone(),
        }
    }
}

#[derive(Serialize)]
struct PlacedBlockDto {
    #[serde(rename = "appointmentId")]
    appointment_id: String,
    #[serde(rename = "leftPct")]
    left_pct: f64,
    #[serde(rename = "widthPct")]
    width_pct: f64,
    #[serde(rename = "topPx")]
    top_px: f64,
    #[serde(rename = "heightPx")]
    height_px: f64,
}

impl From<&PlacedBlock> for PlacedBlockDto {
    fn from(block: &PlacedBlock) -> Self {
        Self {
            appointment_id: block.appointment_id.clone(),
            left_pct: block.left_pct,
            width_pct: block.width_pct,
            top_px: block.top_px,
            height_px: block.height_px,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2026-03-16T14:00:00Z")
/// and naive local time (e.g., "2026-03-16T14:00:00"), which is interpreted
/// as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

fn parse_appointments(json: &str) -> Result<Vec<Appointment>, JsValue> {
    let inputs: Vec<AppointmentInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid appointments JSON: {}", e)))?;

    inputs
        .into_iter()
        .map(|input| {
            Ok(Appointment {
                id: input.id,
                owner_id: input.user_id,
                title: input.title,
                starts_at: input.starts_at.as_deref().map(parse_datetime).transpose()?,
                ends_at: input.ends_at.as_deref().map(parse_datetime).transpose()?,
            })
        })
        .collect()
}

fn parse_rules(json: &str) -> Result<Vec<WeeklyRule>, JsValue> {
    let inputs: Vec<WeeklyRuleInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid availability JSON: {}", e)))?;
    Ok(inputs.into_iter().map(WeeklyRule::from).collect())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialize error: {}", e)))
}

// ---------------------------------------------------------------------------
// Exported functions
// ---------------------------------------------------------------------------

/// Compute the bookable slots for one calendar day.
///
/// - `event_json` — `{"title", "location", "durationMinutes", "timezone"}`
/// - `rules_json` — array of 7 `{"day", "enabled", "startTime", "endTime"}`
/// - `target_date` — the picked date, `"YYYY-MM-DD"` (visitor's calendar)
/// - `visitor_timezone` — IANA identifier
/// - `appointments_json` — booked appointments near the day
/// - `now` — the current instant, ISO 8601
///
/// Returns a JSON array of `{"start", "offset", "display12", "display24"}`.
#[wasm_bindgen]
pub fn compute_available_slots(
    event_json: &str,
    rules_json: &str,
    target_date: &str,
    visitor_timezone: &str,
    appointments_json: &str,
    now: &str,
) -> Result<String, JsValue> {
    let event_input: EventTypeInput = serde_json::from_str(event_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid event JSON: {}", e)))?;
    let event = EventType::from(event_input);
    let rules = parse_rules(rules_json)?;
    let date = parse_date(target_date)?;
    let booked = parse_appointments(appointments_json)?;
    let now = parse_datetime(now)?;

    let slots = slotwise_engine::compute_available_slots(
        &event,
        &rules,
        date,
        visitor_timezone,
        &booked,
        now,
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dtos: Vec<SlotDto> = slots.iter().map(SlotDto::from).collect();
    to_json(&dtos)
}

/// Build the overlap/nesting forest for one displayed day.
///
/// Returns `{"groups": [[...]], "skipped": [ids]}` where `skipped` lists
/// appointments excluded for missing timestamps.
#[wasm_bindgen]
pub fn layout_day(appointments_json: &str) -> Result<String, JsValue> {
    let appointments = parse_appointments(appointments_json)?;
    let layout = slotwise_engine::layout_day(&appointments);
    to_json(&DayLayoutDto::from(&layout))
}

/// Lay out one displayed day and flatten it to positioned blocks.
///
/// `day_start` is the day column's start instant, ISO 8601. Returns a JSON
/// array of `{"appointmentId", "leftPct", "widthPct", "topPx", "heightPx"}`.
#[wasm_bindgen]
pub fn day_blocks(appointments_json: &str, day_start: &str) -> Result<String, JsValue> {
    let appointments = parse_appointments(appointments_json)?;
    let day_start = parse_datetime(day_start)?;

    let layout = slotwise_engine::layout_day(&appointments);
    let blocks = slotwise_engine::place_blocks(&layout.groups, day_start);

    let dtos: Vec<PlacedBlockDto> = blocks.iter().map(PlacedBlockDto::from).collect();
    to_json(&dtos)
}

/// The first date the picker should pre-select, `"YYYY-MM-DD"` in and out.
/// With no enabled days the input date comes back unchanged.
#[wasm_bindgen]
pub fn first_available_date(rules_json: &str, today: &str) -> Result<String, JsValue> {
    let rules = parse_rules(rules_json)?;
    let today = parse_date(today)?;
    let first = slotwise_engine::first_available_date(today, &rules);
    Ok(first.format("%Y-%m-%d").to_string())
}
