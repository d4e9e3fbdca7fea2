//! Tests for the pixel/percent placement of a layout forest.

use chrono::{DateTime, TimeZone, Utc};
use slotwise_engine::appointment::Appointment;
use slotwise_engine::geometry::{place_blocks, PlacedBlock};
use slotwise_engine::layout::layout_day;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn appt(id: &str, start: &str, end: &str) -> Appointment {
    Appointment {
        id: id.to_string(),
        owner_id: None,
        title: None,
        starts_at: Some(start.parse().unwrap()),
        ends_at: Some(end.parse().unwrap()),
    }
}

fn day_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, 0, 0, 0).unwrap()
}

fn place(appointments: &[Appointment]) -> Vec<PlacedBlock> {
    place_blocks(&layout_day(appointments).groups, day_start())
}

fn block<'a>(blocks: &'a [PlacedBlock], id: &str) -> &'a PlacedBlock {
    blocks
        .iter()
        .find(|block| block.appointment_id == id)
        .unwrap_or_else(|| panic!("no block for {}", id))
}

// ── Single block ─────────────────────────────────────────────────────────────

#[test]
fn lone_appointment_fills_the_root_column() {
    let blocks = place(&[appt("a", "2026-03-16T10:00:00Z", "2026-03-16T12:00:00Z")]);

    assert_eq!(blocks.len(), 1);
    let a = block(&blocks, "a");
    assert_eq!(a.left_pct, 5.0);
    assert_eq!(a.width_pct, 90.0);
    // Header plus ten hours at 40 px each.
    assert_eq!(a.top_px, 480.0);
    assert_eq!(a.height_px, 80.0);
}

// ── Same-start columns ───────────────────────────────────────────────────────

#[test]
fn same_start_siblings_split_the_width() {
    let blocks = place(&[
        appt("a", "2026-03-16T10:00:00Z", "2026-03-16T12:00:00Z"),
        appt("c", "2026-03-16T10:00:00Z", "2026-03-16T10:30:00Z"),
    ]);

    // Bucket order is last-found-first: c takes column 0, a column 1.
    let c = block(&blocks, "c");
    assert_eq!(c.left_pct, 5.0);
    assert_eq!(c.width_pct, 45.0);
    assert_eq!(c.height_px, 20.0);

    let a = block(&blocks, "a");
    assert_eq!(a.left_pct, 50.0);
    assert_eq!(a.width_pct, 45.0);
}

// ── Nesting ──────────────────────────────────────────────────────────────────

#[test]
fn nested_child_insets_and_shrinks() {
    let blocks = place(&[
        appt("a", "2026-03-16T10:00:00Z", "2026-03-16T12:00:00Z"),
        appt("b", "2026-03-16T10:30:00Z", "2026-03-16T11:00:00Z"),
    ]);

    let b = block(&blocks, "b");
    assert_eq!(b.left_pct, 10.0, "one inset past the root column");
    assert_eq!(b.width_pct, 85.0);
    assert_eq!(b.top_px, 500.0, "10.5 hours into the day plus the header");
    assert_eq!(b.height_px, 20.0);
}

#[test]
fn nesting_under_a_split_column_shrinks_by_the_column_offset() {
    // Two same-start parents; the child of the second (right) column insets
    // from that column and loses the column offset from its width.
    let blocks = place(&[
        appt("a", "2026-03-16T10:00:00Z", "2026-03-16T12:00:00Z"),
        appt("b", "2026-03-16T10:30:00Z", "2026-03-16T11:00:00Z"),
        appt("c", "2026-03-16T10:00:00Z", "2026-03-16T10:30:00Z"),
    ]);

    // Columns: c at index 0, a at index 1 (reversed encounter order).
    let a = block(&blocks, "a");
    assert_eq!(a.left_pct, 50.0);

    let b = block(&blocks, "b");
    assert_eq!(b.left_pct, 55.0);
    assert_eq!(b.width_pct, 90.0 - 5.0 - 45.0);
}

// ── Day-boundary clipping ────────────────────────────────────────────────────

#[test]
fn span_crossing_midnight_clips_to_the_day_end() {
    let blocks = place(&[appt("a", "2026-03-16T23:00:00Z", "2026-03-17T01:00:00Z")]);

    let a = block(&blocks, "a");
    assert_eq!(a.top_px, 80.0 + 40.0 * 23.0);
    assert_eq!(a.height_px, 40.0, "only the in-day hour is drawn");
}

#[test]
fn span_starting_before_the_day_clips_to_the_day_start() {
    let blocks = place(&[appt("a", "2026-03-15T23:00:00Z", "2026-03-16T01:00:00Z")]);

    let a = block(&blocks, "a");
    assert_eq!(a.top_px, 80.0, "drawn from the top of the day column");
    assert_eq!(a.height_px, 40.0);
}
