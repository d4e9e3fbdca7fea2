//! Pixel/percent placement for a layout forest.
//!
//! Flattens the nested [`OverlapGroup`] forest into flat blocks for one
//! displayed day column: vertical position maps elapsed hours to pixels,
//! horizontal position splits a bucket's width across its same-start columns
//! and insets nested groups into a staircase.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::layout::OverlapGroup;

/// Vertical scale of the day column.
pub const PIXELS_PER_HOUR: f64 = 40.0;
/// Height of the sticky day header above the first hour line.
pub const DAY_HEADER_PX: f64 = 80.0;
/// Left edge of root-level blocks, percent of the column width.
pub const ROOT_LEFT_PCT: f64 = 5.0;
/// Width available to root-level blocks, percent of the column width.
pub const ROOT_WIDTH_PCT: f64 = 90.0;
/// Horizontal inset applied at each nesting level, percent.
pub const NEST_INSET_PCT: f64 = 5.0;

/// One appointment's rectangle within the day column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedBlock {
    pub appointment_id: String,
    pub left_pct: f64,
    pub width_pct: f64,
    pub top_px: f64,
    pub height_px: f64,
}

/// Flatten a day's layout forest into placed blocks.
///
/// `day_start` is the displayed day's start instant; spans crossing either
/// midnight are clipped to the visible 24 hours, so a block never extends
/// outside its column.
pub fn place_blocks(groups: &[Vec<OverlapGroup>], day_start: DateTime<Utc>) -> Vec<PlacedBlock> {
    let day_end = day_start + Duration::days(1);
    let mut blocks = Vec::new();
    for bucket in groups {
        place_bucket(
            bucket,
            ROOT_LEFT_PCT,
            ROOT_WIDTH_PCT,
            day_start,
            day_end,
            &mut blocks,
        );
    }
    blocks
}

fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_minutes() as f64 / 60.0
}

fn place_bucket(
    bucket: &[OverlapGroup],
    left_pct: f64,
    width_pct: f64,
    day_start: DateTime<Utc>,
    day_end: DateTime<Utc>,
    blocks: &mut Vec<PlacedBlock>,
) {
    let columns = bucket.len() as f64;
    for (index, group) in bucket.iter().enumerate() {
        let Some((starts_at, ends_at)) = group.appointment.span() else {
            continue;
        };

        let visible_start = starts_at.max(day_start);
        let visible_end = ends_at.min(day_end);

        let column_left = left_pct + index as f64 * width_pct / columns;
        blocks.push(PlacedBlock {
            appointment_id: group.appointment.id.clone(),
            left_pct: column_left,
            width_pct: width_pct / columns,
            top_px: DAY_HEADER_PX + PIXELS_PER_HOUR * hours_between(day_start, visible_start),
            height_px: PIXELS_PER_HOUR * hours_between(visible_start, visible_end).max(0.0),
        });

        // Nested buckets inset and shrink, producing the staircase as depth
        // increases.
        let child_left = column_left + NEST_INSET_PCT;
        let child_width = width_pct - NEST_INSET_PCT - index as f64 * width_pct / columns;
        for child_bucket in &group.children {
            place_bucket(
                child_bucket,
                child_left,
                child_width,
                day_start,
                day_end,
                blocks,
            );
        }
    }
}
