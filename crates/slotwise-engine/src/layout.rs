//! Overlap/nesting layout for a displayed calendar day.
//!
//! Arranges a day's appointments into a recursive forest: an appointment
//! that starts strictly inside an earlier appointment's span nests under it,
//! and siblings sharing an exact start instant form side-by-side column
//! buckets. The forest drives the calendar's 2-D placement (vertical = time,
//! horizontal = overlap column); see [`crate::geometry`] for the pixel math.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::appointment::Appointment;

/// One appointment with its nested overlap forest.
///
/// `children` is grouped by distinct start instant: the outer list holds the
/// instants in chronological order, each inner list the same-instant columns
/// in last-found-first order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapGroup {
    pub appointment: Appointment,
    pub children: Vec<Vec<OverlapGroup>>,
}

/// The layout result for one displayed day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLayout {
    /// Root forest, bucketed by start instant like `OverlapGroup::children`.
    pub groups: Vec<Vec<OverlapGroup>>,
    /// Ids of appointments excluded because a timestamp was missing. Surfaced
    /// for the caller to log; never aborts the layout.
    pub skipped: Vec<String>,
}

/// Intermediate parent/child tree before start-time bucketing.
struct Node<'a> {
    appointment: &'a Appointment,
    children: Vec<Node<'a>>,
}

/// Build the overlap forest for one day's appointment snapshot.
///
/// Processing order matters and follows the source order of `appointments`:
/// the first appointment whose span contains a later start claims it, and a
/// claimed appointment recursively claims its own children from the same
/// full list. The claimed set also covers roots, so an id can never appear
/// twice in the forest even if the snapshot repeats it.
///
/// Pure function of the snapshot: the same input always yields a
/// structurally identical forest.
pub fn layout_day(appointments: &[Appointment]) -> DayLayout {
    let mut skipped = Vec::new();
    let mut positionable: Vec<&Appointment> = Vec::new();
    for appointment in appointments {
        if appointment.span().is_some() {
            positionable.push(appointment);
        } else {
            skipped.push(appointment.id.clone());
        }
    }

    let mut placed: HashSet<&str> = HashSet::new();
    let mut roots: Vec<Node<'_>> = Vec::new();
    for &appointment in &positionable {
        if placed.contains(appointment.id.as_str()) {
            continue;
        }
        placed.insert(appointment.id.as_str());
        roots.push(claim_children(appointment, &positionable, &mut placed));
    }

    DayLayout {
        groups: group_by_start(roots),
        skipped,
    }
}

/// Claim every not-yet-placed appointment that starts strictly inside
/// `parent`'s span, recursing so each child gathers its own children from
/// the same full list.
///
/// Strictly inside means after the parent's start and before its end: an
/// appointment sharing the parent's exact start is a sibling column, and one
/// that merely overlaps without starting inside stays an unrelated root.
fn claim_children<'a>(
    parent: &'a Appointment,
    pool: &[&'a Appointment],
    placed: &mut HashSet<&'a str>,
) -> Node<'a> {
    let mut node = Node {
        appointment: parent,
        children: Vec::new(),
    };
    let Some((parent_start, parent_end)) = parent.span() else {
        return node;
    };

    for &candidate in pool {
        if placed.contains(candidate.id.as_str()) {
            continue;
        }
        let Some((candidate_start, _)) = candidate.span() else {
            continue;
        };
        if candidate_start > parent_start && candidate_start < parent_end {
            placed.insert(candidate.id.as_str());
            node.children.push(claim_children(candidate, pool, placed));
        }
    }

    node
}

/// Bucket sibling nodes by exactly-equal start instant and recurse into
/// their children. Distinct instants come out chronologically; columns
/// within a bucket reverse their encounter order for display. An empty
/// sibling list yields an empty forest.
fn group_by_start(nodes: Vec<Node<'_>>) -> Vec<Vec<OverlapGroup>> {
    let mut keyed: Vec<(DateTime<Utc>, OverlapGroup)> = Vec::with_capacity(nodes.len());
    for node in nodes {
        let Some((start, _)) = node.appointment.span() else {
            continue;
        };
        keyed.push((
            start,
            OverlapGroup {
                appointment: node.appointment.clone(),
                children: group_by_start(node.children),
            },
        ));
    }

    // Stable sort: equal starts keep their encounter order, which the
    // per-bucket reverse below then flips.
    keyed.sort_by_key(|&(start, _)| start);

    let mut buckets: Vec<(DateTime<Utc>, Vec<OverlapGroup>)> = Vec::new();
    for (start, group) in keyed {
        match buckets.last_mut() {
            Some((bucket_start, bucket)) if *bucket_start == start => bucket.push(group),
            _ => buckets.push((start, vec![group])),
        }
    }

    buckets
        .into_iter()
        .map(|(_, mut bucket)| {
            bucket.reverse();
            bucket
        })
        .collect()
}
