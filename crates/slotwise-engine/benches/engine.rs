//! Benchmarks for slot computation and overlap layout on a busy day.

use std::hint::black_box;

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use slotwise_engine::appointment::Appointment;
use slotwise_engine::availability::{DayOfWeek, WeeklyRule};
use slotwise_engine::layout::layout_day;
use slotwise_engine::slots::{compute_available_slots, EventType};

fn open_week() -> Vec<WeeklyRule> {
    DayOfWeek::ALL
        .into_iter()
        .map(|day| WeeklyRule::new(day, 480, 1200))
        .collect()
}

/// A day packed with back-to-back and nested appointments.
fn busy_day() -> Vec<Appointment> {
    let midnight = Utc.with_ymd_and_hms(2026, 3, 16, 0, 0, 0).unwrap();
    (0..40)
        .map(|i| {
            let offset = 480 + i * 15;
            Appointment {
                id: format!("appointment-{}", i),
                owner_id: Some("owner-1".to_string()),
                title: None,
                starts_at: Some(midnight + Duration::minutes(offset)),
                ends_at: Some(midnight + Duration::minutes(offset + 30 + (i % 4) * 30)),
            }
        })
        .collect()
}

fn bench_slots(c: &mut Criterion) {
    let event = EventType {
        title: "Intro call".to_string(),
        location: "Video".to_string(),
        duration_minutes: 30,
        timezone: "America/New_York".to_string(),
    };
    let rules = open_week();
    let booked = busy_day();
    let target = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
    let now = Utc.with_ymd_and_hms(2026, 3, 16, 12, 0, 0).unwrap();

    c.bench_function("compute_available_slots/busy_day", |b| {
        b.iter(|| {
            compute_available_slots(
                black_box(&event),
                black_box(&rules),
                black_box(target),
                black_box("Asia/Tokyo"),
                black_box(&booked),
                black_box(now),
            )
        })
    });
}

fn bench_layout(c: &mut Criterion) {
    let snapshot = busy_day();

    c.bench_function("layout_day/busy_day", |b| {
        b.iter(|| layout_day(black_box(&snapshot)))
    });
}

criterion_group!(benches, bench_slots, bench_layout);
criterion_main!(benches);
