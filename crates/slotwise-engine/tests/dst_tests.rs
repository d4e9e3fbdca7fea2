//! Tests for local-midnight resolution across DST transitions.

use chrono::{NaiveDate, TimeZone, Utc};
use slotwise_engine::dst::{local_midnight, resolve_local};

#[test]
fn plain_midnight_resolves_directly() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
    let midnight = local_midnight(date, chrono_tz::America::New_York);
    // EDT is UTC-4 after the Mar 8 transition.
    assert_eq!(
        midnight,
        Utc.with_ymd_and_hms(2026, 3, 16, 4, 0, 0).unwrap()
    );
}

#[test]
fn utc_midnight_is_identity() {
    let date = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
    let midnight = local_midnight(date, chrono_tz::UTC);
    assert_eq!(midnight, Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap());
}

#[test]
fn spring_forward_gap_shifts_to_first_valid_time() {
    // Sao Paulo started DST at midnight historically: 2017-10-15 00:00 did
    // not exist, clocks jumped straight to 01:00.
    let date = NaiveDate::from_ymd_opt(2017, 10, 15).unwrap();
    let midnight = local_midnight(date, chrono_tz::America::Sao_Paulo);
    // 01:00 BRST = UTC-2 -> 03:00 UTC.
    assert_eq!(
        midnight,
        Utc.with_ymd_and_hms(2017, 10, 15, 3, 0, 0).unwrap()
    );
}

#[test]
fn fold_resolves_to_earliest_instant() {
    // US fall-back 2026-11-01: 01:30 happens twice in New York.
    let naive = NaiveDate::from_ymd_opt(2026, 11, 1)
        .unwrap()
        .and_hms_opt(1, 30, 0)
        .unwrap();
    let instant = resolve_local(naive, chrono_tz::America::New_York);
    // Earliest occurrence is still EDT (UTC-4).
    assert_eq!(
        instant,
        Utc.with_ymd_and_hms(2026, 11, 1, 5, 30, 0).unwrap()
    );
}
