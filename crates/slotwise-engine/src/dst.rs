//! Local-time resolution across DST transitions.
//!
//! Converting "midnight on this calendar date in this timezone" to an absolute
//! instant is not always a single-valued mapping: during a fall-back
//! transition the local time exists twice, and during spring-forward it may
//! not exist at all (a handful of zones have historically started DST at
//! midnight). The policy here is fixed: folds resolve to the earliest
//! instant, gaps shift forward to the first valid wall-clock time.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// The absolute instant of local midnight on `date` in `tz`.
pub fn local_midnight(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    resolve_local(date.and_time(NaiveTime::MIN), tz)
}

/// Map a naive local datetime to an instant under the gap/fold policy.
pub fn resolve_local(naive: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            // Inside a spring-forward gap. Probe forward in 15-minute steps;
            // real transition gaps are at most a couple of hours, so the
            // probe always lands well within the bound.
            let mut probe = naive;
            for _ in 0..16 {
                probe += Duration::minutes(15);
                match tz.from_local_datetime(&probe) {
                    LocalResult::Single(dt) => return dt.with_timezone(&Utc),
                    LocalResult::Ambiguous(earliest, _) => return earliest.with_timezone(&Utc),
                    LocalResult::None => continue,
                }
            }
            // Unreachable with real tzdata; fall through to the naive
            // instant so the computation stays total.
            naive.and_utc()
        }
    }
}
