//! Time window calculations.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// How long a raid stays eligible for notification after it started
pub const RAID_RETENTION: Duration = Duration::hours(24);

/// Start of the raid retention window relative to `now`.
///
/// Raids that started before the returned timestamp are neither tracked nor notified.
pub fn retention_cutoff(now: DateTime<Utc>) -> NaiveDateTime {
    (now - RAID_RETENTION).naive_utc()
}

/// Whether a war that started at `started` is still inside the retention window.
pub fn within_retention(started: NaiveDateTime, now: DateTime<Utc>) -> bool {
    started >= retention_cutoff(now)
}
