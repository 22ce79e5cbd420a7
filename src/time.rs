//! Epoch and day-count helpers.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

pub type JulianDay = f64;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Day of J2000.0 (2000-01-01T12:00:00 UTC).
pub const J2000_JULIAN_DAY: JulianDay = 2_451_545.0;

/// The reference epoch, J2000.0.
pub fn j2000() -> DateTime<Utc> {
    // 2000-01-01T12:00:00Z
    DateTime::<Utc>::from_timestamp(946_728_000, 0).unwrap_or_default()
}

/// Fractional days elapsed from J2000.0 to `instant`; negative before the epoch.
pub fn days_since_j2000(instant: DateTime<Utc>) -> f64 {
    let elapsed = instant.signed_duration_since(j2000());
    elapsed.num_milliseconds() as f64 / MILLIS_PER_DAY
}

pub fn date_to_julian_day(date_time: DateTime<Utc>) -> JulianDay {
    J2000_JULIAN_DAY + days_since_j2000(date_time)
}

/// Inverse of [`date_to_julian_day`], to millisecond resolution. Saturates at
/// the edges of the representable range.
pub fn julian_day_to_date(jd: JulianDay) -> DateTime<Utc> {
    let millis = ((jd - J2000_JULIAN_DAY) * MILLIS_PER_DAY).round();
    let delta = TimeDelta::try_milliseconds(millis as i64).unwrap_or(if millis < 0.0 {
        TimeDelta::MIN
    } else {
        TimeDelta::MAX
    });
    j2000()
        .checked_add_signed(delta)
        .unwrap_or_else(|| if millis < 0.0 { DateTime::<Utc>::MIN_UTC } else { DateTime::<Utc>::MAX_UTC })
}

/// Builds a UTC instant from calendar fields, `None` when they do not form a real date.
pub fn utc_datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second).single()
}
