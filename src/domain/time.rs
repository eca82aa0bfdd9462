//! Interval arithmetic over half-open time windows `[start, end)`.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::Rejection;
use crate::config::MINUTES_PER_HOUR;

/// A half-open time window `[start, end)`.
///
/// Touching windows (`a.end == b.start`) do not overlap, so back-to-back
/// bookings are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// True iff the windows share at least one instant.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// True iff `other` lies entirely within this window.
    pub fn contains(&self, other: &TimeWindow) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// True iff `start < end`.
    pub fn is_ordered(&self) -> bool {
        self.start < self.end
    }

    /// Window duration in minutes.
    ///
    /// Fails with `InvalidInterval` when `start > end`; equality is the
    /// caller's separate concern and yields `0.0`.
    pub fn duration_minutes(&self) -> Result<f64, Rejection> {
        minutes_between(self.start, self.end)
    }

    /// Window duration in hours.
    pub fn duration_hours(&self) -> Result<f64, Rejection> {
        Ok(self.duration_minutes()? / MINUTES_PER_HOUR)
    }

    /// The calendar day containing `ts`, from midnight to the last
    /// representable instant of that day.
    ///
    /// The upper bound is inclusive by construction, which is what the
    /// daily-quota queries rely on.
    pub fn day_bounds(ts: DateTime<Utc>) -> TimeWindow {
        let start = ts.date_naive().and_time(NaiveTime::MIN).and_utc();
        let end = start + Duration::days(1) - Duration::microseconds(1);
        TimeWindow { start, end }
    }
}

/// Minutes between two timestamps, as a fraction for sub-minute precision.
pub fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<f64, Rejection> {
    if start > end {
        return Err(Rejection::InvalidInterval);
    }
    Ok((end - start).num_milliseconds() as f64 / 60_000.0)
}

/// Format a duration in minutes as a human-readable string, e.g. "1h 30min".
pub fn format_duration_minutes(minutes: f64) -> String {
    let hours = (minutes / 60.0).floor() as i64;
    let remaining = (minutes % 60.0).floor() as i64;

    match (hours, remaining) {
        (0, m) => format!("{}min", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}min", h, m),
    }
}
