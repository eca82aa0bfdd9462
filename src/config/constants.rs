//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Scheduling Rules
// =============================================================================

/// Default minimum appointment duration in minutes
pub const DEFAULT_MIN_APPOINTMENT_MINUTES: i64 = 30;

/// Default maximum appointment duration in minutes
pub const DEFAULT_MAX_APPOINTMENT_MINUTES: i64 = 120;

/// Default maximum booked hours per student per calendar day
pub const DEFAULT_MAX_STUDENT_HOURS_PER_DAY: i64 = 4;

/// Default rolling window for load-balance reports, in days
pub const DEFAULT_LOAD_BALANCE_DAYS: i64 = 30;

// =============================================================================
// Time
// =============================================================================

/// Minutes per hour (for quota conversions)
pub const MINUTES_PER_HOUR: f64 = 60.0;
