//! Validation outcome taxonomy.
//!
//! Business-rule rejections are terminal outcomes surfaced verbatim to the
//! caller; none are retried internally. Infrastructure failures are carried
//! by [`crate::errors::AppError`] instead and propagate untranslated.

use serde::Serialize;
use thiserror::Error;

/// A resource dimension checked independently for double-booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Room,
    Student,
    Supervisor,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Room => write!(f, "room"),
            ResourceKind::Student => write!(f, "student"),
            ResourceKind::Supervisor => write!(f, "supervisor"),
        }
    }
}

/// One conflicting resource dimension and how many active appointments
/// overlap the requested window on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConflictDescriptor {
    pub resource: ResourceKind,
    pub count: usize,
}

impl std::fmt::Display for ConflictDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.resource {
            ResourceKind::Room => write!(f, "room occupied ({} appointments)", self.count),
            ResourceKind::Student => {
                write!(f, "student unavailable ({} appointments)", self.count)
            }
            ResourceKind::Supervisor => {
                write!(f, "supervisor unavailable ({} appointments)", self.count)
            }
        }
    }
}

fn join_conflicts(conflicts: &[ConflictDescriptor]) -> String {
    conflicts
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Business-rule rejection of a booking request.
///
/// Role mismatch is reported as the same `*Unavailable` kind as missing or
/// inactive; the caller cannot distinguish the cases from the kind alone.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("End time must be after start time")]
    InvalidInterval,

    #[error("Appointment duration must be between {min} and {max} minutes (got {minutes:.0})")]
    DurationOutOfRange { minutes: f64, min: i64, max: i64 },

    #[error("Room not found or inactive")]
    RoomUnavailable,

    #[error("Patient not found or inactive")]
    PatientUnavailable,

    #[error("Student not found or inactive")]
    StudentUnavailable,

    #[error("Supervisor not found or inactive")]
    SupervisorUnavailable,

    #[error("Scheduling conflict detected: {}", join_conflicts(.0))]
    Conflict(Vec<ConflictDescriptor>),

    #[error("Student has reached the limit of {limit}h per day (booked: {booked_hours:.1}h)")]
    DailyLimitExceeded { booked_hours: f64, limit: i64 },
}

impl Rejection {
    /// Stable machine-readable code for clients and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Rejection::InvalidInterval => "INVALID_INTERVAL",
            Rejection::DurationOutOfRange { .. } => "DURATION_OUT_OF_RANGE",
            Rejection::RoomUnavailable => "ROOM_UNAVAILABLE",
            Rejection::PatientUnavailable => "PATIENT_UNAVAILABLE",
            Rejection::StudentUnavailable => "STUDENT_UNAVAILABLE",
            Rejection::SupervisorUnavailable => "SUPERVISOR_UNAVAILABLE",
            Rejection::Conflict(_) => "CONFLICT",
            Rejection::DailyLimitExceeded { .. } => "DAILY_LIMIT_EXCEEDED",
        }
    }
}

/// Outcome of a validation pass. Read-only: an approved result performs no
/// write, persistence stays with the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Approved,
    Rejected(Rejection),
}

impl ValidationResult {
    pub fn is_approved(&self) -> bool {
        matches!(self, ValidationResult::Approved)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ValidationResult::Approved => None,
            ValidationResult::Rejected(r) => Some(r),
        }
    }
}
