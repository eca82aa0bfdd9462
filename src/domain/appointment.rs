//! Appointment entity and status enumeration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time::TimeWindow;
use crate::config::MINUTES_PER_HOUR;

/// Appointment lifecycle status.
///
/// `Scheduled` is the initial state. No transition graph is enforced on
/// updates; any status may overwrite any other (intentional leniency in the
/// current rules, revisit if stricter lifecycle handling is required).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::InProgress => "in_progress",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::NoShow => "no_show",
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A booked appointment consuming a room, a student and a supervisor
/// simultaneously, for one patient.
///
/// Holds references only; it does not own the referenced entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    /// Soft delete flag
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub room_id: Uuid,
    pub patient_id: Uuid,
    pub student_id: Uuid,
    pub supervisor_id: Uuid,
}

impl Appointment {
    /// Create a new scheduled appointment for the given window and resources.
    pub fn new(
        window: TimeWindow,
        room_id: Uuid,
        patient_id: Uuid,
        student_id: Uuid,
        supervisor_id: Uuid,
        notes: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            start: window.start,
            end: window.end,
            status: AppointmentStatus::Scheduled,
            notes,
            is_deleted: false,
            created_at: now,
            updated_at: now,
            room_id,
            patient_id,
            student_id,
            supervisor_id,
        }
    }

    /// The active-appointment predicate used by every conflict and quota
    /// query site. Keep this the single source of truth so the filters
    /// cannot drift apart.
    pub fn is_active(&self) -> bool {
        !self.is_deleted && self.status != AppointmentStatus::Cancelled
    }

    /// The appointment's booked window.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start, self.end)
    }

    /// Booked duration in minutes. Persisted rows always satisfy
    /// `start < end`.
    pub fn duration_minutes(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 60_000.0
    }

    /// Booked duration in hours.
    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes() / MINUTES_PER_HOUR
    }

    /// Cancel the appointment; it stops participating in conflict and
    /// quota calculations.
    pub fn cancel(&mut self) {
        self.status = AppointmentStatus::Cancelled;
        self.updated_at = Utc::now();
    }

    /// Soft delete the appointment.
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
        self.updated_at = Utc::now();
    }
}
