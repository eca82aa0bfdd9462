//! Conflict detection across the three resource dimensions.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{ConflictDescriptor, ResourceKind, TimeWindow};
use crate::errors::AppResult;
use crate::infra::AppointmentRepository;

/// Detects double-bookings for a requested window.
///
/// Pure read-only component: it queries the repository and never writes.
pub struct ConflictDetector {
    appointments: Arc<dyn AppointmentRepository>,
}

impl ConflictDetector {
    pub fn new(appointments: Arc<dyn AppointmentRepository>) -> Self {
        Self { appointments }
    }

    /// Check the room, student and supervisor dimensions independently.
    ///
    /// All three are always checked, never short-circuited, so the caller
    /// gets a complete diagnostic even when several resources conflict at
    /// once. Returns one descriptor per conflicting dimension.
    pub async fn check_conflicts(
        &self,
        window: TimeWindow,
        room_id: Uuid,
        student_id: Uuid,
        supervisor_id: Uuid,
    ) -> AppResult<Vec<ConflictDescriptor>> {
        let (room, student, supervisor) = tokio::try_join!(
            self.appointments.find_active_by_room_and_window(room_id, window),
            self.appointments
                .find_active_by_student_and_window(student_id, window),
            self.appointments
                .find_active_by_supervisor_and_window(supervisor_id, window),
        )?;

        let mut conflicts = Vec::new();
        for (resource, overlapping) in [
            (ResourceKind::Room, room),
            (ResourceKind::Student, student),
            (ResourceKind::Supervisor, supervisor),
        ] {
            if !overlapping.is_empty() {
                conflicts.push(ConflictDescriptor {
                    resource,
                    count: overlapping.len(),
                });
            }
        }

        if !conflicts.is_empty() {
            tracing::warn!(window_start = %window.start, ?conflicts, "scheduling conflicts detected");
        }

        Ok(conflicts)
    }
}
