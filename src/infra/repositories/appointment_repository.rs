//! Appointment repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Appointment, TimeWindow};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Data access for appointments.
///
/// Every `find_active_*` query applies the active-appointment predicate
/// (`!is_deleted && status != Cancelled`) and half-open interval overlap
/// against the given window. Implementations must keep those two filters
/// consistent with [`Appointment::is_active`] and [`TimeWindow::overlaps`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Active appointments on a room overlapping the window
    async fn find_active_by_room_and_window(
        &self,
        room_id: Uuid,
        window: TimeWindow,
    ) -> AppResult<Vec<Appointment>>;

    /// Active appointments of a student overlapping the window
    async fn find_active_by_student_and_window(
        &self,
        student_id: Uuid,
        window: TimeWindow,
    ) -> AppResult<Vec<Appointment>>;

    /// Active appointments of a supervisor overlapping the window
    async fn find_active_by_supervisor_and_window(
        &self,
        supervisor_id: Uuid,
        window: TimeWindow,
    ) -> AppResult<Vec<Appointment>>;

    /// Persist a new appointment. Used by the booking seam only, after a
    /// successful validation pass under the resource locks.
    async fn insert(&self, appointment: Appointment) -> AppResult<Appointment>;
}
