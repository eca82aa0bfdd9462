//! Entity eligibility checks for booking requests.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::Rejection;
use crate::errors::AppResult;
use crate::infra::DirectoryRepository;

/// Confirms that the referenced room, patient, student and supervisor exist,
/// are active, and hold the required role.
///
/// Missing, inactive and wrong-role all map to the same `*Unavailable`
/// rejection kind; the distinction is logged but not surfaced.
pub struct EligibilityChecker {
    directory: Arc<dyn DirectoryRepository>,
}

impl EligibilityChecker {
    pub fn new(directory: Arc<dyn DirectoryRepository>) -> Self {
        Self { directory }
    }

    /// Run the four checks in booking order (room, patient, student,
    /// supervisor) and return the first failure, if any.
    pub async fn first_ineligible(
        &self,
        room_id: Uuid,
        patient_id: Uuid,
        student_id: Uuid,
        supervisor_id: Uuid,
    ) -> AppResult<Option<Rejection>> {
        if let Some(rejection) = self.check_room(room_id).await? {
            return Ok(Some(rejection));
        }
        if let Some(rejection) = self.check_patient(patient_id).await? {
            return Ok(Some(rejection));
        }
        if let Some(rejection) = self.check_student(student_id).await? {
            return Ok(Some(rejection));
        }
        if let Some(rejection) = self.check_supervisor(supervisor_id).await? {
            return Ok(Some(rejection));
        }
        Ok(None)
    }

    /// `None` when the room exists and is active.
    pub async fn check_room(&self, room_id: Uuid) -> AppResult<Option<Rejection>> {
        let room = self.directory.find_room(room_id).await?;
        match room {
            Some(room) if room.active => Ok(None),
            _ => {
                tracing::warn!(%room_id, "room not found or inactive");
                Ok(Some(Rejection::RoomUnavailable))
            }
        }
    }

    /// `None` when the patient exists and is active.
    pub async fn check_patient(&self, patient_id: Uuid) -> AppResult<Option<Rejection>> {
        let patient = self.directory.find_patient(patient_id).await?;
        match patient {
            Some(patient) if patient.active => Ok(None),
            _ => {
                tracing::warn!(%patient_id, "patient not found or inactive");
                Ok(Some(Rejection::PatientUnavailable))
            }
        }
    }

    /// `None` when the user exists, is active and holds the student role.
    pub async fn check_student(&self, student_id: Uuid) -> AppResult<Option<Rejection>> {
        let user = self.directory.find_user(student_id).await?;
        match user {
            Some(user) if user.is_eligible_student() => Ok(None),
            _ => {
                tracing::warn!(%student_id, "student not found, inactive or wrong role");
                Ok(Some(Rejection::StudentUnavailable))
            }
        }
    }

    /// `None` when the user exists, is active and holds the professor role.
    pub async fn check_supervisor(&self, supervisor_id: Uuid) -> AppResult<Option<Rejection>> {
        let user = self.directory.find_user(supervisor_id).await?;
        match user {
            Some(user) if user.is_eligible_supervisor() => Ok(None),
            _ => {
                tracing::warn!(%supervisor_id, "supervisor not found, inactive or wrong role");
                Ok(Some(Rejection::SupervisorUnavailable))
            }
        }
    }
}
