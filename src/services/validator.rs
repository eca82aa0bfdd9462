//! Appointment creation validation.
//!
//! Orchestrates duration bounds, entity eligibility, conflict detection and
//! the daily-quota rule into a single pass/fail decision with a specific
//! reason. Read-only: persistence is the caller's responsibility (see
//! [`crate::services::BookingService`] for the hardened seam).

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::conflict::ConflictDetector;
use super::eligibility::EligibilityChecker;
use crate::config::SchedulingConfig;
use crate::domain::{Rejection, TimeWindow, ValidationResult};
use crate::errors::AppResult;
use crate::infra::{AppointmentRepository, DirectoryRepository};

/// Validates booking requests against all business rules.
pub struct AppointmentValidator {
    config: SchedulingConfig,
    appointments: Arc<dyn AppointmentRepository>,
    eligibility: EligibilityChecker,
    conflicts: ConflictDetector,
}

impl AppointmentValidator {
    pub fn new(
        config: SchedulingConfig,
        appointments: Arc<dyn AppointmentRepository>,
        directory: Arc<dyn DirectoryRepository>,
    ) -> Self {
        Self {
            config,
            eligibility: EligibilityChecker::new(directory),
            conflicts: ConflictDetector::new(appointments.clone()),
            appointments,
        }
    }

    /// Validate a creation request. Checks run in a fixed order and the
    /// first failure wins:
    ///
    /// 1. `start < end`
    /// 2. duration within the configured bounds
    /// 3. room eligibility
    /// 4. patient eligibility
    /// 5. student eligibility (role student)
    /// 6. supervisor eligibility (role professor)
    /// 7. resource conflicts
    /// 8. student daily quota
    ///
    /// A deterministic function of its inputs and current repository state.
    pub async fn validate_creation(
        &self,
        window: TimeWindow,
        room_id: Uuid,
        patient_id: Uuid,
        student_id: Uuid,
        supervisor_id: Uuid,
    ) -> AppResult<ValidationResult> {
        // 1. Interval ordering
        if !window.is_ordered() {
            tracing::warn!(start = %window.start, end = %window.end, "invalid appointment interval");
            return Ok(ValidationResult::Rejected(Rejection::InvalidInterval));
        }

        // 2. Duration bounds
        let minutes = match window.duration_minutes() {
            Ok(minutes) => minutes,
            Err(rejection) => return Ok(ValidationResult::Rejected(rejection)),
        };
        let min = self.config.min_appointment_minutes;
        let max = self.config.max_appointment_minutes;
        if minutes < min as f64 || minutes > max as f64 {
            tracing::warn!(minutes, min, max, "appointment duration out of range");
            return Ok(ValidationResult::Rejected(Rejection::DurationOutOfRange {
                minutes,
                min,
                max,
            }));
        }

        // 3-6. Entity eligibility, in booking order
        if let Some(rejection) = self
            .eligibility
            .first_ineligible(room_id, patient_id, student_id, supervisor_id)
            .await?
        {
            return Ok(ValidationResult::Rejected(rejection));
        }

        // 7. Resource conflicts
        let conflicts = self
            .conflicts
            .check_conflicts(window, room_id, student_id, supervisor_id)
            .await?;
        if !conflicts.is_empty() {
            return Ok(ValidationResult::Rejected(Rejection::Conflict(conflicts)));
        }

        // 8. Student daily quota
        let (limit_reached, booked_hours) =
            self.student_daily_load(student_id, window.start).await?;
        if limit_reached {
            tracing::warn!(%student_id, booked_hours, "student daily limit reached");
            return Ok(ValidationResult::Rejected(Rejection::DailyLimitExceeded {
                booked_hours,
                limit: self.config.max_student_hours_per_day,
            }));
        }

        tracing::info!(%room_id, %student_id, "appointment validation approved");
        Ok(ValidationResult::Approved)
    }

    /// Whether the student has reached the daily quota on the day containing
    /// `reference`, and the total hours already booked that day.
    ///
    /// The quota is checked against existing load only, not load after adding
    /// the new appointment: a student exactly at the quota cannot book
    /// anything that day, while one just under it may still overshoot with a
    /// long session.
    pub async fn student_daily_load(
        &self,
        student_id: Uuid,
        reference: DateTime<Utc>,
    ) -> AppResult<(bool, f64)> {
        let bounds = TimeWindow::day_bounds(reference);
        let appointments = self
            .appointments
            .find_active_by_student_and_window(student_id, bounds)
            .await?;

        let total_hours: f64 = appointments.iter().map(|ap| ap.duration_hours()).sum();
        let limit_reached = total_hours >= self.config.max_student_hours_per_day as f64;
        Ok((limit_reached, total_hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::domain::{Appointment, Patient, Room, User, UserRole};
    use crate::infra::{MockAppointmentRepository, MockDirectoryRepository};

    fn window(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> TimeWindow {
        TimeWindow::new(
            Utc.with_ymd_and_hms(2024, 3, 12, start_hour, start_min, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 12, end_hour, end_min, 0).unwrap(),
        )
    }

    fn booked(w: TimeWindow, student_id: Uuid) -> Appointment {
        Appointment::new(
            w,
            Uuid::new_v4(),
            Uuid::new_v4(),
            student_id,
            Uuid::new_v4(),
            None,
        )
    }

    /// Directory where every entity exists, is active and has the right role.
    fn permissive_directory(student_id: Uuid) -> MockDirectoryRepository {
        let mut directory = MockDirectoryRepository::new();
        directory
            .expect_find_room()
            .returning(|_| Ok(Some(Room::new("Room 1"))));
        directory
            .expect_find_patient()
            .returning(|_| Ok(Some(Patient::new("Patient 1"))));
        directory.expect_find_user().returning(move |id| {
            let role = if id == student_id {
                UserRole::Student
            } else {
                UserRole::Professor
            };
            let mut user = User::new("U", "u@clinic.test", role);
            user.id = id;
            Ok(Some(user))
        });
        directory
    }

    fn empty_appointments() -> MockAppointmentRepository {
        let mut repo = MockAppointmentRepository::new();
        repo.expect_find_active_by_room_and_window()
            .returning(|_, _| Ok(vec![]));
        repo.expect_find_active_by_student_and_window()
            .returning(|_, _| Ok(vec![]));
        repo.expect_find_active_by_supervisor_and_window()
            .returning(|_, _| Ok(vec![]));
        repo
    }

    fn validator(
        appointments: MockAppointmentRepository,
        directory: MockDirectoryRepository,
    ) -> AppointmentValidator {
        AppointmentValidator::new(
            SchedulingConfig::default(),
            Arc::new(appointments),
            Arc::new(directory),
        )
    }

    async fn validate(
        validator: &AppointmentValidator,
        w: TimeWindow,
        student_id: Uuid,
    ) -> ValidationResult {
        validator
            .validate_creation(w, Uuid::new_v4(), Uuid::new_v4(), student_id, Uuid::new_v4())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn approves_a_clean_request() {
        let student_id = Uuid::new_v4();
        let v = validator(empty_appointments(), permissive_directory(student_id));
        let result = validate(&v, window(9, 0, 10, 0), student_id).await;
        assert!(result.is_approved());
    }

    #[tokio::test]
    async fn rejects_inverted_interval_before_anything_else() {
        // No repository expectations set: the check fails before any query.
        let v = validator(
            MockAppointmentRepository::new(),
            MockDirectoryRepository::new(),
        );
        let result = validate(&v, window(10, 0, 9, 0), Uuid::new_v4()).await;
        assert_eq!(result.rejection(), Some(&Rejection::InvalidInterval));
    }

    #[tokio::test]
    async fn rejects_equal_start_and_end() {
        let v = validator(
            MockAppointmentRepository::new(),
            MockDirectoryRepository::new(),
        );
        let result = validate(&v, window(9, 0, 9, 0), Uuid::new_v4()).await;
        assert_eq!(result.rejection(), Some(&Rejection::InvalidInterval));
    }

    #[tokio::test]
    async fn rejects_too_short_duration_regardless_of_other_fields() {
        let v = validator(
            MockAppointmentRepository::new(),
            MockDirectoryRepository::new(),
        );
        let result = validate(&v, window(9, 0, 9, 15), Uuid::new_v4()).await;
        match result.rejection() {
            Some(Rejection::DurationOutOfRange { minutes, min, max }) => {
                assert_eq!(*minutes, 15.0);
                assert_eq!(*min, 30);
                assert_eq!(*max, 120);
            }
            other => panic!("expected DurationOutOfRange, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn rejects_too_long_duration() {
        let v = validator(
            MockAppointmentRepository::new(),
            MockDirectoryRepository::new(),
        );
        let result = validate(&v, window(9, 0, 11, 30), Uuid::new_v4()).await;
        assert!(matches!(
            result.rejection(),
            Some(Rejection::DurationOutOfRange { .. })
        ));
    }

    #[tokio::test]
    async fn accepts_durations_exactly_at_the_bounds() {
        let student_id = Uuid::new_v4();
        let v = validator(empty_appointments(), permissive_directory(student_id));
        assert!(validate(&v, window(9, 0, 9, 30), student_id).await.is_approved());

        let v = validator(empty_appointments(), permissive_directory(student_id));
        assert!(validate(&v, window(9, 0, 11, 0), student_id).await.is_approved());
    }

    #[tokio::test]
    async fn eligibility_failure_preempts_conflict_check() {
        // Room lookup fails; conflict queries must not run.
        let mut directory = MockDirectoryRepository::new();
        directory.expect_find_room().returning(|_| Ok(None));

        let v = validator(MockAppointmentRepository::new(), directory);
        let result = validate(&v, window(9, 0, 10, 0), Uuid::new_v4()).await;
        assert_eq!(result.rejection(), Some(&Rejection::RoomUnavailable));
    }

    #[tokio::test]
    async fn conflict_rejection_carries_all_dimensions() {
        let student_id = Uuid::new_v4();
        let w = window(9, 30, 10, 30);
        let mut repo = MockAppointmentRepository::new();
        let occupied = window(9, 0, 10, 0);
        repo.expect_find_active_by_room_and_window()
            .returning(move |_, _| Ok(vec![booked(occupied, Uuid::new_v4())]));
        repo.expect_find_active_by_student_and_window()
            .returning(move |_, _| Ok(vec![booked(occupied, Uuid::new_v4())]));
        repo.expect_find_active_by_supervisor_and_window()
            .returning(|_, _| Ok(vec![]));

        let v = validator(repo, permissive_directory(student_id));
        let result = validate(&v, w, student_id).await;
        match result.rejection() {
            Some(Rejection::Conflict(conflicts)) => assert_eq!(conflicts.len(), 2),
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn student_at_quota_is_rejected_even_for_a_free_slot() {
        let student_id = Uuid::new_v4();
        let mut repo = MockAppointmentRepository::new();
        repo.expect_find_active_by_room_and_window()
            .returning(|_, _| Ok(vec![]));
        repo.expect_find_active_by_supervisor_and_window()
            .returning(|_, _| Ok(vec![]));
        // Conflict query (the requested evening window) sees nothing; the
        // quota query (whole day) sees four booked hours.
        repo.expect_find_active_by_student_and_window()
            .returning(move |id, w| {
                if w.duration_minutes().unwrap() > 600.0 {
                    Ok(vec![
                        booked(window(9, 0, 10, 0), id),
                        booked(window(10, 0, 11, 0), id),
                        booked(window(11, 0, 12, 0), id),
                        booked(window(12, 0, 13, 0), id),
                    ])
                } else {
                    Ok(vec![])
                }
            });

        let v = validator(repo, permissive_directory(student_id));
        let result = validate(&v, window(13, 0, 14, 0), student_id).await;
        match result.rejection() {
            Some(Rejection::DailyLimitExceeded { booked_hours, limit }) => {
                assert_eq!(*booked_hours, 4.0);
                assert_eq!(*limit, 4);
            }
            other => panic!("expected DailyLimitExceeded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn student_under_quota_is_accepted() {
        let student_id = Uuid::new_v4();
        let mut repo = MockAppointmentRepository::new();
        repo.expect_find_active_by_room_and_window()
            .returning(|_, _| Ok(vec![]));
        repo.expect_find_active_by_supervisor_and_window()
            .returning(|_, _| Ok(vec![]));
        repo.expect_find_active_by_student_and_window()
            .returning(move |id, w| {
                if w.duration_minutes().unwrap() > 600.0 {
                    // Three booked hours, one under the quota
                    Ok(vec![
                        booked(window(9, 0, 10, 0), id),
                        booked(window(10, 0, 11, 0), id),
                        booked(window(11, 0, 12, 0), id),
                    ])
                } else {
                    Ok(vec![])
                }
            });

        let v = validator(repo, permissive_directory(student_id));
        let result = validate(&v, window(13, 0, 14, 0), student_id).await;
        assert!(result.is_approved());
    }

    #[tokio::test]
    async fn validation_is_deterministic_for_fixed_state() {
        let student_id = Uuid::new_v4();
        let mut repo = MockAppointmentRepository::new();
        let occupied = window(9, 0, 10, 0);
        repo.expect_find_active_by_room_and_window()
            .returning(move |_, _| Ok(vec![booked(occupied, Uuid::new_v4())]));
        repo.expect_find_active_by_student_and_window()
            .returning(|_, _| Ok(vec![]));
        repo.expect_find_active_by_supervisor_and_window()
            .returning(|_, _| Ok(vec![]));

        let v = validator(repo, permissive_directory(student_id));
        let w = window(9, 30, 10, 30);
        let (room_id, patient_id, supervisor_id) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let first = v
            .validate_creation(w, room_id, patient_id, student_id, supervisor_id)
            .await
            .unwrap();
        let second = v
            .validate_creation(w, room_id, patient_id, student_id, supervisor_id)
            .await
            .unwrap();
        assert_eq!(first, second);
    }
}
