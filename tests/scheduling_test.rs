//! End-to-end validation tests against the in-memory store.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use clinic_scheduler::domain::{Appointment, Patient, Rejection, Room, TimeWindow, User, UserRole};
use clinic_scheduler::infra::{AppointmentRepository, DirectoryRepository, InMemoryStore};
use clinic_scheduler::services::AppointmentValidator;
use clinic_scheduler::SchedulingConfig;

struct Fixture {
    store: Arc<InMemoryStore>,
    validator: AppointmentValidator,
    room_id: Uuid,
    patient_id: Uuid,
    student_id: Uuid,
    supervisor_id: Uuid,
}

async fn fixture() -> Fixture {
    let store = Arc::new(InMemoryStore::new());
    let room = store.add_room(Room::new("Sala 1")).await;
    let patient = store.add_patient(Patient::new("Paciente 1")).await;
    let student = store
        .add_user(User::new("Estagiario 1", "est1@clinic.test", UserRole::Student))
        .await;
    let supervisor = store
        .add_user(User::new("Supervisor 1", "sup1@clinic.test", UserRole::Professor))
        .await;

    let validator = AppointmentValidator::new(
        SchedulingConfig::default(),
        store.clone() as Arc<dyn AppointmentRepository>,
        store.clone() as Arc<dyn DirectoryRepository>,
    );

    Fixture {
        store,
        validator,
        room_id: room.id,
        patient_id: patient.id,
        student_id: student.id,
        supervisor_id: supervisor.id,
    }
}

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 12, hour, min, 0).unwrap()
}

fn window(start: (u32, u32), end: (u32, u32)) -> TimeWindow {
    TimeWindow::new(at(start.0, start.1), at(end.0, end.1))
}

impl Fixture {
    async fn seed_appointment(&self, w: TimeWindow) -> Appointment {
        self.store
            .add_appointment(Appointment::new(
                w,
                self.room_id,
                self.patient_id,
                self.student_id,
                self.supervisor_id,
                None,
            ))
            .await
    }

    async fn validate(&self, w: TimeWindow) -> clinic_scheduler::ValidationResult {
        self.validator
            .validate_creation(w, self.room_id, self.patient_id, self.student_id, self.supervisor_id)
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn overlapping_room_booking_is_a_conflict() {
    // Scenario A: room booked 09:00-10:00, request 09:30-10:30
    let fx = fixture().await;
    fx.seed_appointment(window((9, 0), (10, 0))).await;

    let result = fx.validate(window((9, 30), (10, 30))).await;
    match result.rejection() {
        Some(Rejection::Conflict(conflicts)) => {
            // Room, student and supervisor all collide; every dimension reported
            assert_eq!(conflicts.len(), 3);
        }
        other => panic!("expected Conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn back_to_back_booking_is_legal() {
    // Scenario A, second half: 10:00-11:00 touches but does not overlap
    let fx = fixture().await;
    fx.seed_appointment(window((9, 0), (10, 0))).await;

    let result = fx.validate(window((10, 0), (11, 0))).await;
    assert!(result.is_approved());
}

#[tokio::test]
async fn cancelled_appointments_do_not_conflict() {
    let fx = fixture().await;
    let mut appointment = fx.seed_appointment(window((9, 0), (10, 0))).await;
    appointment.cancel();
    fx.store.add_appointment(appointment).await;

    let result = fx.validate(window((9, 0), (10, 0))).await;
    assert!(result.is_approved());
}

#[tokio::test]
async fn four_booked_hours_exhaust_the_daily_quota() {
    // Scenario B: four consecutive 1-hour bookings 09:00-13:00
    let fx = fixture().await;
    for hour in 9..13 {
        fx.seed_appointment(window((hour, 0), (hour + 1, 0))).await;
    }

    let result = fx.validate(window((13, 0), (14, 0))).await;
    match result.rejection() {
        Some(Rejection::DailyLimitExceeded { booked_hours, limit }) => {
            assert_eq!(*booked_hours, 4.0);
            assert_eq!(*limit, 4);
        }
        other => panic!("expected DailyLimitExceeded, got {:?}", other),
    }
}

#[tokio::test]
async fn quota_only_counts_the_same_day() {
    let fx = fixture().await;
    for hour in 9..13 {
        fx.seed_appointment(window((hour, 0), (hour + 1, 0))).await;
    }

    // Next day is unaffected by yesterday's load
    let next_day = TimeWindow::new(
        Utc.with_ymd_and_hms(2024, 3, 13, 9, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 3, 13, 10, 0, 0).unwrap(),
    );
    assert!(fx.validate(next_day).await.is_approved());
}

#[tokio::test]
async fn inactive_room_is_rejected_before_conflicts() {
    let store = Arc::new(InMemoryStore::new());
    let mut room = Room::new("Closed");
    room.active = false;
    let room = store.add_room(room).await;
    let patient = store.add_patient(Patient::new("P")).await;
    let student = store
        .add_user(User::new("S", "s@clinic.test", UserRole::Student))
        .await;
    let supervisor = store
        .add_user(User::new("Sup", "sup@clinic.test", UserRole::Professor))
        .await;

    let validator = AppointmentValidator::new(
        SchedulingConfig::default(),
        store.clone() as Arc<dyn AppointmentRepository>,
        store.clone() as Arc<dyn DirectoryRepository>,
    );

    let result = validator
        .validate_creation(window((9, 0), (10, 0)), room.id, patient.id, student.id, supervisor.id)
        .await
        .unwrap();
    assert_eq!(result.rejection(), Some(&Rejection::RoomUnavailable));
}

#[tokio::test]
async fn swapped_student_and_supervisor_are_rejected() {
    let fx = fixture().await;
    // Supervisor id passed in the student slot fails the role check
    let result = fx
        .validator
        .validate_creation(
            window((9, 0), (10, 0)),
            fx.room_id,
            fx.patient_id,
            fx.supervisor_id,
            fx.student_id,
        )
        .await
        .unwrap();
    assert_eq!(result.rejection(), Some(&Rejection::StudentUnavailable));
}
