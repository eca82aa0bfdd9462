//! Booking seam: validate and persist under per-resource locks.
//!
//! `validate_creation` alone is read-only, so two concurrent requests for
//! overlapping windows could both pass the conflict check before either has
//! written its row. This service closes that gap: it holds an exclusive
//! section over the request's room, student and supervisor ids across the
//! whole validate-and-insert span, so within one resource id at most one of
//! any mutually-overlapping set of requests commits and the rest re-observe
//! the conflict.

use std::sync::Arc;

use uuid::Uuid;

use super::validator::AppointmentValidator;
use crate::domain::{Appointment, Rejection, TimeWindow, ValidationResult};
use crate::errors::AppResult;
use crate::infra::{AppointmentRepository, ResourceLockSet};

/// A booking request for one appointment.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub window: TimeWindow,
    pub room_id: Uuid,
    pub patient_id: Uuid,
    pub student_id: Uuid,
    pub supervisor_id: Uuid,
    pub notes: Option<String>,
}

/// Outcome of a booking attempt.
#[derive(Debug, Clone)]
pub enum BookingOutcome {
    Booked(Appointment),
    Rejected(Rejection),
}

impl BookingOutcome {
    pub fn is_booked(&self) -> bool {
        matches!(self, BookingOutcome::Booked(_))
    }

    pub fn appointment(&self) -> Option<&Appointment> {
        match self {
            BookingOutcome::Booked(appointment) => Some(appointment),
            BookingOutcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            BookingOutcome::Booked(_) => None,
            BookingOutcome::Rejected(rejection) => Some(rejection),
        }
    }
}

/// Serializes booking attempts per resource and persists approved ones.
pub struct BookingService {
    validator: AppointmentValidator,
    appointments: Arc<dyn AppointmentRepository>,
    locks: ResourceLockSet,
}

impl BookingService {
    pub fn new(validator: AppointmentValidator, appointments: Arc<dyn AppointmentRepository>) -> Self {
        Self {
            validator,
            appointments,
            locks: ResourceLockSet::new(),
        }
    }

    /// Validate the request and, if approved, persist the appointment.
    ///
    /// The resource locks are held from before the conflict queries until
    /// after the insert; business rejections are returned as an outcome,
    /// infrastructure failures propagate as errors.
    pub async fn book(&self, request: BookingRequest) -> AppResult<BookingOutcome> {
        let _guard = self
            .locks
            .acquire(&[request.room_id, request.student_id, request.supervisor_id])
            .await;

        let result = self
            .validator
            .validate_creation(
                request.window,
                request.room_id,
                request.patient_id,
                request.student_id,
                request.supervisor_id,
            )
            .await?;

        match result {
            ValidationResult::Rejected(rejection) => {
                tracing::warn!(kind = rejection.kind(), %rejection, "booking rejected");
                Ok(BookingOutcome::Rejected(rejection))
            }
            ValidationResult::Approved => {
                let appointment = Appointment::new(
                    request.window,
                    request.room_id,
                    request.patient_id,
                    request.student_id,
                    request.supervisor_id,
                    request.notes,
                );
                let stored = self.appointments.insert(appointment).await?;
                tracing::info!(appointment_id = %stored.id, room_id = %stored.room_id, "appointment booked");
                Ok(BookingOutcome::Booked(stored))
            }
        }
    }
}
