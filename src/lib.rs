//! Clinic Scheduler - scheduling validation and conflict-detection engine.
//!
//! Books time-boxed appointments that consume three shared resources at
//! once: a room, a student practitioner and a supervising professor, plus a
//! patient. The crate guarantees that none of the three resources is
//! double-booked, that a student's booked time per day stays within a
//! configured quota, and that both guarantees hold under concurrent booking
//! attempts.
//!
//! # Architecture Layers
//!
//! - **config**: immutable scheduling rules and constants
//! - **domain**: entities, interval math and the validation taxonomy
//! - **services**: validation, conflict detection, booking and reporting
//! - **infra**: repository traits, in-memory store, per-resource locks
//! - **errors**: centralized infrastructure error handling
//!
//! # Booking flow
//!
//! A request flows into [`services::AppointmentValidator`], which runs
//! ordered fail-fast checks (interval, duration bounds, eligibility,
//! conflicts, daily quota). Validation alone is read-only;
//! [`services::BookingService`] wraps it in per-resource locks and persists
//! approved requests, closing the check-then-act race.

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::SchedulingConfig;
pub use domain::{
    Appointment, AppointmentStatus, ConflictDescriptor, Patient, Rejection, ResourceKind, Room,
    TimeWindow, User, UserRole, ValidationResult,
};
pub use errors::{AppError, AppResult};
pub use services::{
    AppointmentValidator, AvailabilityCalculator, BookingOutcome, BookingRequest, BookingService,
    ConflictDetector, LoadBalanceCalculator,
};
