//! Domain layer - Core business entities and logic
//!
//! Entities, value objects and the validation taxonomy, independent of
//! infrastructure concerns.

pub mod appointment;
pub mod patient;
pub mod room;
pub mod time;
pub mod user;
pub mod validation;

pub use appointment::{Appointment, AppointmentStatus};
pub use patient::Patient;
pub use room::Room;
pub use time::{format_duration_minutes, minutes_between, TimeWindow};
pub use user::{User, UserRole};
pub use validation::{ConflictDescriptor, Rejection, ResourceKind, ValidationResult};
