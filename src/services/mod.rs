//! Application services layer - Scheduling use cases.
//!
//! Services orchestrate domain logic and repository access. They depend on
//! the repository traits for dependency inversion and receive an immutable
//! [`crate::config::SchedulingConfig`] at construction time.

mod booking;
mod conflict;
mod eligibility;
mod reporting;
mod validator;

pub use booking::{BookingOutcome, BookingRequest, BookingService};
pub use conflict::ConflictDetector;
pub use eligibility::EligibilityChecker;
pub use reporting::{
    AvailabilityCalculator, AvailabilitySummary, LoadBalanceCalculator, LoadBalanceSummary,
    RoomOccupancy,
};
pub use validator::AppointmentValidator;
