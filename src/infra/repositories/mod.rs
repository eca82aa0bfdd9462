//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence. The scheduling
//! core consumes them as traits; the concrete store lives outside this crate,
//! with [`crate::infra::InMemoryStore`] as the bundled in-process backend.

mod appointment_repository;
mod directory_repository;

pub use appointment_repository::AppointmentRepository;
pub use directory_repository::DirectoryRepository;

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use appointment_repository::MockAppointmentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use directory_repository::MockDirectoryRepository;
