//! Infrastructure layer - External systems integration
//!
//! Repository traits consumed by the scheduling core, the bundled in-memory
//! store, and the per-resource lock set that serializes bookings.

pub mod locks;
pub mod memory;
pub mod repositories;

pub use locks::{ResourceLockGuard, ResourceLockSet};
pub use memory::InMemoryStore;
pub use repositories::{AppointmentRepository, DirectoryRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockAppointmentRepository, MockDirectoryRepository};
