//! Directory repository trait for the resource entities.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Patient, Room, User};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read-only lookup of rooms, patients and users.
///
/// The scheduling core never mutates these entities; creation and
/// soft-delete live in the CRUD layer outside this crate.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    async fn find_room(&self, id: Uuid) -> AppResult<Option<Room>>;

    async fn find_patient(&self, id: Uuid) -> AppResult<Option<Patient>>;

    async fn find_user(&self, id: Uuid) -> AppResult<Option<User>>;

    /// All active rooms, for availability reporting
    async fn list_active_rooms(&self) -> AppResult<Vec<Room>>;
}
