//! In-memory store implementing the repository traits.
//!
//! Backs the integration tests and small single-process deployments. The
//! simulated database is a set of maps guarded by async RwLocks; seed
//! helpers let tests insert entities directly.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::repositories::{AppointmentRepository, DirectoryRepository};
use crate::domain::{Appointment, Patient, Room, TimeWindow, User};
use crate::errors::AppResult;

/// In-memory backend for both repository traits.
#[derive(Default)]
pub struct InMemoryStore {
    appointments: RwLock<HashMap<Uuid, Appointment>>,
    rooms: RwLock<HashMap<Uuid, Room>>,
    patients: RwLock<HashMap<Uuid, Patient>>,
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Seeding
    // =========================================================================

    pub async fn add_room(&self, room: Room) -> Room {
        self.rooms.write().await.insert(room.id, room.clone());
        room
    }

    pub async fn add_patient(&self, patient: Patient) -> Patient {
        self.patients.write().await.insert(patient.id, patient.clone());
        patient
    }

    pub async fn add_user(&self, user: User) -> User {
        self.users.write().await.insert(user.id, user.clone());
        user
    }

    pub async fn add_appointment(&self, appointment: Appointment) -> Appointment {
        self.appointments
            .write()
            .await
            .insert(appointment.id, appointment.clone());
        appointment
    }

    pub async fn appointment_count(&self) -> usize {
        self.appointments.read().await.len()
    }

    async fn find_active_overlapping<F>(
        &self,
        window: TimeWindow,
        matches_resource: F,
    ) -> Vec<Appointment>
    where
        F: Fn(&Appointment) -> bool,
    {
        let mut found: Vec<Appointment> = self
            .appointments
            .read()
            .await
            .values()
            .filter(|ap| ap.is_active() && matches_resource(ap) && ap.window().overlaps(&window))
            .cloned()
            .collect();
        found.sort_by_key(|ap| ap.start);
        found
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryStore {
    async fn find_active_by_room_and_window(
        &self,
        room_id: Uuid,
        window: TimeWindow,
    ) -> AppResult<Vec<Appointment>> {
        Ok(self
            .find_active_overlapping(window, |ap| ap.room_id == room_id)
            .await)
    }

    async fn find_active_by_student_and_window(
        &self,
        student_id: Uuid,
        window: TimeWindow,
    ) -> AppResult<Vec<Appointment>> {
        Ok(self
            .find_active_overlapping(window, |ap| ap.student_id == student_id)
            .await)
    }

    async fn find_active_by_supervisor_and_window(
        &self,
        supervisor_id: Uuid,
        window: TimeWindow,
    ) -> AppResult<Vec<Appointment>> {
        Ok(self
            .find_active_overlapping(window, |ap| ap.supervisor_id == supervisor_id)
            .await)
    }

    async fn insert(&self, appointment: Appointment) -> AppResult<Appointment> {
        tracing::debug!(appointment_id = %appointment.id, "appointment persisted");
        self.appointments
            .write()
            .await
            .insert(appointment.id, appointment.clone());
        Ok(appointment)
    }
}

#[async_trait]
impl DirectoryRepository for InMemoryStore {
    async fn find_room(&self, id: Uuid) -> AppResult<Option<Room>> {
        Ok(self.rooms.read().await.get(&id).cloned())
    }

    async fn find_patient(&self, id: Uuid) -> AppResult<Option<Patient>> {
        Ok(self.patients.read().await.get(&id).cloned())
    }

    async fn find_user(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn list_active_rooms(&self) -> AppResult<Vec<Room>> {
        let mut rooms: Vec<Room> = self
            .rooms
            .read()
            .await
            .values()
            .filter(|room| room.active)
            .cloned()
            .collect();
        rooms.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rooms)
    }
}
