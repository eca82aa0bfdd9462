//! User domain entity and role enumeration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User roles. Closed enumeration: eligibility checks match exhaustively,
/// so every role is handled by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Professor,
    Student,
    Patient,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Professor => "professor",
            UserRole::Student => "student",
            UserRole::Patient => "patient",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User domain entity (student practitioner, supervising professor, admin).
///
/// Consumed read-only by the scheduling core; lifecycle management belongs
/// to the CRUD layer outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// True iff the user may appear as the student on an appointment.
    pub fn is_eligible_student(&self) -> bool {
        self.is_active && self.role == UserRole::Student
    }

    /// True iff the user may appear as the supervisor on an appointment.
    pub fn is_eligible_supervisor(&self) -> bool {
        self.is_active && self.role == UserRole::Professor
    }
}
