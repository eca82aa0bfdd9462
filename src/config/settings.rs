//! Scheduling configuration loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_MAX_APPOINTMENT_MINUTES, DEFAULT_MAX_STUDENT_HOURS_PER_DAY,
    DEFAULT_MIN_APPOINTMENT_MINUTES,
};
use crate::errors::{AppError, AppResult};

/// Scheduling business rules.
///
/// Validated once at construction and immutable afterwards; services receive
/// a copy at build time instead of reading ambient global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulingConfig {
    pub min_appointment_minutes: i64,
    pub max_appointment_minutes: i64,
    pub max_student_hours_per_day: i64,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            min_appointment_minutes: DEFAULT_MIN_APPOINTMENT_MINUTES,
            max_appointment_minutes: DEFAULT_MAX_APPOINTMENT_MINUTES,
            max_student_hours_per_day: DEFAULT_MAX_STUDENT_HOURS_PER_DAY,
        }
    }
}

impl SchedulingConfig {
    /// Build a configuration, rejecting non-positive or inverted bounds.
    pub fn new(
        min_appointment_minutes: i64,
        max_appointment_minutes: i64,
        max_student_hours_per_day: i64,
    ) -> AppResult<Self> {
        if min_appointment_minutes <= 0 || max_appointment_minutes <= 0 {
            return Err(AppError::config(
                "appointment duration bounds must be positive",
            ));
        }
        if min_appointment_minutes > max_appointment_minutes {
            return Err(AppError::config(format!(
                "minimum duration ({} min) exceeds maximum duration ({} min)",
                min_appointment_minutes, max_appointment_minutes
            )));
        }
        if max_student_hours_per_day <= 0 {
            return Err(AppError::config(
                "max student hours per day must be positive",
            ));
        }

        Ok(Self {
            min_appointment_minutes,
            max_appointment_minutes,
            max_student_hours_per_day,
        })
    }

    /// Load configuration from environment variables, falling back to the
    /// defaults in `constants.rs` for anything unset or unparsable.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let min = env_i64(
            "MIN_APPOINTMENT_DURATION_MINUTES",
            DEFAULT_MIN_APPOINTMENT_MINUTES,
        );
        let max = env_i64(
            "MAX_APPOINTMENT_DURATION_MINUTES",
            DEFAULT_MAX_APPOINTMENT_MINUTES,
        );
        let hours = env_i64("MAX_STUDENT_HOURS_PER_DAY", DEFAULT_MAX_STUDENT_HOURS_PER_DAY);

        Self::new(min, max, hours)
    }
}

fn env_i64(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
