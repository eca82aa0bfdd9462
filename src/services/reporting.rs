//! Read-only availability and load-balance reporting.
//!
//! These aggregations take no locks and may be eventually consistent with
//! in-flight bookings.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::config::SchedulingConfig;
use crate::domain::{Room, TimeWindow};
use crate::errors::AppResult;
use crate::infra::{AppointmentRepository, DirectoryRepository};

/// A student's booked time and remaining quota for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilitySummary {
    pub date: NaiveDate,
    pub appointments_count: usize,
    pub total_hours: f64,
    pub available_hours: f64,
    pub is_full: bool,
}

/// A student's booked load over a rolling window of days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadBalanceSummary {
    pub period_days: i64,
    pub total_appointments: usize,
    pub total_hours: f64,
    pub average_hours_per_day: f64,
}

/// Booked time on a room within a window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomOccupancy {
    pub room_id: Uuid,
    pub appointments_count: usize,
    pub total_minutes_occupied: i64,
    pub total_hours_occupied: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes per-day student availability and room availability.
pub struct AvailabilityCalculator {
    config: SchedulingConfig,
    appointments: Arc<dyn AppointmentRepository>,
    directory: Arc<dyn DirectoryRepository>,
}

impl AvailabilityCalculator {
    pub fn new(
        config: SchedulingConfig,
        appointments: Arc<dyn AppointmentRepository>,
        directory: Arc<dyn DirectoryRepository>,
    ) -> Self {
        Self {
            config,
            appointments,
            directory,
        }
    }

    /// Availability summary for a student on the day containing `date`.
    ///
    /// Uses the same day bounds and active-appointment predicate as the
    /// daily-quota rule.
    pub async fn get_availability(
        &self,
        student_id: Uuid,
        date: DateTime<Utc>,
    ) -> AppResult<AvailabilitySummary> {
        let bounds = TimeWindow::day_bounds(date);
        let appointments = self
            .appointments
            .find_active_by_student_and_window(student_id, bounds)
            .await?;

        let total_hours: f64 = appointments.iter().map(|ap| ap.duration_hours()).sum();
        let quota = self.config.max_student_hours_per_day as f64;

        Ok(AvailabilitySummary {
            date: date.date_naive(),
            appointments_count: appointments.len(),
            total_hours: round2(total_hours),
            available_hours: round2((quota - total_hours).max(0.0)),
            is_full: total_hours >= quota,
        })
    }

    /// Active rooms with no overlapping active appointment in the window.
    pub async fn get_available_rooms(&self, window: TimeWindow) -> AppResult<Vec<Room>> {
        let rooms = self.directory.list_active_rooms().await?;

        let mut available = Vec::new();
        for room in rooms {
            let overlapping = self
                .appointments
                .find_active_by_room_and_window(room.id, window)
                .await?;
            if overlapping.is_empty() {
                available.push(room);
            }
        }
        Ok(available)
    }

    /// Occupancy of a room within the window.
    pub async fn get_room_occupancy(
        &self,
        room_id: Uuid,
        window: TimeWindow,
    ) -> AppResult<RoomOccupancy> {
        let appointments = self
            .appointments
            .find_active_by_room_and_window(room_id, window)
            .await?;

        let total_minutes: f64 = appointments.iter().map(|ap| ap.duration_minutes()).sum();

        Ok(RoomOccupancy {
            room_id,
            appointments_count: appointments.len(),
            total_minutes_occupied: total_minutes as i64,
            total_hours_occupied: total_minutes / 60.0,
        })
    }
}

/// Computes a student's load over a rolling window starting now.
pub struct LoadBalanceCalculator {
    appointments: Arc<dyn AppointmentRepository>,
}

impl LoadBalanceCalculator {
    pub fn new(appointments: Arc<dyn AppointmentRepository>) -> Self {
        Self { appointments }
    }

    /// Load over `[now, now + days)`.
    ///
    /// Only appointments lying entirely within the window count toward the
    /// rolling load; ones straddling the edges are excluded.
    pub async fn get_load_balance(
        &self,
        student_id: Uuid,
        days: i64,
    ) -> AppResult<LoadBalanceSummary> {
        let now = Utc::now();
        let window = TimeWindow::new(now, now + Duration::days(days.max(0)));

        let appointments: Vec<_> = self
            .appointments
            .find_active_by_student_and_window(student_id, window)
            .await?
            .into_iter()
            .filter(|ap| window.contains(&ap.window()))
            .collect();

        let total_hours: f64 = appointments.iter().map(|ap| ap.duration_hours()).sum();
        let average = if days > 0 {
            total_hours / days as f64
        } else {
            0.0
        };

        Ok(LoadBalanceSummary {
            period_days: days,
            total_appointments: appointments.len(),
            total_hours: round2(total_hours),
            average_hours_per_day: round2(average),
        })
    }
}
