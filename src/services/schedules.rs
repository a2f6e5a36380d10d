//! Room booking service

use chrono::{Duration, NaiveDate, Utc};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{RoomStatus, ScheduleStatus},
        schedule::{CreateSchedule, Schedule, ScheduleDetails, ScheduleQuery, UpdateScheduleStatus},
    },
    repository::Repository,
    timetable::{self, BookingSpan, WeekGrid, PERIODS_PER_DAY},
};

/// Parse a YYYY-MM-DD date field
pub(crate) fn parse_date(value: &str, field: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid {} (use YYYY-MM-DD)", field)))
}

/// Validate a booking slot: date ordering, period bounds, period ordering.
/// Returns the parsed date range.
pub(crate) fn validate_slot(
    start_date: &str,
    end_date: &str,
    period_start: i16,
    period_end: i16,
) -> AppResult<(NaiveDate, NaiveDate)> {
    let start = parse_date(start_date, "start_date")?;
    let end = parse_date(end_date, "end_date")?;

    if start > end {
        return Err(AppError::Validation(
            "start_date must not be after end_date".to_string(),
        ));
    }
    if !(1..=PERIODS_PER_DAY).contains(&period_start)
        || !(1..=PERIODS_PER_DAY).contains(&period_end)
    {
        return Err(AppError::Validation(format!(
            "Periods must be between 1 and {}",
            PERIODS_PER_DAY
        )));
    }
    if period_start >= period_end {
        return Err(AppError::Validation(
            "period_start must be before period_end".to_string(),
        ));
    }

    Ok((start, end))
}

#[derive(Clone)]
pub struct SchedulesService {
    repository: Repository,
}

impl SchedulesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List bookings with optional filters
    pub async fn list(&self, query: &ScheduleQuery) -> AppResult<Vec<ScheduleDetails>> {
        self.repository.schedules_list(query).await
    }

    /// Get a booking by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Schedule> {
        self.repository.schedules_get_by_id(id).await
    }

    /// Submit a booking for a room.
    ///
    /// The slot must be valid, the room active, and the slot free of any
    /// non-rejected booking; otherwise the request is rejected with 409.
    pub async fn create(&self, user_id: i32, data: &CreateSchedule) -> AppResult<Schedule> {
        data.validate()?;
        let (start, end) =
            validate_slot(&data.start_date, &data.end_date, data.period_start, data.period_end)?;

        let room = self.repository.rooms_get_by_id(data.room_id).await?;
        if room.status != RoomStatus::Active {
            return Err(AppError::BusinessRule(format!(
                "Room {} is not available for booking",
                room.code
            )));
        }

        let overlapping = self
            .repository
            .schedules_find_overlapping(data.room_id, start, end, data.period_start, data.period_end)
            .await?;
        if !overlapping.is_empty() {
            return Err(AppError::Conflict(format!(
                "Room {} is already booked for the requested slot",
                room.code
            )));
        }

        self.repository
            .schedules_create(user_id, data, start, end)
            .await
    }

    /// Approve or reject a pending booking
    pub async fn update_status(
        &self,
        id: i32,
        data: &UpdateScheduleStatus,
    ) -> AppResult<Schedule> {
        if data.status == ScheduleStatus::Pending {
            return Err(AppError::Validation(
                "A booking cannot be transitioned back to pending".to_string(),
            ));
        }

        let current = self.repository.schedules_get_by_id(id).await?;
        if current.status != ScheduleStatus::Pending {
            return Err(AppError::BusinessRule(
                "Only pending bookings can be approved or rejected".to_string(),
            ));
        }

        self.repository.schedules_update_status(id, data.status).await
    }

    /// Compute the weekly grid for the week containing `date` (default today).
    /// Only approved bookings appear on the timetable.
    pub async fn week_grid(&self, date: Option<&str>) -> AppResult<WeekGrid> {
        let reference = match date {
            Some(value) => parse_date(value, "date")?,
            None => Utc::now().date_naive(),
        };
        let monday = timetable::monday_of_week(reference);
        let sunday = monday + Duration::days(6);

        let rows = self.repository.schedules_list_week(monday, sunday).await?;
        let bookings: Vec<BookingSpan> = rows
            .into_iter()
            .map(|row| BookingSpan {
                schedule_id: row.schedule_id,
                room_id: row.room_id,
                room_name: row.room_name,
                booked_by: row.booked_by,
                purpose: row.purpose,
                start_date: row.start_date,
                end_date: row.end_date,
                period_start: row.period_start,
                period_end: row.period_end,
            })
            .collect();

        Ok(timetable::build_week_grid(monday, &bookings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_accepts_ordered_periods() {
        let (start, end) = validate_slot("2025-12-24", "2025-12-26", 7, 9).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 12, 24).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 12, 26).unwrap());
    }

    #[test]
    fn slot_rejects_equal_or_inverted_periods() {
        assert!(validate_slot("2025-12-24", "2025-12-24", 7, 7).is_err());
        assert!(validate_slot("2025-12-24", "2025-12-24", 9, 7).is_err());
    }

    #[test]
    fn slot_rejects_out_of_range_periods() {
        assert!(validate_slot("2025-12-24", "2025-12-24", 0, 3).is_err());
        assert!(validate_slot("2025-12-24", "2025-12-24", 11, 13).is_err());
    }

    #[test]
    fn slot_rejects_inverted_dates() {
        assert!(validate_slot("2025-12-26", "2025-12-24", 1, 2).is_err());
    }

    #[test]
    fn slot_rejects_malformed_dates() {
        assert!(validate_slot("24/12/2025", "2025-12-26", 1, 2).is_err());
        assert!(validate_slot("2025-13-01", "2025-12-26", 1, 2).is_err());
    }
}
