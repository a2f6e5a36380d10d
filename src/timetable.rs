//! Weekly timetable layout for room bookings.
//!
//! Bookings carry a calendar date range plus a period range within the fixed
//! 12-period teaching day. The dashboard renders one column per weekday and
//! one row per period; a booking occupies a single merged cell spanning
//! `period_end - period_start + 1` rows on every day its date range touches.
//! This module computes that 7x12 cell grid; it performs no I/O.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of teaching periods in a day
pub const PERIODS_PER_DAY: i16 = 12;

/// Number of day columns in the rendered week (Monday..Sunday)
pub const DAYS_PER_WEEK: i64 = 7;

/// A booking record flattened for grid layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSpan {
    pub schedule_id: i32,
    pub room_id: i32,
    pub room_name: String,
    pub booked_by: String,
    pub purpose: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub period_start: i16,
    pub period_end: i16,
}

impl BookingSpan {
    fn covers_day(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Spans with inverted or out-of-range periods are never rendered.
    fn is_well_formed(&self) -> bool {
        self.period_start >= 1
            && self.period_end <= PERIODS_PER_DAY
            && self.period_start <= self.period_end
            && self.start_date <= self.end_date
    }
}

/// Booking payload carried by a primary grid cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GridBooking {
    pub schedule_id: i32,
    pub room_id: i32,
    pub room_name: String,
    pub booked_by: String,
    pub purpose: Option<String>,
    /// Number of period rows the rendered cell spans
    pub rowspan: i16,
}

/// One cell of the weekly grid.
///
/// `Continuation` cells sit under a primary cell and are not rendered at all
/// (the primary cell's rowspan covers them); `Empty` cells render as blanks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell {
    Empty,
    Continuation,
    Booking(GridBooking),
}

/// One weekday column of the grid, cells indexed by period 1..=12
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub cells: Vec<GridCell>,
}

/// The full Monday-aligned week grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeekGrid {
    pub monday: NaiveDate,
    pub days: Vec<DayColumn>,
}

/// Snap a date to the Monday of its week
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Lay out bookings on the 7x12 grid for the week starting at `monday`.
///
/// For each day column, the booking that begins at a period claims one
/// primary cell there and turns the rest of its span into continuations.
/// When two bookings contest a cell the lowest schedule id wins and the
/// loser is suppressed for that day; creation-time conflict checks keep
/// this case out of normal data.
pub fn build_week_grid(monday: NaiveDate, bookings: &[BookingSpan]) -> WeekGrid {
    let mut sorted: Vec<&BookingSpan> = bookings.iter().filter(|b| b.is_well_formed()).collect();
    sorted.sort_by_key(|b| b.schedule_id);

    let mut days = Vec::with_capacity(DAYS_PER_WEEK as usize);
    for offset in 0..DAYS_PER_WEEK {
        let date = monday + Duration::days(offset);
        let todays: Vec<&&BookingSpan> = sorted.iter().filter(|b| b.covers_day(date)).collect();

        let mut cells = Vec::with_capacity(PERIODS_PER_DAY as usize);
        let mut covered_until: i16 = 0;
        for period in 1..=PERIODS_PER_DAY {
            if period <= covered_until {
                cells.push(GridCell::Continuation);
                continue;
            }
            match todays.iter().find(|b| b.period_start == period) {
                Some(booking) => {
                    covered_until = booking.period_end;
                    cells.push(GridCell::Booking(GridBooking {
                        schedule_id: booking.schedule_id,
                        room_id: booking.room_id,
                        room_name: booking.room_name.clone(),
                        booked_by: booking.booked_by.clone(),
                        purpose: booking.purpose.clone(),
                        rowspan: booking.period_end - booking.period_start + 1,
                    }));
                }
                None => cells.push(GridCell::Empty),
            }
        }
        days.push(DayColumn { date, cells });
    }

    WeekGrid { monday, days }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn span(id: i32, start: NaiveDate, end: NaiveDate, ps: i16, pe: i16) -> BookingSpan {
        BookingSpan {
            schedule_id: id,
            room_id: 1,
            room_name: "A-101".to_string(),
            booked_by: "Nguyễn Văn An".to_string(),
            purpose: None,
            start_date: start,
            end_date: end,
            period_start: ps,
            period_end: pe,
        }
    }

    fn primaries(grid: &WeekGrid) -> Vec<(usize, usize, i16)> {
        let mut out = Vec::new();
        for (d, day) in grid.days.iter().enumerate() {
            for (p, cell) in day.cells.iter().enumerate() {
                if let GridCell::Booking(b) = cell {
                    out.push((d, p + 1, b.rowspan));
                }
            }
        }
        out
    }

    #[test]
    fn monday_snapping() {
        // 2025-12-24 is a Wednesday
        assert_eq!(monday_of_week(date(2025, 12, 24)), date(2025, 12, 22));
        assert_eq!(monday_of_week(date(2025, 12, 22)), date(2025, 12, 22));
        assert_eq!(monday_of_week(date(2025, 12, 28)), date(2025, 12, 22));
    }

    #[test]
    fn empty_week() {
        let grid = build_week_grid(date(2025, 12, 22), &[]);
        assert_eq!(grid.days.len(), 7);
        for day in &grid.days {
            assert_eq!(day.cells.len(), 12);
            assert!(day.cells.iter().all(|c| *c == GridCell::Empty));
        }
    }

    #[test]
    fn single_day_booking_spans_its_periods() {
        let wed = date(2025, 12, 24);
        let grid = build_week_grid(date(2025, 12, 22), &[span(1, wed, wed, 3, 5)]);

        let day = &grid.days[2];
        assert_eq!(day.date, wed);
        assert!(matches!(&day.cells[2], GridCell::Booking(b) if b.rowspan == 3));
        assert_eq!(day.cells[3], GridCell::Continuation);
        assert_eq!(day.cells[4], GridCell::Continuation);
        // one primary cell, two continuations, nothing anywhere else
        assert_eq!(primaries(&grid), vec![(2, 3, 3)]);
        let continuations: usize = grid
            .days
            .iter()
            .flat_map(|d| &d.cells)
            .filter(|c| **c == GridCell::Continuation)
            .count();
        assert_eq!(continuations, 2);
    }

    #[test]
    fn multi_day_booking_renders_once_per_day() {
        // start 2025-12-24, end 2025-12-26, periods 7..9: one 3-row cell on
        // each of Dec 24, 25 and 26, independently.
        let grid = build_week_grid(
            date(2025, 12, 22),
            &[span(1, date(2025, 12, 24), date(2025, 12, 26), 7, 9)],
        );
        assert_eq!(primaries(&grid), vec![(2, 7, 3), (3, 7, 3), (4, 7, 3)]);
    }

    #[test]
    fn booking_outside_week_is_invisible() {
        let grid = build_week_grid(
            date(2025, 12, 22),
            &[span(1, date(2026, 1, 5), date(2026, 1, 5), 1, 4)],
        );
        assert!(primaries(&grid).is_empty());
    }

    #[test]
    fn booking_overlapping_week_edge_is_clipped_to_week() {
        // Date range runs Sunday..Tuesday of the next week; only Sunday
        // falls inside the displayed week.
        let grid = build_week_grid(
            date(2025, 12, 22),
            &[span(1, date(2025, 12, 28), date(2025, 12, 30), 2, 3)],
        );
        assert_eq!(primaries(&grid), vec![(6, 2, 2)]);
    }

    #[test]
    fn contested_start_period_goes_to_lowest_id() {
        let wed = date(2025, 12, 24);
        let grid = build_week_grid(
            date(2025, 12, 22),
            &[span(7, wed, wed, 4, 6), span(3, wed, wed, 4, 8)],
        );
        // Schedule 3 claims the cell; schedule 7 is suppressed entirely.
        let day = &grid.days[2];
        match &day.cells[3] {
            GridCell::Booking(b) => {
                assert_eq!(b.schedule_id, 3);
                assert_eq!(b.rowspan, 5);
            }
            other => panic!("expected booking cell, got {:?}", other),
        }
        assert_eq!(primaries(&grid).len(), 1);
    }

    #[test]
    fn booking_starting_inside_claimed_span_is_suppressed() {
        let wed = date(2025, 12, 24);
        let grid = build_week_grid(
            date(2025, 12, 22),
            &[span(1, wed, wed, 2, 6), span(2, wed, wed, 4, 7)],
        );
        let day = &grid.days[2];
        assert!(matches!(&day.cells[1], GridCell::Booking(b) if b.schedule_id == 1));
        // Periods 3..6 are continuations of schedule 1; schedule 2 never renders.
        assert_eq!(primaries(&grid).len(), 1);
        assert_eq!(day.cells[6], GridCell::Empty);
    }

    #[test]
    fn malformed_spans_are_skipped() {
        let wed = date(2025, 12, 24);
        let inverted = span(1, wed, wed, 9, 7);
        let out_of_range = span(2, wed, wed, 11, 13);
        let grid = build_week_grid(date(2025, 12, 22), &[inverted, out_of_range]);
        assert!(primaries(&grid).is_empty());
    }

    #[test]
    fn full_day_booking_fills_column() {
        let wed = date(2025, 12, 24);
        let grid = build_week_grid(date(2025, 12, 22), &[span(1, wed, wed, 1, 12)]);
        let day = &grid.days[2];
        assert!(matches!(&day.cells[0], GridCell::Booking(b) if b.rowspan == 12));
        assert!(day.cells[1..]
            .iter()
            .all(|c| *c == GridCell::Continuation));
    }
}
