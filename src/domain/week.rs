//! Extended ISO week numbering
//!
//! Standard ISO weeks are numbered per ISO year, so a calendar year can start in
//! week 52/53 and end in week 1. Tags number weeks per calendar year instead:
//! the partial week before the first ISO week becomes week 0, and the days of
//! December that ISO assigns to next year's week 1 become one past the last week.

use crate::domain::calendar::{ChronoCalendar, IsoCalendar};
use crate::error::{Result, TagError};
use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};

/// Resolves calendar-year-relative week numbers in `0..=54` and inverts them
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtendedWeekResolver<C = ChronoCalendar> {
    calendar: C,
}

impl<C: IsoCalendar> ExtendedWeekResolver<C> {
    pub fn new(calendar: C) -> Self {
        ExtendedWeekResolver { calendar }
    }

    /// Week number of `date` within its own calendar year
    pub fn resolve(&self, date: NaiveDateTime) -> u32 {
        let day = date.date();
        let week = self.calendar.iso_week_of(day).week;

        match day.month() {
            1 if week > 51 => 0,
            12 if week < 2 => self.calendar.iso_week_of(day - Duration::weeks(1)).week + 1,
            _ => week,
        }
    }

    /// Monday 00:00 of extended week `week` in calendar year `year`
    pub fn anchor_of_week(&self, year: i32, week: u32) -> Result<NaiveDateTime> {
        let monday = if week == 0 {
            self.monday(year, 1)? - Duration::weeks(1)
        } else {
            match self.calendar.monday_of_iso_week(year, week) {
                Some(monday) => monday,
                None => {
                    // Overflow week: one past the last ISO week, and must start in `year`
                    tracing::trace!(year, week, "ISO week out of range, anchoring on week - 1");
                    let monday = self.monday(year, week - 1)? + Duration::weeks(1);
                    if monday.year() != year {
                        return Err(TagError::OutOfRange(format!(
                            "week {} does not exist in {}",
                            week, year
                        )));
                    }
                    monday
                }
            }
        };

        Ok(monday.and_time(NaiveTime::MIN))
    }

    fn monday(&self, year: i32, week: u32) -> Result<chrono::NaiveDate> {
        self.calendar.monday_of_iso_week(year, week).ok_or_else(|| {
            TagError::OutOfRange(format!("week {} does not exist in {}", week, year))
        })
    }
}
