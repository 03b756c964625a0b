//! ISO week calendar capability

use chrono::{Datelike, NaiveDate, Weekday};

/// A date expressed as ISO year, ISO week and weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoWeekDate {
    pub year: i32,
    pub week: u32,
    pub weekday: Weekday,
}

/// The standard ISO-8601 week primitives the week resolver builds on
pub trait IsoCalendar {
    /// ISO year, week and weekday of a date
    fn iso_week_of(&self, date: NaiveDate) -> IsoWeekDate;

    /// Monday of ISO week `week` in ISO year `year`.
    /// Returns None when that week does not exist in that year.
    fn monday_of_iso_week(&self, year: i32, week: u32) -> Option<NaiveDate>;
}

/// `IsoCalendar` backed by chrono
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChronoCalendar;

impl IsoCalendar for ChronoCalendar {
    fn iso_week_of(&self, date: NaiveDate) -> IsoWeekDate {
        let iso = date.iso_week();
        IsoWeekDate {
            year: iso.year(),
            week: iso.week(),
            weekday: date.weekday(),
        }
    }

    fn monday_of_iso_week(&self, year: i32, week: u32) -> Option<NaiveDate> {
        NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
    }
}
