//! Week anchors and sub-week ticks

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};
use std::fmt;

pub const WEEK_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Length of one tick in seconds: ceil(WEEK_SECONDS / 52)
pub const TICK_SECONDS: i64 = (WEEK_SECONDS + 51) / 52;

/// Half-open interval `[start, end)` denoted by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TickInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TickInterval {
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

impl fmt::Display for TickInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Splits weeks into fixed-length ticks counted from Monday 00:00
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekAnchorAndTick {
    tick_seconds: i64,
}

impl Default for WeekAnchorAndTick {
    fn default() -> Self {
        WeekAnchorAndTick {
            tick_seconds: TICK_SECONDS,
        }
    }
}

impl WeekAnchorAndTick {
    /// Callers keep `tick_seconds > 0`.
    pub fn new(tick_seconds: i64) -> Self {
        WeekAnchorAndTick { tick_seconds }
    }

    pub fn tick_seconds(&self) -> i64 {
        self.tick_seconds
    }

    /// Number of ticks that start inside one week
    pub fn ticks_per_week(&self) -> u32 {
        ((WEEK_SECONDS + self.tick_seconds - 1) / self.tick_seconds) as u32
    }

    /// Monday 00:00 of the week containing `date`
    pub fn week_anchor(date: NaiveDateTime) -> NaiveDateTime {
        let day = date.date();
        let monday = day - Duration::days(day.weekday().num_days_from_monday() as i64);
        monday.and_time(NaiveTime::MIN)
    }

    /// Index of the tick containing `date`, counted from `anchor`
    pub fn to_tick(&self, date: NaiveDateTime, anchor: NaiveDateTime) -> u32 {
        let delta = (date - anchor).num_seconds();
        (delta / self.tick_seconds) as u32
    }

    /// Interval covered by `tick`. Always a full tick wide, so the last tick of a
    /// week reaches a few seconds into the next week.
    pub fn interval_of_tick(&self, anchor: NaiveDateTime, tick: u32) -> TickInterval {
        let start = anchor + Duration::seconds(self.tick_seconds * tick as i64);
        TickInterval {
            start,
            end: start + Duration::seconds(self.tick_seconds),
        }
    }
}
