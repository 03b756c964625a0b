//! Date tag codec: instant <-> (year offset, week, tick)
//!
//! A date tag is three symbols. `aQu` reads as year 2024 (`a` = 0), extended
//! week 39 (`Q`), tick 19 (`u`): 2024-09-25 13:23:09 - 2024-09-25 16:37:00.

use crate::domain::base54::{Alphabet, Base54Codec};
use crate::domain::calendar::{ChronoCalendar, IsoCalendar};
use crate::domain::tick::{TickInterval, WeekAnchorAndTick, TICK_SECONDS, WEEK_SECONDS};
use crate::domain::week::ExtendedWeekResolver;
use crate::error::{Result, TagError};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// First year a tag can express (year offset 0)
pub const EPOCH_YEAR: i32 = 2024;

/// Symbols in the date part of a tag
pub const DATE_TAG_LEN: usize = 3;

/// Highest week number `encode` can produce (the overflow week)
const MAX_WEEK: u64 = 53;

/// Fixed parameters of the codec, injected at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    pub epoch_year: i32,
    pub tick_seconds: i64,
    pub alphabet: Alphabet,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            epoch_year: EPOCH_YEAR,
            tick_seconds: TICK_SECONDS,
            alphabet: Alphabet::default(),
        }
    }
}

impl CodecConfig {
    /// Check that every week and tick fits in one symbol and that the covered
    /// years are representable dates
    pub fn validate(&self) -> Result<()> {
        if self.tick_seconds <= 0 || self.tick_seconds > WEEK_SECONDS {
            return Err(TagError::Config(format!(
                "tick length must be between 1 and {} seconds, got {}",
                WEEK_SECONDS, self.tick_seconds
            )));
        }

        let radix = self.alphabet.radix();
        if radix <= MAX_WEEK {
            return Err(TagError::InvalidAlphabet(format!(
                "{} symbols cannot write week {} as one symbol",
                radix, MAX_WEEK
            )));
        }

        let ticks = WeekAnchorAndTick::new(self.tick_seconds).ticks_per_week() as u64;
        if ticks > radix {
            return Err(TagError::InvalidAlphabet(format!(
                "{} symbols cannot write {} ticks per week as one symbol",
                radix, ticks
            )));
        }

        // Week 0 anchors in the year before the epoch, the overflow week in the year after the last
        let representable =
            |year: Option<i32>| year.is_some_and(|y| NaiveDate::from_ymd_opt(y, 1, 1).is_some());
        if !representable(self.epoch_year.checked_sub(1))
            || !representable(self.epoch_year.checked_add(radix as i32))
        {
            return Err(TagError::Config(format!(
                "epoch year {} is outside the supported calendar",
                self.epoch_year
            )));
        }

        Ok(())
    }
}

/// The date part of a tag. Ordering follows time: year, then week, then tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTag {
    pub year_offset: u32,
    pub week: u32,
    pub tick: u32,
}

impl DateTag {
    pub fn new(year_offset: u32, week: u32, tick: u32) -> Self {
        DateTag {
            year_offset,
            week,
            tick,
        }
    }
}

/// Converts instants to date tags and date tags back to tick intervals
#[derive(Debug, Clone)]
pub struct DateTagCodec<C = ChronoCalendar> {
    epoch_year: i32,
    digits: Base54Codec,
    weeks: ExtendedWeekResolver<C>,
    ticks: WeekAnchorAndTick,
}

impl Default for DateTagCodec<ChronoCalendar> {
    fn default() -> Self {
        Self::from_checked(CodecConfig::default(), ChronoCalendar)
    }
}

impl DateTagCodec<ChronoCalendar> {
    pub fn new(config: CodecConfig) -> Result<Self> {
        Self::with_calendar(config, ChronoCalendar)
    }
}

impl<C: IsoCalendar> DateTagCodec<C> {
    pub fn with_calendar(config: CodecConfig, calendar: C) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_checked(config, calendar))
    }

    fn from_checked(config: CodecConfig, calendar: C) -> Self {
        DateTagCodec {
            epoch_year: config.epoch_year,
            digits: Base54Codec::new(config.alphabet),
            weeks: ExtendedWeekResolver::new(calendar),
            ticks: WeekAnchorAndTick::new(config.tick_seconds),
        }
    }

    pub fn digits(&self) -> &Base54Codec {
        &self.digits
    }

    pub fn epoch_year(&self) -> i32 {
        self.epoch_year
    }

    /// Last calendar year whose offset still fits in one symbol
    pub fn last_year(&self) -> i32 {
        self.epoch_year + self.digits.alphabet().len() as i32 - 1
    }

    /// Map an instant to its date tag
    pub fn encode(&self, date: NaiveDateTime) -> Result<DateTag> {
        let year_offset = date.year() - self.epoch_year;
        if year_offset < 0 {
            return Err(TagError::OutOfRange(format!(
                "{} is before {}",
                date, self.epoch_year
            )));
        }
        if date.year() > self.last_year() {
            return Err(TagError::OutOfRange(format!(
                "{} is after {}",
                date,
                self.last_year()
            )));
        }

        let week = self.weeks.resolve(date);
        let anchor = WeekAnchorAndTick::week_anchor(date);
        let tick = self.ticks.to_tick(date, anchor);

        let tag = DateTag::new(year_offset as u32, week, tick);
        tracing::debug!(%date, ?tag, "encoded date tag");
        Ok(tag)
    }

    /// Render the three symbols of a date tag
    pub fn render(&self, tag: &DateTag) -> String {
        let mut text = String::with_capacity(DATE_TAG_LEN);
        text.push_str(&self.digits.encode(tag.year_offset as u64));
        text.push_str(&self.digits.encode(tag.week as u64));
        text.push_str(&self.digits.encode(tag.tick as u64));
        text
    }

    /// Encode and render in one step
    pub fn encode_to_string(&self, date: NaiveDateTime) -> Result<String> {
        let tag = self.encode(date)?;
        Ok(self.render(&tag))
    }

    /// Parse the three symbols of a date tag
    pub fn parse(&self, text: &str) -> Result<DateTag> {
        let symbols: Vec<char> = text.chars().collect();
        if symbols.len() != DATE_TAG_LEN {
            return Err(TagError::InvalidTag(format!(
                "expected {} symbols, got {} in '{}'",
                DATE_TAG_LEN,
                symbols.len(),
                text
            )));
        }

        let digit = |symbol: char| -> Result<u32> {
            Ok(self.digits.alphabet().index_of(symbol)? as u32)
        };

        Ok(DateTag::new(
            digit(symbols[0])?,
            digit(symbols[1])?,
            digit(symbols[2])?,
        ))
    }

    /// Interval denoted by a date tag
    pub fn interval(&self, tag: &DateTag) -> Result<TickInterval> {
        if tag.tick >= self.ticks.ticks_per_week() {
            return Err(TagError::OutOfRange(format!(
                "tick {} is past the last tick of a week ({})",
                tag.tick,
                self.ticks.ticks_per_week() - 1
            )));
        }

        let year = i32::try_from(tag.year_offset)
            .ok()
            .filter(|_| (tag.year_offset as u64) < self.digits.alphabet().radix())
            .and_then(|offset| self.epoch_year.checked_add(offset))
            .ok_or_else(|| {
                TagError::OutOfRange(format!(
                    "year offset {} is past {}",
                    tag.year_offset,
                    self.last_year()
                ))
            })?;
        let anchor = self.weeks.anchor_of_week(year, tag.week)?;
        Ok(self.ticks.interval_of_tick(anchor, tag.tick))
    }

    /// Parse a three-symbol date tag and return its interval
    pub fn decode(&self, text: &str) -> Result<TickInterval> {
        let tag = self.parse(text)?;
        let interval = self.interval(&tag)?;
        tracing::debug!(text, ?tag, %interval, "decoded date tag");
        Ok(interval)
    }
}
