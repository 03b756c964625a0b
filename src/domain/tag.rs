//! Full tags: date part plus random disambiguation suffix (`aQu-TWr`)

use crate::domain::calendar::IsoCalendar;
use crate::domain::datetag::{DateTag, DateTagCodec};
use crate::error::{Result, TagError};
use chrono::NaiveDateTime;

/// Separator between the date part and the suffix
pub const SUFFIX_SEPARATOR: char = '-';

/// Symbols in the suffix
pub const SUFFIX_LEN: usize = 3;

/// Suffix values are drawn from `0..SUFFIX_RANGE`
pub const SUFFIX_RANGE: u32 = 53 * 53 * 53;

/// Source of disambiguation values. Implementations hold state, so callers
/// confine them to one thread or synchronise access.
pub trait RandomSource {
    /// A value in `0..SUFFIX_RANGE`, independent of the date
    fn next_disambiguator(&mut self) -> u32;
}

/// A date tag with an optional disambiguation suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag {
    pub date: DateTag,
    pub suffix: Option<u32>,
}

impl Tag {
    /// Tag for `date` with a fresh suffix from `random`
    pub fn generate<C, R>(
        codec: &DateTagCodec<C>,
        date: NaiveDateTime,
        random: &mut R,
    ) -> Result<Self>
    where
        C: IsoCalendar,
        R: RandomSource + ?Sized,
    {
        let date = codec.encode(date)?;
        let suffix = random.next_disambiguator();
        Ok(Tag {
            date,
            suffix: Some(suffix),
        })
    }

    /// Tag for `date` without a suffix
    pub fn without_suffix<C: IsoCalendar>(
        codec: &DateTagCodec<C>,
        date: NaiveDateTime,
    ) -> Result<Self> {
        Ok(Tag {
            date: codec.encode(date)?,
            suffix: None,
        })
    }

    /// Render as `abc` or `abc-xyz`
    pub fn render<C: IsoCalendar>(&self, codec: &DateTagCodec<C>) -> Result<String> {
        let mut text = codec.render(&self.date);
        if let Some(suffix) = self.suffix {
            text.push(SUFFIX_SEPARATOR);
            text.push_str(&codec.digits().encode_padded(suffix as u64, SUFFIX_LEN)?);
        }
        Ok(text)
    }

    /// Parse `abc` or `abc-xyz`, splitting on the first separator
    pub fn parse<C: IsoCalendar>(codec: &DateTagCodec<C>, text: &str) -> Result<Self> {
        let text = text.trim();
        let (date_part, suffix_part) = match text.split_once(SUFFIX_SEPARATOR) {
            Some((date_part, suffix_part)) => (date_part, Some(suffix_part)),
            None => (text, None),
        };

        let date = codec.parse(date_part)?;
        let suffix = match suffix_part {
            Some(part) => {
                if part.chars().count() != SUFFIX_LEN {
                    return Err(TagError::InvalidTag(format!(
                        "suffix must be {} symbols, got '{}'",
                        SUFFIX_LEN, part
                    )));
                }
                Some(codec.digits().decode(part)? as u32)
            }
            None => None,
        };

        Ok(Tag { date, suffix })
    }
}
