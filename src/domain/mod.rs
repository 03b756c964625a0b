//! Domain layer - Tag codec and calendar logic

pub mod base54;
pub mod calendar;
pub mod datetag;
pub mod instant;
pub mod tag;
pub mod tick;
pub mod week;

pub use base54::{Alphabet, Base54Codec, BASE54_SYMBOLS};
pub use calendar::{ChronoCalendar, IsoCalendar, IsoWeekDate};
pub use datetag::{CodecConfig, DateTag, DateTagCodec, EPOCH_YEAR};
pub use instant::InstantReference;
pub use tag::{RandomSource, Tag, SUFFIX_RANGE};
pub use tick::{TickInterval, WeekAnchorAndTick, TICK_SECONDS};
pub use week::ExtendedWeekResolver;
