//! Generate tag use case

use crate::domain::{DateTagCodec, InstantReference, RandomSource, Tag};
use crate::error::Result;
use crate::infrastructure::Clock;

/// Service for generating tags
pub struct GenerateTagService {
    codec: DateTagCodec,
}

impl GenerateTagService {
    /// Create a new generate tag service
    pub fn new(codec: DateTagCodec) -> Self {
        GenerateTagService { codec }
    }

    /// Resolve `instant` against `clock` and render its tag.
    /// Draws a suffix from `random` only when `with_suffix` is true.
    pub fn execute(
        &self,
        instant: &InstantReference,
        clock: &dyn Clock,
        random: &mut dyn RandomSource,
        with_suffix: bool,
    ) -> Result<String> {
        // 1. Resolve the instant
        let date = instant.resolve(clock.now());

        // 2. Encode it, with or without suffix
        let tag = if with_suffix {
            Tag::generate(&self.codec, date, random)?
        } else {
            Tag::without_suffix(&self.codec, date)?
        };

        // 3. Render
        let text = tag.render(&self.codec)?;
        tracing::info!(%date, tag = %text, "generated tag");
        Ok(text)
    }
}
