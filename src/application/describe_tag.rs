//! Describe tag use case

use crate::domain::{DateTagCodec, Tag, TickInterval};
use crate::error::Result;

/// A parsed tag together with the interval its date part denotes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDescription {
    pub tag: Tag,
    pub interval: TickInterval,
}

/// Service for turning tags back into time intervals
pub struct DescribeTagService {
    codec: DateTagCodec,
}

impl DescribeTagService {
    /// Create a new describe tag service
    pub fn new(codec: DateTagCodec) -> Self {
        DescribeTagService { codec }
    }

    /// Parse `text` (with or without suffix) and decode its date part
    pub fn execute(&self, text: &str) -> Result<TagDescription> {
        let tag = Tag::parse(&self.codec, text)?;
        let interval = self.codec.interval(&tag.date)?;
        tracing::info!(text, %interval, "described tag");
        Ok(TagDescription { tag, interval })
    }
}
