//! Application layer - Use cases and orchestration

pub mod conformance;
pub mod describe_tag;
pub mod generate_tag;
pub mod manage_config;

pub use conformance::ConformanceStream;
pub use describe_tag::{DescribeTagService, TagDescription};
pub use generate_tag::GenerateTagService;
pub use manage_config::ConfigService;
