//! rhiz-tag - Date tags for notes and archives
//!
//! Turns an instant into a short, human-writable tag such as `aQu-TWr` and back
//! into the ~3.2 hour interval it denotes. The three date symbols are the year
//! since 2024, the extended ISO week and a 52nd of that week, all in base 54.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{DateTag, DateTagCodec, Tag, TickInterval};
pub use error::TagError;
