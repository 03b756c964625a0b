//! Output formatting utilities

use crate::application::TagDescription;
use crate::infrastructure::Config;
use std::fmt::Write;

/// Format a decoded tag: `<start> - <end> (Week: w, Tick: t)`
pub fn format_description(description: &TagDescription, time_format: &str) -> String {
    let interval = &description.interval;
    format!(
        "{} - {} (Week: {}, Tick: {})",
        format_instant(interval.start, time_format),
        format_instant(interval.end, time_format),
        description.tag.date.week,
        description.tag.date.tick
    )
}

/// Format all config values, one `key = value` per line
pub fn format_config(config: &Config) -> String {
    let mut output = String::new();
    output.push_str(&format!("clock = {}\n", config.clock.as_str()));
    output.push_str(&format!("suffix = {}\n", config.suffix));
    output.push_str(&format!("time_format = {}\n", config.time_format));
    output
}

/// chrono reports unknown specifiers as `fmt::Error`, so fall back to the default form
fn format_instant(instant: chrono::NaiveDateTime, time_format: &str) -> String {
    let mut text = String::new();
    match write!(text, "{}", instant.format(time_format)) {
        Ok(()) => text,
        Err(_) => {
            tracing::warn!(time_format, "invalid time format, using default");
            instant.to_string()
        }
    }
}
