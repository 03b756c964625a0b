//! Conformance stream: one instant per input line, one date tag per output line
//!
//! Lines are either `YYYY-MM-DD HH:MM:SS` or decimal unix seconds, so the same
//! harness can drive any implementation of the codec.

use crate::domain::instant::{from_unix_seconds, DATETIME_FORMAT};
use crate::domain::DateTagCodec;
use crate::error::{Result, TagError};
use chrono::NaiveDateTime;
use std::io::{BufRead, Write};

/// Answers date-tag requests over a line-oriented stream
pub struct ConformanceStream {
    codec: DateTagCodec,
}

impl ConformanceStream {
    pub fn new(codec: DateTagCodec) -> Self {
        ConformanceStream { codec }
    }

    /// Parse one request line
    pub fn parse_line(line: &str) -> Result<NaiveDateTime> {
        let line = line.trim();
        if !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit()) {
            let seconds: i64 = line
                .parse()
                .map_err(|_| TagError::InvalidInstant(line.to_string()))?;
            return from_unix_seconds(seconds);
        }

        NaiveDateTime::parse_from_str(line, DATETIME_FORMAT)
            .map_err(|_| TagError::InvalidInstant(line.to_string()))
    }

    /// Answer every request on `input`, flushing after each answer.
    /// Blank lines are skipped. Stops at the first bad line.
    /// Returns the number of tags written.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<usize> {
        let mut answered = 0;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let date = Self::parse_line(&line)?;
            let tag = self.codec.encode_to_string(date)?;
            writeln!(output, "{}", tag)?;
            output.flush()?;
            answered += 1;
        }

        tracing::debug!(answered, "conformance stream closed");
        Ok(answered)
    }
}
