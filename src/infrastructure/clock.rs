//! Wall clocks

use chrono::{Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which wall clock `now` reads. Either way the reading is used as a naive instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    /// UTC wall clock
    #[default]
    Utc,
    /// The machine's local wall clock
    Local,
}

impl ClockMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockMode::Utc => "utc",
            ClockMode::Local => "local",
        }
    }
}

impl FromStr for ClockMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utc" => Ok(ClockMode::Utc),
            "local" => Ok(ClockMode::Local),
            _ => Err(format!(
                "Invalid clock: '{}'. Valid clocks are: utc, local",
                s
            )),
        }
    }
}

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    mode: ClockMode,
}

impl SystemClock {
    pub fn new(mode: ClockMode) -> Self {
        SystemClock { mode }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        match self.mode {
            ClockMode::Utc => Utc::now().naive_utc(),
            ClockMode::Local => Local::now().naive_local(),
        }
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_clock_mode_from_str() {
        assert_eq!(ClockMode::from_str("utc").unwrap(), ClockMode::Utc);
        assert_eq!(ClockMode::from_str("LOCAL").unwrap(), ClockMode::Local);
        assert!(ClockMode::from_str("mars").is_err());
    }

    #[test]
    fn test_clock_mode_as_str_round_trips() {
        for mode in [ClockMode::Utc, ClockMode::Local] {
            assert_eq!(ClockMode::from_str(mode.as_str()).unwrap(), mode);
        }
    }

    #[test]
    fn test_system_clock_is_current() {
        let before = Utc::now().naive_utc();
        let now = SystemClock::new(ClockMode::Utc).now();
        let after = Utc::now().naive_utc();
        assert!(before <= now && now <= after);
    }

    #[test]
    fn test_fixed_clock() {
        let instant = NaiveDate::from_ymd_opt(2024, 9, 25)
            .unwrap()
            .and_hms_opt(13, 30, 0)
            .unwrap();
        assert_eq!(FixedClock(instant).now(), instant);
    }
}
