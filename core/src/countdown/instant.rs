//! Target instant parsing
//!
//! The launch moment is configured as `YYYY-MM-DDTHH:mm:ss±HH:mm`. The offset is
//! kept exactly as written so `+05:30` always means IST, whatever the local zone
//! of the machine running the countdown.

use std::fmt;
use std::str::FromStr;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use super::CountdownError;

const TARGET_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
);

/// Fixed launch moment. Immutable after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetInstant(OffsetDateTime);

impl TargetInstant {
    /// Parse a target string, failing on anything but the strict offset format.
    pub fn parse(input: &str) -> Result<Self, CountdownError> {
        OffsetDateTime::parse(input.trim(), TARGET_FORMAT)
            .map(Self)
            .map_err(|source| CountdownError::InvalidTarget {
                input: input.to_string(),
                source,
            })
    }

    pub fn from_datetime(at: OffsetDateTime) -> Self {
        Self(at)
    }

    pub fn as_datetime(&self) -> OffsetDateTime {
        self.0
    }
}

impl FromStr for TargetInstant {
    type Err = CountdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TargetInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.format(TARGET_FORMAT) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}
