//! Scoring week type.

use crate::error::{FflError, Result};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NFL scoring weeks (1 through 18).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Week(u16);

impl Week {
    pub const FIRST: u16 = 1;
    pub const LAST: u16 = 18;

    /// Create a week, rejecting values outside the regular season.
    pub fn new(week: u16) -> Result<Self> {
        if (Self::FIRST..=Self::LAST).contains(&week) {
            Ok(Self(week))
        } else {
            Err(FflError::InvalidWeek {
                value: week.to_string(),
            })
        }
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value = trimmed.parse::<u16>().map_err(|_| FflError::InvalidWeek {
            value: trimmed.to_string(),
        })?;
        Self::new(value)
    }
}
