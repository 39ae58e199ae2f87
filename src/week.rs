//! Week identifiers.
//!
//! A roster covers one week, identified by its Monday. The dashed form
//! (`DD-MM-YYYY`) is used as a storage or sharing key; the slashed form
//! (`DD/MM/YYYY`) is for display.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const KEY_FORMAT: &str = "%d-%m-%Y";
const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Error parsing a week key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeekIdError {
    /// The key is not a `DD-MM-YYYY` date.
    #[error("invalid week key '{key}': expected DD-MM-YYYY")]
    InvalidKey {
        /// The rejected input.
        key: String,
    },
}

/// The Monday of a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekId {
    monday: NaiveDate,
}

impl WeekId {
    /// The week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let offset = date.weekday().num_days_from_monday();
        Self {
            monday: date - Duration::days(i64::from(offset)),
        }
    }

    /// Parses a `DD-MM-YYYY` key. Any day of the week is accepted and
    /// normalized to its Monday.
    pub fn parse_key(key: &str) -> Result<Self, WeekIdError> {
        NaiveDate::parse_from_str(key.trim(), KEY_FORMAT)
            .map(Self::containing)
            .map_err(|_| WeekIdError::InvalidKey {
                key: key.to_string(),
            })
    }

    /// First day of the week.
    pub fn monday(&self) -> NaiveDate {
        self.monday
    }

    /// Whether `date` falls in this week.
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::containing(date) == *self
    }

    /// The `DD-MM-YYYY` key.
    pub fn to_key(&self) -> String {
        self.monday.format(KEY_FORMAT).to_string()
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.monday.format(DISPLAY_FORMAT))
    }
}
