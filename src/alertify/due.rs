//! Due dates and the overdue rule.
//!
//! A due date is either a calendar day or the `N/A` sentinel. A dated reminder
//! is never overdue on its due day itself: it becomes overdue once the current
//! instant is strictly past the local midnight that ends that day. Overdue is
//! always computed on the fly and never written back to the store.

use crate::error::AlertifyError;
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const NO_DUE_DATE: &str = "N/A";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Due {
    #[default]
    None,
    On(NaiveDate),
}

impl Due {
    /// Overdue check against the local clock.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(&Local::now())
    }

    /// Overdue check against an explicit instant. The midnight ending the due
    /// day is taken in the time zone of `now`.
    pub fn is_overdue_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        let Due::On(date) = self else {
            return false;
        };
        // The last representable day never ends.
        let Some(next_day) = date.succ_opt() else {
            return false;
        };
        let midnight = next_day.and_time(NaiveTime::MIN);
        match now.timezone().from_local_datetime(&midnight).earliest() {
            Some(end_of_day) => *now > end_of_day,
            // Midnight skipped by a DST jump: fall back to wall-clock comparison.
            None => now.naive_local() > midnight,
        }
    }
}

impl fmt::Display for Due {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Due::None => write!(f, "{}", NO_DUE_DATE),
            Due::On(date) => write!(f, "{}", date.format(DATE_FORMAT)),
        }
    }
}

impl FromStr for Due {
    type Err = AlertifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(NO_DUE_DATE) {
            return Ok(Due::None);
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Due::On)
            .map_err(|_| AlertifyError::InvalidDate(s.to_string()))
    }
}

impl TryFrom<String> for Due {
    type Error = AlertifyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Due> for String {
    fn from(due: Due) -> Self {
        due.to_string()
    }
}
