//! Financial-year keys such as `"2025-2026"`.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// A financial year, identified by the calendar years it spans.
///
/// Each financial year owns an independent costing model; nothing is derived
/// across years.
///
/// # Examples
///
/// ```rust
/// use engine::FinancialYear;
///
/// let year: FinancialYear = "2025-2026".parse().unwrap();
/// assert_eq!(year.start(), 2025);
/// assert_eq!(year.to_string(), "2025-2026");
/// assert!("2025-2027".parse::<FinancialYear>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FinancialYear {
    start: i32,
}

impl FinancialYear {
    pub fn new(start: i32) -> ResultEngine<Self> {
        if !(1000..=9998).contains(&start) {
            return Err(EngineError::InvalidFinancialYear(format!(
                "start year {start} out of range"
            )));
        }
        Ok(Self { start })
    }

    /// The financial year `date` falls in, for years starting on the first
    /// day of `start_month` (1 = January).
    pub fn containing(date: NaiveDate, start_month: u32) -> ResultEngine<Self> {
        if !(1..=12).contains(&start_month) {
            return Err(EngineError::InvalidFinancialYear(format!(
                "invalid start month {start_month}"
            )));
        }
        if date.month() >= start_month {
            Self::new(date.year())
        } else {
            Self::new(date.year() - 1)
        }
    }

    #[must_use]
    pub const fn start(self) -> i32 {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> i32 {
        self.start + 1
    }
}

impl fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end())
    }
}

impl FromStr for FinancialYear {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidFinancialYear(s.to_string());

        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        let is_year = |v: &str| v.len() == 4 && v.chars().all(|c| c.is_ascii_digit());
        if !is_year(start) || !is_year(end) {
            return Err(invalid());
        }
        let start: i32 = start.parse().map_err(|_| invalid())?;
        let end: i32 = end.parse().map_err(|_| invalid())?;
        if end != start + 1 {
            return Err(invalid());
        }
        Self::new(start)
    }
}

impl TryFrom<String> for FinancialYear {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FinancialYear> for String {
    fn from(value: FinancialYear) -> Self {
        value.to_string()
    }
}
