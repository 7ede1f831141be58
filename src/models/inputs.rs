//! Validated run parameters.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{AppError, Result};

/// Number of search results to request. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResultCount(u32);

impl ResultCount {
    pub fn new(count: u32) -> Result<Self> {
        if count == 0 {
            return Err(AppError::validation("Input number must be greater than zero."));
        }
        Ok(Self(count))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl FromStr for ResultCount {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::validation("Input number must be a integer."));
        }
        let count = s
            .parse::<u32>()
            .map_err(|e| AppError::validation(format!("Input number is out of range: {e}")))?;
        Self::new(count)
    }
}

impl fmt::Display for ResultCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `YYYY-MM` month selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: u16,
    pub month: u8,
}

fn year_month_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([0-9]{4})-([0-9]{2})$").expect("static pattern is valid"))
}

impl FromStr for YearMonth {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let caps = year_month_pattern().captures(s).ok_or_else(|| {
            AppError::validation(format!(
                "Invalid year-month '{s}'. Use YYYY-MM (e.g., 2020-11)"
            ))
        })?;

        let year: u16 = caps[1]
            .parse()
            .map_err(|_| AppError::validation("Invalid year"))?;
        let month: u8 = caps[2]
            .parse()
            .map_err(|_| AppError::validation("Invalid month"))?;
        if !(1..=12).contains(&month) {
            return Err(AppError::validation(format!(
                "Invalid month '{month:02}'. Must be 01-12"
            )));
        }

        Ok(Self { year, month })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Everything a harvest run needs from the operator and the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInputs {
    /// Number of results to request
    pub rows: ResultCount,

    /// Month the operator asked about. Not applied to the query.
    pub year_month: YearMonth,

    /// Date stamped into the report filename
    pub run_date: NaiveDate,
}
