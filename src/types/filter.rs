//! History filter types.
//!
//! Status and date-range filters applied by the store's query path. Date
//! boundaries are computed once from local "now" at call time; a record is
//! compared in local wall-clock terms so "today" means the device's current
//! calendar day.

use crate::types::Maturity;
use chrono::{DateTime, Duration, Local, NaiveDateTime, NaiveTime};
use std::fmt;

/// Filter on the maturity class of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Pass every record through.
    All,
    /// Keep only records with the given class.
    Only(Maturity),
}

impl StatusFilter {
    /// Whether a record with the given status passes this filter.
    pub fn matches(&self, status: Maturity) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status == *wanted,
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::All
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(status) => write!(f, "{}", status),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Ok(Self::Only(s.parse()?))
    }
}

/// Trailing date-range filter, anchored at the start of the current local day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DateRange {
    /// No date filtering.
    #[default]
    All,
    /// The current local calendar day.
    Today,
    /// The trailing 7x24h window from the start of today.
    Week,
    /// The trailing 30x24h window from the start of today.
    Month,
}

impl DateRange {
    /// Inclusive lower bound for this range, in local wall-clock time.
    ///
    /// `None` means no bound. Computed once from the supplied `now` so that
    /// a clock change mid-query cannot shift the window.
    pub fn cutoff(&self, now: DateTime<Local>) -> Option<NaiveDateTime> {
        let start_of_today = now.date_naive().and_time(NaiveTime::MIN);
        match self {
            Self::All => None,
            Self::Today => Some(start_of_today),
            Self::Week => Some(start_of_today - Duration::days(7)),
            Self::Month => Some(start_of_today - Duration::days(30)),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Today => write!(f, "today"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
        }
    }
}
