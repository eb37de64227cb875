use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::utils::format_date;

/// Inclusive span of calendar dates bounding an analysis window.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(AnalysisError::InvalidInput(format!(
                "start date {} is after end date {}",
                format_date(start),
                format_date(end)
            )));
        }
        Ok(Self { start, end })
    }

    /// Both endpoints count as inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Narrows this range to the overlap with `bounds`, if any.
    pub fn clamp_to(&self, bounds: &DateRange) -> Option<DateRange> {
        let start = self.start.max(bounds.start);
        let end = self.end.min(bounds.end);
        if start > end {
            return None;
        }
        Some(DateRange { start, end })
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} to {}", format_date(self.start), format_date(self.end))
    }
}
