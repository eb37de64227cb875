use chrono::NaiveDate;

use crate::error::{AnalysisError, Result};

/// Canonical date format for display and export, e.g. `2020-03-18`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Input formats accepted when parsing the Date column, tried in order.
const INPUT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a raw Date cell into a calendar date.
///
/// Tries each accepted format in order; anything unparsable fails with
/// `AnalysisError::Format` naming the raw value rather than flowing
/// through as a placeholder.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    INPUT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| AnalysisError::Format(format!("invalid date: {raw}")))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// String-error wrapper so clap can use this as a value parser.
pub fn parse_cli_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(raw).map_err(|e| e.to_string())
}
