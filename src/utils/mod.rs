// Shared helpers (date parsing and formatting)
pub mod date_utils;

pub use date_utils::{DATE_FORMAT, format_date, parse_cli_date, parse_date};
