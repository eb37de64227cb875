// Price data loading
pub mod csv_file;
pub mod sample;

// Re-export commonly used types
pub use csv_file::{DATE_COLUMN, load_csv_file, read_series};
pub use sample::load_sample;

use std::path::PathBuf;

use crate::error::Result;
use crate::models::PriceSeries;

/// Where to read prices from.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DataSource {
    File(PathBuf),
    Sample,
}

pub fn load_series(source: &DataSource) -> Result<PriceSeries> {
    match source {
        DataSource::File(path) => load_csv_file(path),
        DataSource::Sample => load_sample(),
    }
}
