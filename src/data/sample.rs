use crate::config::SAMPLE;
use crate::data::csv_file::read_series;
use crate::error::Result;
use crate::models::{PriceSeries, SeriesOrigin};

const SAMPLE_CSV: &str = include_str!("../../assets/TSLA.csv");

/// Bundled TSLA daily prices for 2020, used when no file is supplied.
pub fn load_sample() -> Result<PriceSeries> {
    read_series(
        SAMPLE_CSV.as_bytes(),
        SAMPLE.name.to_string(),
        SeriesOrigin::BundledSample,
    )
}
