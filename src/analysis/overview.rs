use serde::Serialize;
use statrs::statistics::Statistics;

use crate::analysis::extremes;
use crate::domain::Attribute;
use crate::error::Result;
use crate::models::PriceSeries;

/// Descriptive statistics for one attribute over a series window.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct PriceOverview {
    pub attribute: Attribute,
    pub rows: usize,
    pub min_value: f64,
    pub max_value: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub spread: f64,
    pub spread_percent: f64,
}

/// Summarizes `attribute` across `series`: mean, sample standard deviation
/// and the min-to-max spread, absolute and as a percentage of the maximum.
pub fn overview(series: &PriceSeries, attribute: Attribute) -> Result<PriceOverview> {
    let found = extremes(series, attribute)?;
    let values = series.attribute_values(attribute);

    let mean = values.mean();
    // Sample std dev needs at least two observations.
    let std_dev = if values.len() < 2 { 0.0 } else { values.std_dev() };

    let spread = found.max_value - found.min_value;
    let spread_percent = if found.max_value == 0.0 {
        0.0
    } else {
        (spread / found.max_value) * 100.0
    };

    Ok(PriceOverview {
        attribute,
        rows: series.len(),
        min_value: found.min_value,
        max_value: found.max_value,
        mean,
        std_dev,
        spread,
        spread_percent,
    })
}
