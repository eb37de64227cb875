use argminmax::ArgMinMax;
use chrono::NaiveDate;

use crate::domain::Attribute;
use crate::error::{AnalysisError, Result};
use crate::models::PriceSeries;

/// Lowest and highest value of one attribute, with the dates they occurred.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Extremes {
    pub min_value: f64,
    pub min_date: NaiveDate,
    pub max_value: f64,
    pub max_date: NaiveDate,
}

/// Finds the extremes of `attribute` across `series`.
///
/// Ties resolve to the first row holding the extreme value, so with
/// date-ordered input the earliest date wins.
pub fn extremes(series: &PriceSeries, attribute: Attribute) -> Result<Extremes> {
    if series.is_empty() {
        return Err(AnalysisError::EmptyRange("series has no rows".to_string()));
    }

    let values = series.attribute_values(attribute);
    let (min_idx, max_idx) = values.argminmax();

    Ok(Extremes {
        min_value: values[min_idx],
        min_date: series.dates[min_idx],
        max_value: values[max_idx],
        max_date: series.dates[max_idx],
    })
}
