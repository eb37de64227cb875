use chrono::NaiveDate;
use itertools::izip;
use serde::{Deserialize, Serialize};

use crate::domain::{Attribute, DateRange, PriceRecord};
use crate::error::{AnalysisError, Result};

// ============================================================================
// SeriesOrigin: Where a price series was loaded from
// ============================================================================

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SeriesOrigin {
    UserFile(String),
    BundledSample,
}

impl SeriesOrigin {
    pub fn is_sample(&self) -> bool {
        matches!(self, SeriesOrigin::BundledSample)
    }
}

// ============================================================================
// PriceSeries: Column-major daily OHLC data for one instrument
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PriceSeries {
    pub name: String,
    pub origin: SeriesOrigin,

    pub dates: Vec<NaiveDate>,

    // Prices
    pub open_prices: Vec<f64>,
    pub high_prices: Vec<f64>,
    pub low_prices: Vec<f64>,
    pub close_prices: Vec<f64>,
}

impl PriceSeries {
    pub fn new(name: impl Into<String>, origin: SeriesOrigin) -> Self {
        Self {
            name: name.into(),
            origin,
            dates: Vec::new(),
            open_prices: Vec::new(),
            high_prices: Vec::new(),
            low_prices: Vec::new(),
            close_prices: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn push(&mut self, record: PriceRecord) {
        self.dates.push(record.date);
        self.open_prices.push(record.open);
        self.high_prices.push(record.high);
        self.low_prices.push(record.low);
        self.close_prices.push(record.close);
    }

    pub fn record(&self, idx: usize) -> PriceRecord {
        PriceRecord {
            date: self.dates[idx],
            open: self.open_prices[idx],
            high: self.high_prices[idx],
            low: self.low_prices[idx],
            close: self.close_prices[idx],
        }
    }

    pub fn attribute_values(&self, attribute: Attribute) -> &[f64] {
        match attribute {
            Attribute::Open => &self.open_prices,
            Attribute::High => &self.high_prices,
            Attribute::Low => &self.low_prices,
            Attribute::Close => &self.close_prices,
        }
    }

    /// Earliest and latest date present, regardless of row order.
    pub fn date_bounds(&self) -> Result<DateRange> {
        let first = self.dates.iter().min();
        let last = self.dates.iter().max();
        match (first, last) {
            (Some(&start), Some(&end)) => Ok(DateRange { start, end }),
            _ => Err(AnalysisError::EmptyRange("series has no rows".to_string())),
        }
    }

    /// New series holding only the rows whose date falls inside `range`.
    /// Row order is preserved.
    pub fn filter(&self, range: &DateRange) -> Result<PriceSeries> {
        let mut filtered = PriceSeries::new(self.name.clone(), self.origin.clone());
        for (&date, &open, &high, &low, &close) in izip!(
            &self.dates,
            &self.open_prices,
            &self.high_prices,
            &self.low_prices,
            &self.close_prices,
        ) {
            if range.contains(date) {
                filtered.push(PriceRecord {
                    date,
                    open,
                    high,
                    low,
                    close,
                });
            }
        }

        if filtered.is_empty() {
            return Err(AnalysisError::EmptyRange(format!("no rows within {range}")));
        }
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    fn record(raw_date: &str, close: f64) -> PriceRecord {
        PriceRecord {
            date: date(raw_date),
            open: close - 1.0,
            high: close + 2.0,
            low: close - 2.0,
            close,
        }
    }

    fn sample_series() -> PriceSeries {
        let mut series = PriceSeries::new("TEST", SeriesOrigin::BundledSample);
        series.push(record("2020-01-02", 10.0));
        series.push(record("2020-01-03", 11.0));
        series.push(record("2020-01-06", 9.0));
        series.push(record("2020-01-07", 12.0));
        series
    }

    #[test]
    fn test_push_and_record_round_trip() {
        let series = sample_series();
        assert_eq!(series.len(), 4);
        let rec = series.record(2);
        assert_eq!(rec.date, date("2020-01-06"));
        assert_eq!(rec.close, 9.0);
        assert_eq!(rec.high, 11.0);
    }

    #[test]
    fn test_attribute_values_selects_column() {
        let series = sample_series();
        assert_eq!(
            series.attribute_values(Attribute::Close),
            &[10.0, 11.0, 9.0, 12.0]
        );
        assert_eq!(series.attribute_values(Attribute::Low)[0], 8.0);
    }

    #[test]
    fn test_date_bounds_handle_unsorted_rows() {
        let mut series = PriceSeries::new("TEST", SeriesOrigin::BundledSample);
        series.push(record("2020-03-01", 10.0));
        series.push(record("2020-01-02", 11.0));
        series.push(record("2020-02-14", 12.0));
        let bounds = series.date_bounds().unwrap();
        assert_eq!(bounds.start, date("2020-01-02"));
        assert_eq!(bounds.end, date("2020-03-01"));
    }

    #[test]
    fn test_date_bounds_on_empty_series_fail() {
        let series = PriceSeries::new("TEST", SeriesOrigin::BundledSample);
        assert!(matches!(
            series.date_bounds(),
            Err(AnalysisError::EmptyRange(_))
        ));
    }

    #[test]
    fn test_filter_keeps_rows_on_boundary_dates() {
        let series = sample_series();
        let range = DateRange::new(date("2020-01-03"), date("2020-01-06")).unwrap();
        let filtered = series.filter(&range).unwrap();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.dates, vec![date("2020-01-03"), date("2020-01-06")]);
        assert_eq!(filtered.close_prices, vec![11.0, 9.0]);
    }

    #[test]
    fn test_filter_preserves_name_and_origin() {
        let series = sample_series();
        let range = DateRange::new(date("2020-01-02"), date("2020-01-07")).unwrap();
        let filtered = series.filter(&range).unwrap();
        assert_eq!(filtered.name, "TEST");
        assert!(filtered.origin.is_sample());
    }

    #[test]
    fn test_filter_with_no_matching_rows_fails() {
        let series = sample_series();
        let range = DateRange::new(date("2020-01-04"), date("2020-01-05")).unwrap();
        let result = series.filter(&range);
        match result {
            Err(AnalysisError::EmptyRange(msg)) => {
                assert!(
                    msg.contains("2020-01-04 to 2020-01-05"),
                    "error should identify the range, got: {msg}"
                );
            }
            other => panic!("expected EmptyRange error, got {other:?}"),
        }
    }
}
