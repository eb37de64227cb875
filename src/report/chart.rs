use std::path::Path;

use chrono::NaiveDate;

use crate::data::DATE_COLUMN;
use crate::domain::Attribute;
use crate::error::Result;
use crate::models::PriceSeries;
use crate::utils::format_date;

/// Projects `series` to ordered (date, value) points of one attribute,
/// the shape charting tools want.
pub fn chart_series(series: &PriceSeries, attribute: Attribute) -> Vec<(NaiveDate, f64)> {
    series
        .dates
        .iter()
        .zip(series.attribute_values(attribute))
        .map(|(&date, &value)| (date, value))
        .collect()
}

/// Writes the date column plus the selected attribute, one row per trading
/// day in series order, for plotting with external tools.
pub fn write_chart_data(series: &PriceSeries, attribute: Attribute, path: &Path) -> Result<()> {
    let points = chart_series(series, attribute);

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([DATE_COLUMN, attribute.column_name()])?;
    for (date, value) in &points {
        writer.write_record([format_date(*date), value.to_string()])?;
    }
    writer.flush()?;

    log::info!("Wrote {} chart rows to {}", points.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PriceRecord;
    use crate::models::SeriesOrigin;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    fn sample_series() -> PriceSeries {
        let mut series = PriceSeries::new("TEST", SeriesOrigin::BundledSample);
        series.push(PriceRecord {
            date: date("2020-01-02"),
            open: 10.5,
            high: 12.5,
            low: 9.5,
            close: 11.5,
        });
        series.push(PriceRecord {
            date: date("2020-01-03"),
            open: 11.5,
            high: 13.5,
            low: 10.5,
            close: 12.5,
        });
        series
    }

    #[test]
    fn test_chart_series_projects_dates_and_values() {
        let points = chart_series(&sample_series(), Attribute::Close);
        assert_eq!(points, vec![
            (date("2020-01-02"), 11.5),
            (date("2020-01-03"), 12.5),
        ]);
    }

    #[test]
    fn test_chart_data_has_two_columns_in_series_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chart.csv");
        write_chart_data(&sample_series(), Attribute::Close, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![
            "Date,Close",
            "2020-01-02,11.5",
            "2020-01-03,12.5",
        ]);
    }

    #[test]
    fn test_chart_data_follows_the_selected_attribute() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chart.csv");
        write_chart_data(&sample_series(), Attribute::Open, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Date,Open");
        assert_eq!(lines[1], "2020-01-02,10.5");
    }
}
