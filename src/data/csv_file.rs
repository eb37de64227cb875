use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use strum::IntoEnumIterator;

use crate::domain::{Attribute, PriceRecord};
use crate::error::{AnalysisError, Result};
use crate::models::{PriceSeries, SeriesOrigin};
use crate::utils::parse_date;

pub const DATE_COLUMN: &str = "Date";

/// Reads a price series from a CSV file on disk. The series name is taken
/// from the file stem.
pub fn load_csv_file(path: &Path) -> Result<PriceSeries> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let file = std::fs::File::open(path)?;
    let origin = SeriesOrigin::UserFile(path.display().to_string());
    read_series(file, name, origin)
}

/// Parses CSV text into a column-major series.
///
/// The header must carry `Date`, `Open`, `High`, `Low` and `Close` exactly
/// (matching is case sensitive). Columns beyond those five are ignored.
/// Every data row must parse and prices must be finite numbers.
pub fn read_series<R: Read>(input: R, name: String, origin: SeriesOrigin) -> Result<PriceSeries> {
    let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);

    let headers = reader.headers()?.clone();
    let (date_idx, price_indices) = resolve_columns(&headers)?;

    let mut series = PriceSeries::new(name, origin);
    for (row_idx, row) in reader.records().enumerate() {
        let record = row?;
        series.push(parse_row(&record, date_idx, &price_indices, row_idx + 2)?);
    }

    if series.is_empty() {
        return Err(AnalysisError::Format("no data rows in input".to_string()));
    }

    log::info!("Loaded {} rows for {}", series.len(), series.name);
    Ok(series)
}

fn resolve_columns(headers: &StringRecord) -> Result<(usize, HashMap<Attribute, usize>)> {
    let find = |wanted: &str| {
        headers
            .iter()
            .position(|header| header == wanted)
            .ok_or_else(|| AnalysisError::Format(format!("missing required column: {wanted}")))
    };

    let date_idx = find(DATE_COLUMN)?;
    let mut price_indices = HashMap::new();
    for attribute in Attribute::iter() {
        price_indices.insert(attribute, find(attribute.column_name())?);
    }
    Ok((date_idx, price_indices))
}

fn parse_row(
    record: &StringRecord,
    date_idx: usize,
    price_indices: &HashMap<Attribute, usize>,
    line: usize,
) -> Result<PriceRecord> {
    let field = |idx: usize| {
        record
            .get(idx)
            .ok_or_else(|| AnalysisError::Format(format!("line {line}: row has too few fields")))
    };

    let raw_date = field(date_idx)?;
    let date = parse_date(raw_date)
        .map_err(|_| AnalysisError::Format(format!("line {line}: invalid date: {raw_date}")))?;

    let price = |attribute: Attribute| -> Result<f64> {
        let raw = field(price_indices[&attribute])?;
        let value: f64 = raw.parse().map_err(|_| {
            AnalysisError::Format(format!("line {line}: invalid {attribute} price: {raw:?}"))
        })?;
        if !value.is_finite() {
            return Err(AnalysisError::Format(format!(
                "line {line}: non-finite {attribute} price: {raw}"
            )));
        }
        Ok(value)
    };

    Ok(PriceRecord {
        date,
        open: price(Attribute::Open)?,
        high: price(Attribute::High)?,
        low: price(Attribute::Low)?,
        close: price(Attribute::Close)?,
    })
}
