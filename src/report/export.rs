use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::AnalysisResult;

/// One-line analysis summary in the published column layout. Values are
/// written at full precision; rounding is a display concern.
#[derive(Debug, Serialize)]
struct SummaryRow {
    #[serde(rename = "Date Range")]
    date_range: String,
    #[serde(rename = "Initial Cash")]
    initial_cash: f64,
    #[serde(rename = "Minimum Price")]
    minimum_price: f64,
    #[serde(rename = "Maximum Price")]
    maximum_price: f64,
    #[serde(rename = "Final Value")]
    final_value: f64,
    #[serde(rename = "Profit/Loss")]
    profit_loss: f64,
    #[serde(rename = "ROI (%)")]
    roi_percent: f64,
}

impl SummaryRow {
    fn from_result(result: &AnalysisResult) -> Self {
        Self {
            date_range: result.range.to_string(),
            initial_cash: result.cash_invested,
            minimum_price: result.min_value,
            maximum_price: result.max_value,
            final_value: result.final_value,
            profit_loss: result.profit_loss,
            roi_percent: result.roi_percent,
        }
    }
}

pub fn write_summary(result: &AnalysisResult, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.serialize(SummaryRow::from_result(result))?;
    writer.flush()?;
    log::info!("Wrote analysis summary to {}", path.display());
    Ok(())
}
