// Analysis algorithms over a windowed price series
pub mod extremes;
pub mod overview;
pub mod simulation;

// Re-export commonly used types
pub use extremes::{Extremes, extremes};
pub use overview::{PriceOverview, overview};
pub use simulation::{SimulationOutcome, simulate};

use crate::error::Result;
use crate::models::{AnalysisRequest, AnalysisResult, PriceSeries};

/// Runs the full pipeline for one request: window the series to the
/// requested dates, locate the extremes of the chosen attribute, then
/// simulate the buy-low/sell-high outcome.
pub fn run(series: &PriceSeries, request: &AnalysisRequest) -> Result<AnalysisResult> {
    let window = series.filter(&request.range)?;
    let found = extremes(&window, request.attribute)?;
    let outcome = simulate(request.cash_invested, found.min_value, found.max_value)?;

    Ok(AnalysisResult {
        attribute: request.attribute,
        range: request.range,
        min_value: found.min_value,
        min_date: found.min_date,
        max_value: found.max_value,
        max_date: found.max_date,
        cash_invested: outcome.cash_invested,
        shares_bought: outcome.shares_bought,
        final_value: outcome.final_value,
        profit_loss: outcome.profit_loss,
        roi_percent: outcome.roi_percent,
    })
}
