use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Attribute, DateRange};

// ============================================================================
// AnalysisRequest: What the caller wants evaluated
// ============================================================================

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub attribute: Attribute,
    pub range: DateRange,
    pub cash_invested: f64,
}

// ============================================================================
// AnalysisResult: Extremes plus the simulated buy-low/sell-high outcome
// ============================================================================

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub attribute: Attribute,
    pub range: DateRange,

    // Extremes of the selected attribute
    pub min_value: f64,
    pub min_date: NaiveDate,
    pub max_value: f64,
    pub max_date: NaiveDate,

    // Simulated outcome
    pub cash_invested: f64,
    pub shares_bought: f64,
    pub final_value: f64,
    pub profit_loss: f64,
    pub roi_percent: f64,
}
