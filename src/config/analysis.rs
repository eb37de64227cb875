//! Analysis defaults

use crate::domain::Attribute;

/// Defaults applied when the caller leaves analysis knobs unset.
pub struct AnalysisDefaults {
    pub attribute: Attribute,
    // Cash amount assumed invested at the minimum price
    pub cash_invested: f64,
    // Decimal places used when printing prices and money
    pub display_decimals: usize,
}

pub const ANALYSIS: AnalysisDefaults = AnalysisDefaults {
    attribute: Attribute::Close,
    cash_invested: 1000.0,
    display_decimals: 2,
};
