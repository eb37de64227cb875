use crate::error::{AnalysisError, Result};

/// Outcome of buying at the minimum and selling at the maximum.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SimulationOutcome {
    pub cash_invested: f64,
    pub shares_bought: f64,
    pub final_value: f64,
    pub profit_loss: f64,
    pub roi_percent: f64,
}

/// Sizes a position of `cash_invested` at `min_value` and values it at
/// `max_value`. Fractional shares are allowed.
///
/// The extreme dates play no role here: the maximum is treated as the exit
/// price even when it occurred before the minimum.
pub fn simulate(cash_invested: f64, min_value: f64, max_value: f64) -> Result<SimulationOutcome> {
    if !cash_invested.is_finite() || cash_invested <= 0.0 {
        return Err(AnalysisError::InvalidInput(format!(
            "cash invested must be a positive amount, got {cash_invested}"
        )));
    }
    if min_value == 0.0 {
        return Err(AnalysisError::DivisionByZero(
            "minimum price is zero, cannot size a position".to_string(),
        ));
    }

    let shares_bought = cash_invested / min_value;
    let final_value = shares_bought * max_value;
    let profit_loss = final_value - cash_invested;
    let roi_percent = ((max_value - min_value) / min_value) * 100.0;

    Ok(SimulationOutcome {
        cash_invested,
        shares_bought,
        final_value,
        profit_loss,
        roi_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulate_computes_profit_and_roi() {
        let outcome = simulate(1000.0, 20.0, 30.0).unwrap();
        assert_eq!(outcome.shares_bought, 50.0);
        assert_eq!(outcome.final_value, 1500.0);
        assert_eq!(outcome.profit_loss, 500.0);
        assert_eq!(outcome.roi_percent, 50.0);
    }

    #[test]
    fn test_simulate_textbook_round_numbers() {
        // Buy 1000 at a low of 100, sell the lot at 150.
        let outcome = simulate(1000.0, 100.0, 150.0).unwrap();
        assert_eq!(outcome.shares_bought, 10.0);
        assert_eq!(outcome.final_value, 1500.0);
        assert_eq!(outcome.profit_loss, 500.0);
        assert_eq!(outcome.roi_percent, 50.0);
    }

    #[test]
    fn test_flat_prices_yield_zero_profit() {
        let outcome = simulate(1000.0, 25.0, 25.0).unwrap();
        assert_eq!(outcome.final_value, 1000.0);
        assert_eq!(outcome.profit_loss, 0.0);
        assert_eq!(outcome.roi_percent, 0.0);
    }

    #[test]
    fn test_zero_cash_is_invalid_input() {
        assert!(matches!(
            simulate(0.0, 20.0, 30.0),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_negative_cash_is_invalid_input() {
        assert!(matches!(
            simulate(-100.0, 20.0, 30.0),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_nan_cash_is_invalid_input() {
        assert!(matches!(
            simulate(f64::NAN, 20.0, 30.0),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_minimum_is_division_by_zero() {
        assert!(matches!(
            simulate(1000.0, 0.0, 30.0),
            Err(AnalysisError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_invalid_cash_is_reported_before_zero_minimum() {
        // Both preconditions fail; the cash check has priority.
        assert!(matches!(
            simulate(0.0, 0.0, 30.0),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_fractional_shares_are_kept_exact() {
        let outcome = simulate(1000.0, 3.0, 6.0).unwrap();
        assert!((outcome.shares_bought - 1000.0 / 3.0).abs() < 1e-12);
        assert!((outcome.final_value - 2000.0).abs() < 1e-9);
    }
}
