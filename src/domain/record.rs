use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Attribute;

/// One trading day of OHLC prices.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PriceRecord {
    pub fn value(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Open => self.open,
            Attribute::High => self.high,
            Attribute::Low => self.low,
            Attribute::Close => self.close,
        }
    }
}
