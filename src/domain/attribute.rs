use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Price column selectable for analysis.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    ValueEnum,
)]
pub enum Attribute {
    Open,
    High,
    Low,
    #[default]
    Close,
}

impl Attribute {
    /// Exact (case-sensitive) CSV header this attribute is read from.
    pub fn column_name(&self) -> &'static str {
        match self {
            Attribute::Open => "Open",
            Attribute::High => "High",
            Attribute::Low => "Low",
            Attribute::Close => "Close",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}
