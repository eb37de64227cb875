// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod models;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use analysis::{Extremes, PriceOverview, SimulationOutcome};
pub use data::{DataSource, load_series};
pub use domain::{Attribute, DateRange, PriceRecord};
pub use error::{AnalysisError, Result};
pub use models::{AnalysisRequest, AnalysisResult, PriceSeries, SeriesOrigin};

// CLI argument parsing
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV file with Date, Open, High, Low and Close columns
    /// (bundled TSLA sample data when omitted)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Price column to analyze
    #[arg(long, value_enum, ignore_case = true, default_value_t = config::ANALYSIS.attribute)]
    pub attribute: Attribute,

    /// First date of the analysis window (defaults to the earliest date on file)
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = utils::parse_cli_date)]
    pub start: Option<NaiveDate>,

    /// Last date of the analysis window (defaults to the latest date on file)
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = utils::parse_cli_date)]
    pub end: Option<NaiveDate>,

    /// Cash amount assumed invested at the minimum price
    #[arg(long, default_value_t = config::ANALYSIS.cash_invested)]
    pub cash: f64,

    /// Write the one-row summary CSV, to stock_analysis.csv when no path is given
    #[arg(long, value_name = "PATH")]
    pub export: Option<Option<PathBuf>>,

    /// Write the analyzed window as Date plus attribute rows for plotting
    #[arg(long, value_name = "PATH")]
    pub chart: Option<PathBuf>,

    /// Print the analysis as JSON instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
