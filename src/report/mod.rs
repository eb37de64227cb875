// Writers for analysis output
pub mod chart;
pub mod export;

// Re-export commonly used functions
pub use chart::{chart_series, write_chart_data};
pub use export::write_summary;
