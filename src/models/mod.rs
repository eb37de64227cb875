// Data models for price analysis
// These modules contain pure business logic independent of I/O

pub mod result;
pub mod series;

// Re-export key types for convenience
pub use result::{AnalysisRequest, AnalysisResult};
pub use series::{PriceSeries, SeriesOrigin};
