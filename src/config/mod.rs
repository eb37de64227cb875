//! Configuration for the stock analysis tool.

pub mod analysis;
pub mod export;
pub mod sample;

// Re-export commonly used items
pub use analysis::ANALYSIS;
pub use export::EXPORT;
pub use sample::SAMPLE;
