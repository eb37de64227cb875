// Domain types and value objects
pub mod attribute;
pub mod date_range;
pub mod record;

// Re-export commonly used types
pub use attribute::Attribute;
pub use date_range::DateRange;
pub use record::PriceRecord;
