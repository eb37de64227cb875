//! Report output defaults

pub struct ExportConfig {
    // Filename used when --export is passed without a path
    pub default_summary_filename: &'static str,
}

pub const EXPORT: ExportConfig = ExportConfig {
    default_summary_filename: "stock_analysis.csv",
};
