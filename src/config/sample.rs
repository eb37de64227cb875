//! Bundled sample data

pub struct SampleConfig {
    pub name: &'static str,
    // Shown whenever an analysis falls back to the bundled data
    pub warning: &'static str,
}

pub const SAMPLE: SampleConfig = SampleConfig {
    name: "TSLA",
    warning: "Sample data is being used. Supply your own stock CSV for personalized analysis. \
              The file must contain Date, Open, High, Low and Close columns.",
};
