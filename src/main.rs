use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde_json::json;

use stock_scope::config::{ANALYSIS, EXPORT, SAMPLE};
use stock_scope::report::{write_chart_data, write_summary};
use stock_scope::utils::format_date;
use stock_scope::{
    AnalysisRequest,
    AnalysisResult,
    Cli, // The struct from lib.rs
    DataSource,
    DateRange,
    PriceOverview,
    PriceSeries,
    analysis,
    load_series,
};

fn main() {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    if let Err(err) = run_cli(&args) {
        log::error!("💥 {err:#}");
        std::process::exit(1);
    }
}

fn run_cli(args: &Cli) -> anyhow::Result<()> {
    // C. Load Prices
    let source = match &args.file {
        Some(path) => DataSource::File(path.clone()),
        None => DataSource::Sample,
    };
    let series = load_series(&source).context("failed to load price data")?;
    if series.origin.is_sample() {
        log::warn!("⚠️  {}", SAMPLE.warning);
    }

    // D. Resolve the Analysis Window
    let bounds = series.date_bounds()?;
    let requested = DateRange::new(
        args.start.unwrap_or(bounds.start),
        args.end.unwrap_or(bounds.end),
    )?;
    let range = match requested.clamp_to(&bounds) {
        Some(clamped) => {
            if clamped != requested {
                log::info!("Clamped {requested} to the dates on file ({clamped})");
            }
            clamped
        }
        // No overlap with the data; the filter below reports it.
        None => requested,
    };

    // E. Run the Analysis
    let request = AnalysisRequest {
        attribute: args.attribute,
        range,
        cash_invested: args.cash,
    };
    let result = analysis::run(&series, &request)?;
    let window = series.filter(&range)?;
    let summary = analysis::overview(&window, args.attribute)?;

    // F. Report
    if args.json {
        let payload = json!({ "result": result, "overview": summary });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_report(&series, &result, &summary);
    }

    // G. Optional File Output
    if let Some(export) = &args.export {
        let path = export
            .clone()
            .unwrap_or_else(|| PathBuf::from(EXPORT.default_summary_filename));
        write_summary(&result, &path)
            .with_context(|| format!("failed to write summary to {}", path.display()))?;
        println!("Summary written to {}", path.display());
    }
    if let Some(path) = &args.chart {
        write_chart_data(&window, args.attribute, path)
            .with_context(|| format!("failed to write chart data to {}", path.display()))?;
        println!("Chart data written to {}", path.display());
    }

    Ok(())
}

fn print_report(series: &PriceSeries, result: &AnalysisResult, overview: &PriceOverview) {
    let decimals = ANALYSIS.display_decimals;
    let origin_note = if series.origin.is_sample() {
        " (bundled sample)"
    } else {
        ""
    };

    println!("Stock: {}{}", series.name, origin_note);
    println!(
        "Attribute: {} | Window: {} | Trading days: {}",
        result.attribute, result.range, overview.rows
    );
    println!();
    println!("Price details");
    println!(
        "  Minimum: {:.decimals$} on {}",
        result.min_value,
        format_date(result.min_date)
    );
    println!(
        "  Maximum: {:.decimals$} on {}",
        result.max_value,
        format_date(result.max_date)
    );
    println!(
        "  Spread: {:.decimals$} ({:.decimals$}% of the maximum)",
        overview.spread, overview.spread_percent
    );
    println!(
        "  Mean: {:.decimals$} | Std dev: {:.decimals$}",
        overview.mean, overview.std_dev
    );
    println!();
    println!(
        "Investment results for {:.decimals$} in cash",
        result.cash_invested
    );
    println!("  Shares bought: {:.decimals$}", result.shares_bought);
    println!("  Final value: {:.decimals$}", result.final_value);
    println!("  Profit/Loss: {:.decimals$}", result.profit_loss);
    println!("  ROI: {:.decimals$}%", result.roi_percent);
}
