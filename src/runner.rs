use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::metrics;
use crate::reader;
use crate::report::{self, GeneratedReport};
use log::{debug, info, warn};

/// Run the full pipeline for one input file
///
/// This is the main entry point for report generation: read the CSV,
/// derive CTR and CPC, then write the workbook. Every stage is terminal on
/// error; nothing is written unless the first two stages succeed.
pub fn run_pipeline(config: &ReportConfig) -> Result<GeneratedReport, ReportError> {
    debug!("Starting pipeline for {}", config.input_path.display());

    // Step 1: Load and validate the export
    info!("Step 1/3: Reading Meta Ads CSV...");
    let table = reader::read_campaign_csv(&config.input_path, &config.source_columns)?;
    let total_spend: f64 = table.records().iter().map(|r| r.amount_spent).sum();
    info!("Loaded {} campaigns, total spend R{:.2}", table.len(), total_spend);
    if table.is_empty() {
        warn!("{} has a header but no campaign rows", config.input_path.display());
    }

    // Step 2: Derive per-campaign metrics
    info!("Step 2/3: Calculating CTR and CPC metrics...");
    let metrics_table = metrics::add_metrics(&table);
    match report::mean_positive_cpc(&metrics_table) {
        Some(mean) => info!("Average CPC across campaigns with clicks: R{:.2}", mean),
        None => info!("No campaigns recorded any clicks"),
    }
    let above = report::count_above_threshold(&metrics_table, config.report.cpc_threshold);
    info!("{} campaigns above R{:.2} CPC threshold", above, config.report.cpc_threshold);

    // Step 3: Render and persist
    info!("Step 3/3: Generating Excel report...");
    let generated = report::generate_report(&metrics_table, &config.report)?;

    debug!("Pipeline finished: {}", generated.path.display());
    Ok(generated)
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
