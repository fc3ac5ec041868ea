//! Report assembly and persistence.
//!
//! This module builds the two-sheet workbook and writes it to disk. The
//! workbook is serialized in memory and staged in a temporary file next to
//! the destination, then renamed into place, so a failed run never leaves a
//! partial report under the final name.

use super::detail::build_detail_sheet;
use super::stats::{CampaignSummary, count_above_threshold, summarize_campaigns};
use super::summary::build_summary_sheet;
use crate::error::ReportError;
use crate::types::MetricsTable;
use chrono::NaiveDateTime;
use log::{debug, error, info};
use rust_xlsxwriter::{Workbook, XlsxError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default directory for generated reports
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default CPC above which detail rows are highlighted, in ZAR
pub const DEFAULT_CPC_THRESHOLD: f64 = 20.00;

/// Per-invocation settings for the report assembler
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub output_dir: PathBuf,
    pub cpc_threshold: f64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR), cpc_threshold: DEFAULT_CPC_THRESHOLD }
    }
}

/// A report that was written successfully
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub path: PathBuf,
    pub generated_at: NaiveDateTime,
    pub summary: CampaignSummary,
    pub cpc_threshold: f64,
    /// Campaigns with CPC above the threshold
    pub highlighted: usize,
}

/// `AdMetric_Pro_Report_YYYY-MM-DD_HHMM.xlsx`
pub fn report_filename(generated_at: NaiveDateTime) -> String {
    format!("AdMetric_Pro_Report_{}.xlsx", generated_at.format("%Y-%m-%d_%H%M"))
}

/// Assemble the in-memory workbook: detail sheet first, then the summary.
pub fn build_workbook(
    table: &MetricsTable,
    cpc_threshold: f64,
    generated_at: NaiveDateTime,
) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();

    if table.is_empty() {
        debug!("No campaign rows, detail sheet gets the header only");
    } else {
        debug!("Writing {} campaign rows to worksheet", table.len());
    }
    workbook.push_worksheet(build_detail_sheet(table, cpc_threshold)?);

    debug!("Creating Executive Summary sheet");
    workbook.push_worksheet(build_summary_sheet(&summarize_campaigns(table), generated_at)?);

    Ok(workbook)
}

/// Generate the Excel report, timestamped with the current local time.
///
/// # Arguments
/// * `table` - Campaign rows with metrics
/// * `options` - Output directory and CPC threshold
///
/// # Returns
/// The written report's path and summary figures.
pub fn generate_report(table: &MetricsTable, options: &ReportOptions) -> Result<GeneratedReport, ReportError> {
    generate_report_at(table, options, chrono::Local::now().naive_local())
}

/// Generate the Excel report with an explicit creation instant.
pub fn generate_report_at(
    table: &MetricsTable,
    options: &ReportOptions,
    generated_at: NaiveDateTime,
) -> Result<GeneratedReport, ReportError> {
    info!("Generating Excel report for {} campaigns...", table.len());

    let output_dir = &options.output_dir;
    fs::create_dir_all(output_dir).map_err(|e| {
        error!("Failed to create output directory {}: {}", output_dir.display(), e);
        ReportError::write_failure(output_dir, e)
    })?;

    let path = output_dir.join(report_filename(generated_at));
    info!("Generated timestamped filename: {}", path.display());

    let buffer = build_workbook(table, options.cpc_threshold, generated_at)
        .and_then(|mut workbook| workbook.save_to_buffer())
        .map_err(|e| {
            error!("Failed to generate report: {}", e);
            ReportError::write_failure(&path, e)
        })?;

    info!("Saving report to: {}", path.display());
    persist_atomically(&path, output_dir, &buffer)?;

    let summary = summarize_campaigns(table);
    let highlighted = count_above_threshold(table, options.cpc_threshold);
    info!(
        "Executive Summary created: Total Spend R{:.2}, {} campaigns, {} above R{:.2} CPC",
        summary.total_spend, summary.campaigns, highlighted, options.cpc_threshold
    );
    info!("Report generated successfully: {}", path.display());

    Ok(GeneratedReport { path, generated_at, summary, cpc_threshold: options.cpc_threshold, highlighted })
}

/// Stage `bytes` in a temporary file inside `dir`, then rename onto `path`.
///
/// The temporary file is removed automatically if any step fails.
fn persist_atomically(path: &Path, dir: &Path, bytes: &[u8]) -> Result<(), ReportError> {
    let fail = |e: std::io::Error| {
        error!("Failed to write report {}: {}", path.display(), e);
        ReportError::write_failure(path, e)
    };

    let mut staged =
        tempfile::Builder::new().prefix(".admetric-").suffix(".xlsx.part").tempfile_in(dir).map_err(fail)?;
    staged.write_all(bytes).map_err(fail)?;
    staged.as_file().sync_all().map_err(fail)?;
    staged.persist(path).map_err(|e| fail(e.error))?;

    Ok(())
}

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;
