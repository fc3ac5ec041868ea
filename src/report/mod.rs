//! Report generation module - workbook layout, styling and persistence.
//!
//! This module handles:
//! - Aggregating campaign statistics for the summary
//! - Building the "Campaign Details" and "Executive Summary" sheets
//! - Writing the workbook to disk under a timestamped name
//! - Printing the run summary to the console
//!
//! # Module Organization
//!
//! - `stats` - Summary aggregates and threshold counts
//! - `format` - Display strings for currency, counts and percentages
//! - `styles` - Cell formats and palette
//! - `detail` - Per-campaign sheet
//! - `summary` - Executive summary sheet
//! - `export` - Workbook assembly and atomic write
//! - `console` - Run summary for stdout, plain or JSON

mod console;
mod detail;
mod export;
mod format;
mod stats;
mod styles;
mod summary;

pub use console::{print_run_summary, print_summary_json};
pub use export::{DEFAULT_CPC_THRESHOLD, DEFAULT_OUTPUT_DIR, GeneratedReport, ReportOptions, generate_report};
pub use stats::{count_above_threshold, mean_positive_cpc};
