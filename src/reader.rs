//! CSV ingestion and validation.
//!
//! Reads a Meta Ads export, checks that the required columns are present,
//! and maps each row onto a typed [`CampaignRecord`]. Numeric cells that
//! cannot be parsed are replaced with zero rather than rejected, so one bad
//! cell never blocks a report.

use crate::config::SourceColumns;
use crate::error::ReportError;
use crate::types::{CampaignField, CampaignRecord, CampaignTable};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, error, info, warn};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Expected input extension, compared case-insensitively
const CSV_EXTENSION: &str = "csv";

/// Read and validate a Meta Ads CSV file.
///
/// # Arguments
/// * `path` - Path to the exported CSV file
/// * `columns` - Header labels of the four required source columns
///
/// # Returns
/// A `CampaignTable` with rows in file order and columns in the fixed
/// order name, spend, clicks, impressions. Extra columns are dropped.
pub fn read_campaign_csv(path: &Path, columns: &SourceColumns) -> Result<CampaignTable, ReportError> {
    info!("Checking file path: {}", path.display());
    check_input_path(path)?;

    info!("Reading Meta Ads CSV file...");
    let file = File::open(path).map_err(|source| ReportError::Unreadable { path: path.to_path_buf(), source })?;
    let mut reader = ReaderBuilder::new().has_headers(true).flexible(true).from_reader(file);

    let headers = reader.headers().map_err(|e| malformed(path, e))?.clone();
    if is_blank_header(&headers) {
        error!("CSV file is empty: {}", path.display());
        return Err(ReportError::EmptyInput { path: path.to_path_buf() });
    }

    info!("Mapping Meta Ads columns...");
    let positions = locate_columns(&headers, columns)?;

    info!("Validating data types...");
    let mut substitutions = 0usize;
    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = result.map_err(|e| malformed(path, e))?;
        // Short rows are padded with empty cells; long rows cannot be aligned
        if row.len() > headers.len() {
            let line = row.position().map(|p| p.line()).unwrap_or(idx as u64 + 2);
            let diagnostic =
                format!("line {}: found record with {} fields, but the header has {}", line, row.len(), headers.len());
            error!("Failed to parse CSV file: {}", diagnostic);
            return Err(ReportError::MalformedInput { path: path.to_path_buf(), diagnostic });
        }
        records.push(positions.extract(&row, idx + 1, columns, &mut substitutions));
    }

    if substitutions > 0 {
        warn!("Substituted 0 for {} unparsable numeric cell(s) in {}", substitutions, path.display());
    }

    info!("Loaded {} campaign records from {}", records.len(), path.display());
    Ok(CampaignTable::new(records))
}

/// The path must exist, be a regular file, and end in `.csv`
fn check_input_path(path: &Path) -> Result<(), ReportError> {
    if !path.is_file() {
        error!("File not found: {}", path.display());
        return Err(ReportError::NotFound { path: path.to_path_buf() });
    }

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !extension.eq_ignore_ascii_case(CSV_EXTENSION) {
        let shown = if extension.is_empty() { "<none>".to_string() } else { format!(".{}", extension) };
        error!("Invalid file type: {} (expected .csv)", shown);
        return Err(ReportError::UnsupportedFormat { path: path.to_path_buf(), extension: shown });
    }

    Ok(())
}

/// An empty file, or one holding only whitespace, has no usable header
fn is_blank_header(headers: &StringRecord) -> bool {
    headers.is_empty() || (headers.len() == 1 && headers[0].trim_start_matches('\u{feff}').trim().is_empty())
}

fn malformed(path: &Path, err: csv::Error) -> ReportError {
    error!("Failed to parse CSV file: {}", err);
    ReportError::MalformedInput { path: path.to_path_buf(), diagnostic: err.to_string() }
}

/// Column index of each required field in the source header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnPositions {
    campaign_name: usize,
    amount_spent: usize,
    link_clicks: usize,
    impressions: usize,
}

/// Find every required label in the header, reporting all that are missing
fn locate_columns(headers: &StringRecord, columns: &SourceColumns) -> Result<ColumnPositions, ReportError> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (pos, header) in headers.iter().enumerate() {
        let header = if pos == 0 { header.trim_start_matches('\u{feff}') } else { header };
        // First occurrence wins for duplicated labels
        index.entry(header).or_insert(pos);
    }

    let missing: Vec<String> = columns
        .required()
        .iter()
        .filter(|(label, _)| !index.contains_key(label))
        .map(|(label, _)| label.to_string())
        .collect();

    if !missing.is_empty() {
        error!("Missing required columns: {:?}", missing);
        return Err(ReportError::Schema { missing });
    }

    let position = |field: CampaignField| {
        columns.label_for(field).and_then(|label| index.get(label).copied()).unwrap_or_default()
    };

    Ok(ColumnPositions {
        campaign_name: position(CampaignField::CampaignName),
        amount_spent: position(CampaignField::AmountSpent),
        link_clicks: position(CampaignField::LinkClicks),
        impressions: position(CampaignField::Impressions),
    })
}

impl ColumnPositions {
    /// Build a typed record from one CSV row, coercing numeric cells
    fn extract(
        &self,
        row: &StringRecord,
        line: usize,
        columns: &SourceColumns,
        substitutions: &mut usize,
    ) -> CampaignRecord {
        let cell = |pos: usize| row.get(pos).unwrap_or("");

        let mut note = |field: CampaignField, raw: &str| {
            *substitutions += 1;
            debug!(
                "Row {}: unparsable {} value {:?}, using 0",
                line,
                columns.label_for(field).unwrap_or(field.key()),
                raw
            );
        };

        let raw_spend = cell(self.amount_spent);
        let amount_spent = coerce_amount(raw_spend).unwrap_or_else(|| {
            note(CampaignField::AmountSpent, raw_spend);
            0.0
        });

        let raw_clicks = cell(self.link_clicks);
        let link_clicks = coerce_count(raw_clicks).unwrap_or_else(|| {
            note(CampaignField::LinkClicks, raw_clicks);
            0
        });

        let raw_impressions = cell(self.impressions);
        let impressions = coerce_count(raw_impressions).unwrap_or_else(|| {
            note(CampaignField::Impressions, raw_impressions);
            0
        });

        CampaignRecord::new(cell(self.campaign_name), amount_spent, link_clicks, impressions)
    }
}

/// Parse a currency amount; `None` for anything that is not a finite number
pub fn coerce_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a count; decimal values are truncated toward zero
pub fn coerce_count(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v.trunc() as i64))
}

#[cfg(test)]
#[path = "reader_test.rs"]
mod reader_test;
