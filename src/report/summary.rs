//! "Executive Summary" sheet builder.

use super::format::{format_count, format_currency, format_percent};
use super::stats::CampaignSummary;
use super::styles::SummaryFormats;
use chrono::NaiveDateTime;
use rust_xlsxwriter::{Worksheet, XlsxError};

pub const SUMMARY_SHEET_NAME: &str = "Executive Summary";
pub const SUMMARY_TITLE: &str = "AdMetric Pro - Executive Summary";

/// First row of the metric table (row 4 in Excel terms)
const METRIC_HEADER_ROW: u32 = 3;

/// One label/value pair on the summary sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
    /// Monetary lines are shown bold in the accent color
    pub emphasized: bool,
}

/// The five summary lines, in display order
pub fn summary_lines(summary: &CampaignSummary) -> Vec<SummaryLine> {
    vec![
        SummaryLine { label: "Total Spend", value: format_currency(summary.total_spend), emphasized: true },
        SummaryLine { label: "Total Impressions", value: format_count(summary.total_impressions), emphasized: false },
        SummaryLine { label: "Total Clicks", value: format_count(summary.total_clicks), emphasized: false },
        SummaryLine { label: "Average CPC", value: format_currency(summary.average_cpc), emphasized: true },
        SummaryLine { label: "Overall CTR", value: format_percent(summary.overall_ctr), emphasized: false },
    ]
}

/// Caption under the title, e.g. `Report Generated: 18 December 2025, 14:30`
pub fn generated_caption(generated_at: NaiveDateTime) -> String {
    format!("Report Generated: {}", generated_at.format("%d %B %Y, %H:%M"))
}

/// Build the summary worksheet.
pub fn build_summary_sheet(summary: &CampaignSummary, generated_at: NaiveDateTime) -> Result<Worksheet, XlsxError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(SUMMARY_SHEET_NAME)?;
    let formats = SummaryFormats::new();

    sheet.merge_range(0, 0, 0, 1, SUMMARY_TITLE, &formats.title)?;
    sheet.set_row_height(0, 30)?;

    sheet.merge_range(1, 0, 1, 1, &generated_caption(generated_at), &formats.caption)?;
    sheet.set_row_height(1, 20)?;

    // Spacer
    sheet.set_row_height(2, 15)?;

    sheet.write_string_with_format(METRIC_HEADER_ROW, 0, "Metric", &formats.header)?;
    sheet.write_string_with_format(METRIC_HEADER_ROW, 1, "Value", &formats.header)?;
    sheet.set_row_height(METRIC_HEADER_ROW, 25)?;

    for (offset, line) in summary_lines(summary).iter().enumerate() {
        let row = METRIC_HEADER_ROW + 1 + offset as u32;
        let value_format = if line.emphasized { &formats.emphasized_value } else { &formats.value };

        sheet.write_string_with_format(row, 0, line.label, &formats.label)?;
        sheet.write_string_with_format(row, 1, &line.value, value_format)?;
        sheet.set_row_height(row, 22)?;
    }

    sheet.set_column_width(0, 25)?;
    sheet.set_column_width(1, 20)?;

    Ok(sheet)
}
