//! Console rendering of a finished run.

use super::export::GeneratedReport;
use super::format::{format_count, format_currency, format_percent};
use serde_json::{Value, json};

/// Summary block lines, without trailing newlines
pub fn format_run_summary(report: &GeneratedReport) -> Vec<String> {
    let summary = &report.summary;
    vec![
        "=== Summary ===".to_string(),
        format!("Report:        {}", report.path.display()),
        format!("Campaigns:     {}", summary.campaigns),
        format!("Total spend:   {}", format_currency(summary.total_spend)),
        format!("Impressions:   {}", format_count(summary.total_impressions)),
        format!("Clicks:        {}", format_count(summary.total_clicks)),
        format!("Average CPC:   {}", format_currency(summary.average_cpc)),
        format!("Overall CTR:   {}", format_percent(summary.overall_ctr)),
        format!("Above {} CPC: {}", format_currency(report.cpc_threshold), report.highlighted),
    ]
}

pub fn print_run_summary(report: &GeneratedReport) {
    println!();
    for line in format_run_summary(report) {
        println!("{}", line);
    }
}

/// Machine-readable form of the run summary
pub fn summary_json(report: &GeneratedReport) -> Value {
    json!({
        "report_path": report.path.display().to_string(),
        "generated_at": report.generated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        "cpc_threshold": report.cpc_threshold,
        "highlighted": report.highlighted,
        "summary": report.summary,
    })
}

pub fn print_summary_json(report: &GeneratedReport) -> Result<(), String> {
    let text = serde_json::to_string_pretty(&summary_json(report)).map_err(|e| e.to_string())?;
    println!("{}", text);
    Ok(())
}
