//! Aggregate statistics over a metrics table.
//!
//! This module computes the figures shown on the summary sheet and the
//! threshold counts reported by the pipeline.

use crate::types::MetricsTable;
use serde::Serialize;

/// Aggregates for the executive summary.
///
/// Values are kept unrounded; rounding happens only when they are rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignSummary {
    pub campaigns: usize,
    pub total_spend: f64,
    pub total_impressions: i64,
    pub total_clicks: i64,
    /// Total spend / total clicks, 0 when there are no clicks
    pub average_cpc: f64,
    /// Total clicks / total impressions * 100, 0 when there are no impressions
    pub overall_ctr: f64,
}

/// Calculate summary statistics over every campaign.
///
/// # Arguments
/// * `table` - Campaign rows with metrics
///
/// # Returns
/// A `CampaignSummary` with sums and the guarded average CPC / overall CTR.
pub fn summarize_campaigns(table: &MetricsTable) -> CampaignSummary {
    let total_spend: f64 = table.rows().iter().map(|r| r.campaign.amount_spent).sum();
    // Counts saturate at i64::MAX instead of overflowing
    let total_impressions = table.rows().iter().map(|r| r.campaign.impressions).fold(0, i64::saturating_add);
    let total_clicks = table.rows().iter().map(|r| r.campaign.link_clicks).fold(0, i64::saturating_add);

    let average_cpc = if total_clicks > 0 { total_spend / total_clicks as f64 } else { 0.0 };
    let overall_ctr =
        if total_impressions > 0 { total_clicks as f64 / total_impressions as f64 * 100.0 } else { 0.0 };

    CampaignSummary { campaigns: table.len(), total_spend, total_impressions, total_clicks, average_cpc, overall_ctr }
}

/// Highlight rule: strictly greater than, so a CPC equal to the threshold is not flagged
pub fn exceeds_threshold(cpc: f64, threshold: f64) -> bool {
    cpc > threshold
}

/// Number of campaigns whose CPC exceeds the threshold
pub fn count_above_threshold(table: &MetricsTable, threshold: f64) -> usize {
    table.rows().iter().filter(|r| exceeds_threshold(r.cpc, threshold)).count()
}

/// Mean CPC over campaigns that had any clicks, None if there are none
pub fn mean_positive_cpc(table: &MetricsTable) -> Option<f64> {
    let positive: Vec<f64> = table.rows().iter().map(|r| r.cpc).filter(|cpc| *cpc > 0.0).collect();
    if positive.is_empty() { None } else { Some(positive.iter().sum::<f64>() / positive.len() as f64) }
}
