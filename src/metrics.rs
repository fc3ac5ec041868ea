//! Campaign performance metrics.
//!
//! CTR and CPC with zero-division guards. Both functions are total: a
//! denominator that is zero or negative yields `0.0` instead of an error.

use crate::types::{CampaignTable, MetricRecord, MetricsTable};
use log::{debug, info};

/// Round to two decimal places, halves away from zero.
///
/// Every stored metric and every displayed amount goes through this, so
/// the sheet never disagrees with the computed values.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Click-through rate as a percentage: `clicks / impressions * 100`.
///
/// Returns 0.0 when `impressions <= 0`.
pub fn calculate_ctr(clicks: i64, impressions: i64) -> f64 {
    if impressions <= 0 {
        debug!("Zero or negative impressions, returning CTR of 0.0");
        return 0.0;
    }

    round_to_cents(clicks as f64 / impressions as f64 * 100.0)
}

/// Cost per click in currency units: `spend / clicks`.
///
/// Returns 0.0 when `clicks <= 0`.
pub fn calculate_cpc(spend: f64, clicks: i64) -> f64 {
    if clicks <= 0 {
        debug!("Zero or negative clicks, returning CPC of 0.0");
        return 0.0;
    }

    round_to_cents(spend / clicks as f64)
}

/// Append CTR and CPC to every campaign.
///
/// The input table is left untouched; the result is a new table with the
/// same rows in the same order.
pub fn add_metrics(table: &CampaignTable) -> MetricsTable {
    info!("Calculating CTR and CPC for {} campaigns...", table.len());

    let rows: Vec<MetricRecord> = table
        .records()
        .iter()
        .map(|record| MetricRecord {
            ctr: calculate_ctr(record.link_clicks, record.impressions),
            cpc: calculate_cpc(record.amount_spent, record.link_clicks),
            campaign: record.clone(),
        })
        .collect();

    if let (Some((ctr_min, ctr_max)), Some((cpc_min, cpc_max))) =
        (range(rows.iter().map(|r| r.ctr)), range(rows.iter().map(|r| r.cpc)))
    {
        info!(
            "Metrics calculated successfully. CTR range: {:.2}% - {:.2}%, CPC range: R{:.2} - R{:.2}",
            ctr_min, ctr_max, cpc_min, cpc_max
        );
    }

    MetricsTable::new(rows)
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
