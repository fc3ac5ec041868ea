/// Core data structures for campaign data
///
/// This module defines the records that flow through the pipeline:
/// raw campaign rows after ingestion, the same rows with derived metrics,
/// and the field identifiers used to lay them out in the report.
use serde::{Deserialize, Serialize};

/// One of the six fields that appear in the detail sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignField {
    CampaignName,
    AmountSpent,
    LinkClicks,
    Impressions,
    Ctr,
    Cpc,
}

impl CampaignField {
    /// Fields read from the source file, in output order
    pub const SOURCE: [CampaignField; 4] =
        [CampaignField::CampaignName, CampaignField::AmountSpent, CampaignField::LinkClicks, CampaignField::Impressions];

    /// Fields written to the detail sheet, in column order
    pub const REPORT: [CampaignField; 6] = [
        CampaignField::CampaignName,
        CampaignField::AmountSpent,
        CampaignField::LinkClicks,
        CampaignField::Impressions,
        CampaignField::Ctr,
        CampaignField::Cpc,
    ];

    /// Stable internal key
    pub fn key(&self) -> &'static str {
        match self {
            CampaignField::CampaignName => "campaign_name",
            CampaignField::AmountSpent => "amount_spent",
            CampaignField::LinkClicks => "link_clicks",
            CampaignField::Impressions => "impressions",
            CampaignField::Ctr => "ctr",
            CampaignField::Cpc => "cpc",
        }
    }

    /// Presentational column header
    pub fn label(&self) -> &'static str {
        match self {
            CampaignField::CampaignName => "Campaign Name",
            CampaignField::AmountSpent => "Amount Spent (ZAR)",
            CampaignField::LinkClicks => "Link Clicks",
            CampaignField::Impressions => "Impressions",
            CampaignField::Ctr => "CTR (%)",
            CampaignField::Cpc => "CPC (ZAR)",
        }
    }

    /// How values of this field are rendered
    pub fn value_kind(&self) -> ValueKind {
        match self {
            CampaignField::CampaignName => ValueKind::Text,
            CampaignField::AmountSpent | CampaignField::Cpc => ValueKind::Currency,
            CampaignField::LinkClicks | CampaignField::Impressions => ValueKind::Count,
            CampaignField::Ctr => ValueKind::Percent,
        }
    }
}

/// Rendering category of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Currency,
    Count,
    Percent,
}

/// A single cell value, borrowed from a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

/// A campaign row after ingestion and type coercion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub campaign_name: String,
    pub amount_spent: f64,
    pub link_clicks: i64,
    pub impressions: i64,
}

impl CampaignRecord {
    pub fn new(campaign_name: impl Into<String>, amount_spent: f64, link_clicks: i64, impressions: i64) -> Self {
        Self { campaign_name: campaign_name.into(), amount_spent, link_clicks, impressions }
    }
}

/// Ordered campaign rows, source order preserved
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CampaignTable {
    records: Vec<CampaignRecord>,
}

impl CampaignTable {
    pub fn new(records: Vec<CampaignRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CampaignRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A campaign row with its derived metrics appended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    #[serde(flatten)]
    pub campaign: CampaignRecord,
    /// Click-through rate as a percentage, rounded to 2 decimals
    pub ctr: f64,
    /// Cost per click in currency units, rounded to 2 decimals
    pub cpc: f64,
}

impl MetricRecord {
    /// Look up the value of a field by identifier
    pub fn value(&self, field: CampaignField) -> FieldValue<'_> {
        match field {
            CampaignField::CampaignName => FieldValue::Text(&self.campaign.campaign_name),
            CampaignField::AmountSpent => FieldValue::Number(self.campaign.amount_spent),
            CampaignField::LinkClicks => FieldValue::Number(self.campaign.link_clicks as f64),
            CampaignField::Impressions => FieldValue::Number(self.campaign.impressions as f64),
            CampaignField::Ctr => FieldValue::Number(self.ctr),
            CampaignField::Cpc => FieldValue::Number(self.cpc),
        }
    }
}

/// Campaign rows with metrics, produced by the metrics engine
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsTable {
    rows: Vec<MetricRecord>,
}

impl MetricsTable {
    pub fn new(rows: Vec<MetricRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[MetricRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
