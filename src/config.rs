/// Configuration resolution module
///
/// This module handles:
/// - Building a ReportConfig from CLI arguments
/// - The source header labels expected in the input file
///
/// The pipeline receives a fully resolved, immutable configuration.
use crate::cli::CliArgs;
use crate::report::ReportOptions;
use crate::types::CampaignField;
use log::debug;
use std::path::PathBuf;

/// Header labels of the four required source columns
///
/// Defaults to the labels of a Meta Ads Manager export. Labels are matched
/// exactly and case-sensitively against the CSV header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceColumns {
    pub campaign_name: String,
    pub amount_spent: String,
    pub link_clicks: String,
    pub impressions: String,
}

impl Default for SourceColumns {
    fn default() -> Self {
        Self {
            campaign_name: "Campaign Name".to_string(),
            amount_spent: "Amount Spent (ZAR)".to_string(),
            link_clicks: "Link Clicks".to_string(),
            impressions: "Impressions".to_string(),
        }
    }
}

impl SourceColumns {
    /// Source label for a field, or None for derived fields
    pub fn label_for(&self, field: CampaignField) -> Option<&str> {
        match field {
            CampaignField::CampaignName => Some(&self.campaign_name),
            CampaignField::AmountSpent => Some(&self.amount_spent),
            CampaignField::LinkClicks => Some(&self.link_clicks),
            CampaignField::Impressions => Some(&self.impressions),
            CampaignField::Ctr | CampaignField::Cpc => None,
        }
    }

    /// Required (label, field) pairs in output order
    pub fn required(&self) -> Vec<(&str, CampaignField)> {
        CampaignField::SOURCE.iter().filter_map(|field| self.label_for(*field).map(|label| (label, *field))).collect()
    }
}

/// Everything one invocation needs
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input_path: PathBuf,
    pub source_columns: SourceColumns,
    pub report: ReportOptions,
    pub verbose: bool,
    pub json: bool,
}

impl ReportConfig {
    /// Resolve CLI arguments into a configuration
    pub fn from_args(args: &CliArgs) -> Self {
        debug!(
            "Building report config: input={:?} output={:?} threshold={:.2}",
            args.input_file, args.output, args.cpc_threshold
        );

        ReportConfig {
            input_path: args.input_file.clone(),
            source_columns: SourceColumns::default(),
            report: ReportOptions { output_dir: args.output.clone(), cpc_threshold: args.cpc_threshold },
            verbose: args.verbose,
            json: args.json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_source_columns_match_meta_export() {
        let columns = SourceColumns::default();
        let labels: Vec<&str> = columns.required().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["Campaign Name", "Amount Spent (ZAR)", "Link Clicks", "Impressions"]);
    }

    #[test]
    fn test_required_follows_source_field_order() {
        let columns = SourceColumns::default();
        let fields: Vec<CampaignField> = columns.required().iter().map(|(_, field)| *field).collect();
        assert_eq!(fields, CampaignField::SOURCE.to_vec());
    }

    #[test]
    fn test_derived_fields_have_no_source_label() {
        let columns = SourceColumns::default();
        assert_eq!(columns.label_for(CampaignField::Ctr), None);
        assert_eq!(columns.label_for(CampaignField::LinkClicks), Some("Link Clicks"));
    }

    #[test]
    fn test_config_from_args() {
        let args = CliArgs::try_parse_from(["admetric", "ads.csv", "-o", "reports", "-t", "25.50"]).unwrap();
        let config = ReportConfig::from_args(&args);
        assert_eq!(config.input_path, PathBuf::from("ads.csv"));
        assert_eq!(config.report.output_dir, PathBuf::from("reports"));
        assert_eq!(config.report.cpc_threshold, 25.50);
        assert_eq!(config.source_columns, SourceColumns::default());
        assert!(!config.verbose);
    }
}
