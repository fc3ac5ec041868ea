use crate::report::{DEFAULT_CPC_THRESHOLD, DEFAULT_OUTPUT_DIR};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "admetric")]
#[command(about = "Transform Meta Ads CSV exports into client-ready Excel reports")]
#[command(after_help = "Built for Cape Town digital marketing agencies.")]
#[command(version)]
pub struct CliArgs {
    /// Path to the Meta Ads CSV file exported from Ads Manager
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Output directory for the Excel report (created if missing)
    #[arg(long, short = 'o', value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// CPC threshold for red highlighting in ZAR
    /// Rows with a CPC strictly above this value are highlighted
    #[arg(long, short = 't', value_name = "AMOUNT", default_value_t = DEFAULT_CPC_THRESHOLD)]
    pub cpc_threshold: f64,

    /// Enable verbose (debug) logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print the run summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument values
    pub fn validate(&self) -> Result<(), String> {
        if !self.cpc_threshold.is_finite() {
            return Err(format!("CPC threshold must be a finite amount, got {}", self.cpc_threshold));
        }

        if self.cpc_threshold < 0.0 {
            return Err(format!("CPC threshold cannot be negative, got R{:.2}", self.cpc_threshold));
        }

        Ok(())
    }
}
