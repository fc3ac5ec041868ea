// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod error;
mod metrics;
mod reader;
mod report;
mod runner;
mod types;
mod ui;

use log::error;

fn main() {
    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    init_logging(args.verbose);

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    let config = config::ReportConfig::from_args(&args);
    if config.verbose && !config.json {
        ui::status(&format!("processing {}", config.input_path.display()));
    }

    let generated = match runner::run_pipeline(&config) {
        Ok(generated) => generated,
        Err(e) => {
            error!("Report generation failed ({}): {}", e.kind(), e);
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if config.json {
        if let Err(e) = report::print_summary_json(&generated) {
            ui::print_error(&format!("Failed to serialize summary: {}", e));
            std::process::exit(1);
        }
    } else {
        report::print_run_summary(&generated);
    }
}

/// Default to info, or debug with --verbose; RUST_LOG still wins
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}
