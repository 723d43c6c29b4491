//! HAR to OpenAPI - Command-line tool for generating OpenAPI documentation.
//!
//! This binary converts HTTP Archive (HAR) captures recorded by a browser into an
//! OpenAPI 3.0 document. Recorded URLs are templated into parameterized paths, and
//! request/response schemas are inferred from the observed JSON payloads.
//!
//! # Usage
//!
//! ```bash
//! har-to-openapi [OPTIONS] <CAPTURE>...
//! ```
//!
//! # Examples
//!
//! Generate YAML documentation:
//! ```bash
//! har-to-openapi session.har -o openapi.yaml
//! ```
//!
//! Merge every capture of a directory into one JSON document:
//! ```bash
//! har-to-openapi ./recordings -f json -o openapi.json
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! har-to-openapi session.har -v
//! ```

use anyhow::Result;
use clap::Parser;
use har_to_openapi::cli;
use log::info;

fn main() -> Result<()> {
    // Parse before logger init so the verbose flag can pick the level
    let args_for_verbose = cli::CliArgs::parse();

    // Initialize logger based on verbose flag
    let log_level = if args_for_verbose.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("HAR to OpenAPI starting...");

    // Validate paths once logging is available
    let args = cli::parse_args_from_parsed(args_for_verbose)?;

    // Run the main workflow
    cli::run(args)?;

    info!("OpenAPI document generation completed successfully");

    Ok(())
}
