use crate::openapi_builder::DocumentMetadata;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// HAR to OpenAPI - Generate OpenAPI documentation from recorded browser traffic
#[derive(Parser, Debug)]
#[command(name = "har-to-openapi")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// HAR files or directories containing them
    #[arg(value_name = "CAPTURE", required = true)]
    pub capture_paths: Vec<PathBuf>,

    /// Output format (yaml or json)
    #[arg(short = 'f', long = "format", value_enum, default_value = "yaml")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// YAML or JSON file with document metadata (title, version, contact, license, externalDocs)
    #[arg(short = 'm', long = "metadata", value_name = "FILE")]
    pub metadata_path: Option<PathBuf>,

    /// Document title
    #[arg(long = "title")]
    pub title: Option<String>,

    /// Document version
    #[arg(long = "api-version")]
    pub api_version: Option<String>,

    /// Document description
    #[arg(long = "description")]
    pub description: Option<String>,

    /// Response/request content type treated as JSON (exact match, repeatable)
    #[arg(long = "json-mime-type", value_name = "TYPE")]
    pub json_mime_types: Vec<String>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// YAML format
    Yaml,
    /// JSON format
    Json,
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    for path in &args.capture_paths {
        if !path.exists() {
            anyhow::bail!("Capture path does not exist: {}", path.display());
        }
    }

    if let Some(ref metadata) = args.metadata_path {
        if !metadata.is_file() {
            anyhow::bail!("Metadata file does not exist: {}", metadata.display());
        }
    }

    info!("Captures: {:?}", args.capture_paths);
    info!("Output format: {:?}", args.output_format);
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }

    Ok(args)
}

/// Load the metadata file, if any, and apply command-line overrides
pub fn resolve_metadata(args: &CliArgs) -> Result<DocumentMetadata> {
    let mut metadata = match &args.metadata_path {
        Some(path) => load_metadata(path)?,
        None => DocumentMetadata::default(),
    };

    if let Some(title) = &args.title {
        metadata.title = title.clone();
    }
    if let Some(version) = &args.api_version {
        metadata.version = version.clone();
    }
    if let Some(description) = &args.description {
        metadata.description = Some(description.clone());
    }

    Ok(metadata)
}

fn load_metadata(path: &Path) -> Result<DocumentMetadata> {
    debug!("Loading metadata from {}", path.display());
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read metadata file: {}", path.display()))?;
    // YAML is a superset of JSON, so both formats go through serde_yaml
    DocumentMetadata::from_yaml_str(&content)
        .with_context(|| format!("Failed to parse metadata file: {}", path.display()))
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::capture::CaptureLoader;
    use crate::converter::HarConverter;
    use crate::diagnostics::LogSink;
    use crate::entry_processor::ProcessorOptions;
    use crate::scanner::FileScanner;
    use crate::serializer::{serialize_json, write_to_file};

    info!("Starting OpenAPI document generation...");

    // Step 1: Resolve capture files
    info!("Locating capture files...");
    let mut capture_files: Vec<PathBuf> = Vec::new();
    for path in &args.capture_paths {
        let scan_result = FileScanner::new(path.clone()).scan()?;
        for warning in &scan_result.warnings {
            log::warn!("{}", warning);
        }
        capture_files.extend(scan_result.capture_files);
    }

    info!("Found {} capture files", capture_files.len());
    if capture_files.is_empty() {
        anyhow::bail!("No HAR files found in the given paths");
    }

    // Step 2: Load every capture; any failure aborts the run
    info!("Loading captures...");
    let captures = CaptureLoader::load_files(&capture_files)?;
    let entry_count: usize = captures.iter().map(|c| c.len()).sum();
    info!("Loaded {} entries", entry_count);

    // Step 3: Configure the converter
    let metadata = resolve_metadata(&args)?;
    let mut options = ProcessorOptions::default();
    if !args.json_mime_types.is_empty() {
        options.json_mime_types = args.json_mime_types.clone();
    }
    debug!("Processor options: {:?}", options);

    let converter = HarConverter::new()
        .with_metadata(metadata)
        .with_options(options);

    // Step 4: Convert
    info!("Building OpenAPI document...");
    let mut sink = LogSink::new();
    let conversion = converter.convert(&captures, &mut sink)?;
    info!("OpenAPI document built successfully");

    // Step 5: Pick the requested rendering
    info!("Serializing to {:?} format...", args.output_format);
    let content = match args.output_format {
        OutputFormat::Yaml => conversion.yaml.clone(),
        OutputFormat::Json => serialize_json(&conversion.document)?,
    };

    // Step 6: Output to file or stdout
    if let Some(output_path) = &args.output_path {
        info!("Writing output to: {}", output_path.display());
        write_to_file(&content, output_path)?;
        info!("Successfully wrote OpenAPI document to {}", output_path.display());
    } else {
        println!("{}", content);
    }

    // Step 7: Display summary
    let report = serde_json::to_string_pretty(&conversion.report)
        .context("Failed to serialize report")?;
    info!("API Report: {}", report);
    info!("Generation complete!");
    info!("Summary:");
    info!("  - Capture files: {}", capture_files.len());
    info!("  - Entries: {}", conversion.report.entries.seen);
    info!("  - Endpoints: {}", conversion.report.total_endpoints);
    info!("  - Diagnostics: {}", sink.recorded());

    Ok(())
}
