//! HAR to OpenAPI - OpenAPI documentation inferred from recorded HTTP traffic.
//!
//! This library turns browser network captures (HTTP Archive / HAR files) into an
//! OpenAPI 3.0 document. Concrete request URLs are generalized into path templates,
//! JSON payloads are turned into schemas, and operations are grouped with tags.
//!
//! # Architecture
//!
//! The conversion is a pipeline of small stages:
//!
//! 1. [`scanner`] - Locates `.har` files when a directory is given
//! 2. [`capture`] - HAR data model and loading
//! 3. [`segment`] - Classifies path segments as identifiers or literals
//! 4. [`templater`] - Rewrites raw paths into templates with path parameters
//! 5. [`schema_generator`] - Infers schemas from example JSON values
//! 6. [`entry_processor`] - Folds each entry into the accumulated servers and paths
//! 7. [`tagger`] - Tags operations after the most common path segment
//! 8. [`report`] - Endpoint, method and status code counts
//! 9. [`openapi_builder`] - OpenAPI object model and document assembly
//! 10. [`converter`] - Runs the stages above in order
//! 11. [`serializer`] - Serializes the document to YAML or JSON
//!
//! Entries that cannot be processed are reported through [`diagnostics`] and never
//! abort a conversion.
//!
//! # Example Usage
//!
//! ```no_run
//! use har_to_openapi::{
//!     capture::CaptureLoader,
//!     converter::HarConverter,
//!     diagnostics::LogSink,
//!     scanner::FileScanner,
//! };
//! use std::path::PathBuf;
//!
//! // Find capture files
//! let scanner = FileScanner::new(PathBuf::from("./recordings"));
//! let scan_result = scanner.scan().unwrap();
//!
//! // Load them; a broken capture fails the whole load
//! let captures = CaptureLoader::load_files(&scan_result.capture_files).unwrap();
//!
//! // Convert all captures into one document
//! let mut sink = LogSink::new();
//! let conversion = HarConverter::new().convert(&captures, &mut sink).unwrap();
//!
//! println!("{}", conversion.yaml);
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI application.

pub mod cli;
pub mod scanner;
pub mod capture;
pub mod segment;
pub mod templater;
pub mod schema_generator;
pub mod entry_processor;
pub mod tagger;
pub mod report;
pub mod openapi_builder;
pub mod converter;
pub mod diagnostics;
pub mod serializer;
pub mod error;
