//! The conversion pipeline.
//!
//! Captures are folded entry by entry into an [`ApiAccumulator`], then the finished path
//! map goes through tagging, reporting and assembly. YAML is rendered from the same
//! document value that is returned, so the two can never disagree.

use crate::capture::Capture;
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::entry_processor::{ApiAccumulator, EntryOutcome, EntryProcessor, ProcessorOptions};
use crate::openapi_builder::{DocumentMetadata, OpenApiBuilder, OpenApiDocument};
use crate::report::{EntryStats, Report};
use crate::serializer::serialize_yaml;
use crate::tagger::TagAssigner;
use anyhow::Result;
use log::debug;

/// Output of a conversion run.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub document: OpenApiDocument,
    pub yaml: String,
    pub report: Report,
}

/// Converts HAR captures into an OpenAPI document.
///
/// # Example
///
/// ```
/// use har_to_openapi::capture::Capture;
/// use har_to_openapi::converter::HarConverter;
/// use har_to_openapi::diagnostics::Diagnostic;
///
/// let capture = Capture::from_json_str(r#"{"log": {"entries": [{
///     "request": {"method": "GET", "url": "https://api.example.com/users/1"},
///     "response": {"status": 200, "content": {"mimeType": "application/json", "text": "{\"id\":1}"}}
/// }]}}"#).unwrap();
///
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// let conversion = HarConverter::new().convert(&[capture], &mut diagnostics).unwrap();
/// assert!(conversion.document.paths.contains_key("/users/{usersId}"));
/// assert!(conversion.yaml.contains("/users/{usersId}"));
/// ```
pub struct HarConverter {
    metadata: DocumentMetadata,
    processor: EntryProcessor,
}

impl HarConverter {
    pub fn new() -> Self {
        Self {
            metadata: DocumentMetadata::default(),
            processor: EntryProcessor::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_options(mut self, options: ProcessorOptions) -> Self {
        self.processor = EntryProcessor::new(options);
        self
    }

    /// Fold every entry of every capture, in order, into one accumulator.
    ///
    /// Entry-level failures are recorded in `sink` and counted in the returned stats.
    pub fn fold(
        &self,
        captures: &[Capture],
        sink: &mut dyn DiagnosticSink,
    ) -> (ApiAccumulator, EntryStats) {
        let mut acc = ApiAccumulator::new();
        let mut stats = EntryStats::default();

        for (capture_index, capture) in captures.iter().enumerate() {
            debug!(
                "Processing capture {} with {} entries",
                capture_index,
                capture.len()
            );

            for (entry_index, entry) in capture.log.entries.iter().enumerate() {
                stats.seen += 1;

                match self.processor.process(&mut acc, entry) {
                    Ok(processed) => {
                        match processed.outcome {
                            EntryOutcome::Documented { .. } => stats.documented += 1,
                            EntryOutcome::ServerOnly => stats.non_json += 1,
                        }
                        for field_error in processed.field_errors {
                            stats.skipped_fields += 1;
                            sink.record(Diagnostic {
                                capture_index,
                                entry_index,
                                kind: field_error.kind,
                                message: field_error.message,
                            });
                        }
                    }
                    Err(e) => {
                        stats.skipped += 1;
                        sink.record(Diagnostic {
                            capture_index,
                            entry_index,
                            kind: DiagnosticKind::EntrySkipped,
                            message: e.to_string(),
                        });
                    }
                }
            }
        }

        (acc, stats)
    }

    /// Run the full pipeline over all captures.
    ///
    /// Tags and the most common segment are computed over the union of all captures.
    ///
    /// # Errors
    ///
    /// Returns an error only if the document cannot be rendered as YAML.
    pub fn convert(
        &self,
        captures: &[Capture],
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Conversion> {
        let (acc, stats) = self.fold(captures, sink);
        let ApiAccumulator { servers, paths } = acc;

        let paths = TagAssigner::assign(paths);
        let report = Report::generate(&paths).with_entry_stats(stats);

        let document = OpenApiBuilder::new()
            .with_metadata(self.metadata.clone())
            .with_servers(servers)
            .with_paths(paths)
            .build();
        let yaml = serialize_yaml(&document)?;

        Ok(Conversion {
            document,
            yaml,
            report,
        })
    }

    /// Convenience wrapper for a single capture
    pub fn convert_capture(
        &self,
        capture: &Capture,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Conversion> {
        self.convert(std::slice::from_ref(capture), sink)
    }
}

impl Default for HarConverter {
    fn default() -> Self {
        Self::new()
    }
}
