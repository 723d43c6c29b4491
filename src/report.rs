use crate::openapi_builder::Paths;
use indexmap::IndexMap;
use serde::Serialize;

/// Summary of a finished conversion. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Number of (path, method) operations
    pub total_endpoints: usize,
    /// Number of distinct path templates
    pub total_paths: usize,
    /// Operation count per HTTP method
    pub methods: IndexMap<String, usize>,
    /// Operation count per response status code
    pub response_codes: IndexMap<String, usize>,
    /// How the input entries were handled
    pub entries: EntryStats,
}

/// Per-entry counters collected while folding captures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryStats {
    /// Entries read from all captures
    pub seen: usize,
    /// Entries folded into an operation
    pub documented: usize,
    /// Entries with a non-JSON response (server registered only)
    pub non_json: usize,
    /// Entries rejected outright
    pub skipped: usize,
    /// Request or response bodies that could not be parsed
    pub skipped_fields: usize,
}

impl Report {
    /// Aggregate counts over a path map.
    pub fn generate(paths: &Paths) -> Self {
        let mut report = Report {
            total_paths: paths.len(),
            ..Report::default()
        };

        for item in paths.values() {
            for (method, operation) in item {
                report.total_endpoints += 1;
                *report.methods.entry(method.clone()).or_insert(0) += 1;

                for code in operation.responses.keys() {
                    *report.response_codes.entry(code.clone()).or_insert(0) += 1;
                }
            }
        }
        report
    }

    /// Attach entry statistics
    pub fn with_entry_stats(mut self, entries: EntryStats) -> Self {
        self.entries = entries;
        self
    }
}
