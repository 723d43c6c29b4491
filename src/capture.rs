use crate::error::{Error, Result};
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A recorded HTTP Archive (HAR) capture.
///
/// Only the parts of the HAR format the converter reads are modeled; every other field
/// in the file is ignored.
///
/// # Example
///
/// ```
/// use har_to_openapi::capture::Capture;
///
/// let capture = Capture::from_json_str(r#"{"log": {"entries": []}}"#).unwrap();
/// assert!(capture.log.entries.is_empty());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Capture {
    pub log: CaptureLog,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaptureLog {
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// One request/response exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub request: Request,
    pub response: Response,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub method: String,
    pub url: String,
    #[serde(rename = "queryString", default)]
    pub query_string: Vec<NameValue>,
    #[serde(default)]
    pub headers: Vec<NameValue>,
    #[serde(rename = "postData")]
    pub post_data: Option<PostData>,
}

/// A `name`/`value` pair, used for headers and query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameValue {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostData {
    #[serde(rename = "mimeType", default)]
    pub mime_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    pub status: i64,
    #[serde(default)]
    pub content: Content,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    #[serde(rename = "mimeType", default)]
    pub mime_type: String,
    pub text: Option<String>,
    pub encoding: Option<String>,
}

impl Content {
    /// Body text, when present, non-empty and not base64-encoded
    pub fn textual_body(&self) -> Option<&str> {
        if self.encoding.as_deref() == Some("base64") {
            return None;
        }
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

impl Capture {
    /// Parse a capture from its JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Number of entries in the capture
    pub fn len(&self) -> usize {
        self.log.entries.len()
    }

    /// Whether the capture has no entries
    pub fn is_empty(&self) -> bool {
        self.log.entries.is_empty()
    }
}

/// Loader for capture files on disk.
pub struct CaptureLoader;

impl CaptureLoader {
    /// Loads and parses a single HAR file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is not a valid HAR document
    pub fn load_file(path: &Path) -> Result<Capture> {
        debug!("Loading capture: {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| Error::CaptureLoad {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let capture = Capture::from_json_str(&content).map_err(|e| Error::CaptureLoad {
            file: path.to_path_buf(),
            message: match e {
                Error::SerializationError(message) => message,
                other => other.to_string(),
            },
        })?;

        debug!("Loaded {} entries from {}", capture.len(), path.display());
        Ok(capture)
    }

    /// Loads every file, failing on the first capture that cannot be loaded.
    ///
    /// A partially loaded set is never returned, so the caller cannot end up with a
    /// document that silently misses a capture.
    pub fn load_files(paths: &[PathBuf]) -> Result<Vec<Capture>> {
        debug!("Loading {} captures", paths.len());

        paths
            .iter()
            .map(|path| {
                Self::load_file(path).map_err(|e| {
                    warn!("Failed to load {}: {}", path.display(), e);
                    e
                })
            })
            .collect()
    }
}
