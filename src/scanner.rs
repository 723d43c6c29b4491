use anyhow::{Context, Result};
use log::warn;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Extension of HTTP Archive files
const CAPTURE_EXTENSION: &str = "har";

/// File scanner for locating capture files.
///
/// The `FileScanner` accepts either a single capture file or a directory. Directories are
/// walked recursively for `.har` files, skipping hidden directories (those starting
/// with `.`). Files are returned in file-name order so repeated runs fold entries in the
/// same order.
///
/// # Example
///
/// ```no_run
/// use har_to_openapi::scanner::FileScanner;
/// use std::path::PathBuf;
///
/// let scanner = FileScanner::new(PathBuf::from("./recordings"));
/// let result = scanner.scan().unwrap();
/// println!("Found {} capture files", result.capture_files.len());
/// ```
pub struct FileScanner {
    root_path: PathBuf,
}

/// Result of a scan.
///
/// Contains the list of discovered capture files and any warnings encountered during scanning.
pub struct ScanResult {
    /// Paths to all discovered `.har` files
    pub capture_files: Vec<PathBuf>,
    /// Warning messages for any issues encountered (e.g., inaccessible directories)
    pub warnings: Vec<String>,
}

impl FileScanner {
    /// Creates a new `FileScanner` for the specified file or directory.
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Collects capture files under the root path.
    ///
    /// A root that is a file is returned as-is, whatever its extension, since the user
    /// named it explicitly. Unreadable directory entries are recorded as warnings and
    /// scanning continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the root path does not exist.
    pub fn scan(&self) -> Result<ScanResult> {
        let metadata = std::fs::metadata(&self.root_path)
            .with_context(|| format!("Capture path does not exist: {}", self.root_path.display()))?;

        if metadata.is_file() {
            return Ok(ScanResult {
                capture_files: vec![self.root_path.clone()],
                warnings: Vec::new(),
            });
        }

        let mut capture_files = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                // Don't filter the root directory itself
                if e.path() == self.root_path {
                    return true;
                }
                !e.file_name().to_string_lossy().starts_with('.')
            })
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    let is_capture = path
                        .extension()
                        .and_then(|s| s.to_str())
                        .map_or(false, |ext| ext.eq_ignore_ascii_case(CAPTURE_EXTENSION));

                    if path.is_file() && is_capture {
                        capture_files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    // Record warning for inaccessible directories/files
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        Ok(ScanResult {
            capture_files,
            warnings,
        })
    }
}
