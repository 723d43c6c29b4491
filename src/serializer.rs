//! Serialization module for converting OpenAPI documents to YAML or JSON format.
//!
//! Both renderings are produced from the same [`OpenApiDocument`] value, and the field
//! order of the document types is kept in the output.

use crate::openapi_builder::OpenApiDocument;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes an OpenAPI document to YAML format.
///
/// The output is formatted as standard YAML, suitable for use with OpenAPI tools
/// and documentation generators. Keys appear in document order.
///
/// # Arguments
///
/// * `doc` - The OpenAPI document to serialize
///
/// # Returns
///
/// Returns the YAML string representation of the document.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Example
///
/// ```
/// use har_to_openapi::openapi_builder::OpenApiBuilder;
/// use har_to_openapi::serializer::serialize_yaml;
///
/// let doc = OpenApiBuilder::new().build();
/// let yaml = serialize_yaml(&doc).unwrap();
/// assert!(yaml.starts_with("openapi:"));
/// ```
pub fn serialize_yaml(doc: &OpenApiDocument) -> Result<String> {
    debug!("Serializing OpenAPI document to YAML");
    serde_yaml::to_string(doc)
        .context("Failed to serialize OpenAPI document to YAML")
}

/// Serializes an OpenAPI document to JSON format with pretty printing.
///
/// The output is formatted with indentation for readability, making it suitable
/// for human review and version control.
///
/// # Arguments
///
/// * `doc` - The OpenAPI document to serialize
///
/// # Returns
///
/// Returns the JSON string representation of the document.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Example
///
/// ```
/// use har_to_openapi::openapi_builder::OpenApiBuilder;
/// use har_to_openapi::serializer::serialize_json;
///
/// let doc = OpenApiBuilder::new().build();
/// let json = serialize_json(&doc).unwrap();
/// assert!(json.contains("\"openapi\": \"3.0.0\""));
/// ```
pub fn serialize_json(doc: &OpenApiDocument) -> Result<String> {
    debug!("Serializing OpenAPI document to JSON");
    serde_json::to_string_pretty(doc)
        .context("Failed to serialize OpenAPI document to JSON")
}

/// Writes string content to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
/// Missing parent directories are created.
///
/// # Arguments
///
/// * `content` - The string content to write
/// * `path` - The file path to write to
///
/// # Returns
///
/// Returns `Ok(())` on success.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());
    
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    
    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;
    
    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi_builder::{
        DocumentMetadata, OpenApiBuilder, OpenApiDocument, Operation, PathItem, Paths, Server,
    };
    use tempfile::TempDir;

    /// Helper function to create a minimal OpenAPI document for testing
    fn create_test_document() -> OpenApiDocument {
        OpenApiBuilder::new()
            .with_metadata(DocumentMetadata {
                title: "Test API".to_string(),
                version: "1.0.0".to_string(),
                description: Some("A test API".to_string()),
                ..DocumentMetadata::default()
            })
            .build()
    }

    /// Helper function to create a document with one path and one server
    fn create_populated_document() -> OpenApiDocument {
        let mut item = PathItem::new();
        let summary = Some("https://api.example.com/users".to_string());
        item.insert("get".to_string(), Operation::new(summary));
        let mut paths = Paths::new();
        paths.insert("/users".to_string(), item);

        OpenApiBuilder::new()
            .with_servers(vec![Server {
                url: "https://api.example.com".to_string(),
            }])
            .with_paths(paths)
            .build()
    }

    #[test]
    fn test_serialize_yaml() {
        let doc = create_test_document();
        let result = serialize_yaml(&doc);
        
        assert!(result.is_ok());
        let yaml = result.unwrap();
        
        // Check that YAML contains expected fields
        assert!(yaml.contains("openapi:"));
        assert!(yaml.contains("3.0.0"));
        assert!(yaml.contains("info:"));
        assert!(yaml.contains("title:"));
        assert!(yaml.contains("Test API"));
        assert!(yaml.contains("version:"));
        assert!(yaml.contains("description:"));
        assert!(yaml.contains("A test API"));
        assert!(yaml.contains("servers:"));
        assert!(yaml.contains("paths:"));
    }

    #[test]
    fn test_serialize_yaml_key_order() {
        let yaml = serialize_yaml(&create_populated_document()).unwrap();

        let position = |key: &str| yaml.find(key).unwrap();
        assert!(position("openapi:") < position("info:"));
        assert!(position("info:") < position("servers:"));
        assert!(position("servers:") < position("paths:"));
        assert!(yaml.contains("/users:"));
        assert!(yaml.contains("get:"));
    }

    #[test]
    fn test_serialize_json() {
        let doc = create_test_document();
        let json = serialize_json(&doc).unwrap();
        
        // Verify it's valid JSON by parsing it back
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["openapi"], "3.0.0");
        assert_eq!(parsed["info"]["title"], "Test API");
        assert!(parsed["paths"].is_object());
    }

    #[test]
    fn test_serialize_json_pretty_format() {
        let doc = create_test_document();
        let json = serialize_json(&doc).unwrap();
        
        // Check that JSON is pretty-printed (contains newlines and indentation)
        assert!(json.contains('\n'));
        assert!(json.contains("  "));
        
        let line_count = json.lines().count();
        assert!(line_count > 5, "Pretty printed JSON should have multiple lines");
    }

    #[test]
    fn test_write_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.yaml");
        let content = "test content";
        
        let result = write_to_file(content, &file_path);
        
        assert!(result.is_ok());
        assert!(file_path.exists());
        
        let read_content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(read_content, content);
    }

    #[test]
    fn test_write_to_file_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("subdir").join("nested").join("test.yaml");
        
        write_to_file("test content", &file_path).unwrap();
        
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "test content");
    }

    #[test]
    fn test_write_to_file_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.yaml");
        
        write_to_file("initial content", &file_path).unwrap();
        write_to_file("new content", &file_path).unwrap();
        
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new content");
    }

    #[test]
    fn test_roundtrip_yaml_serialization() {
        let doc = create_populated_document();
        let yaml = serialize_yaml(&doc).unwrap();
        
        let deserialized: OpenApiDocument = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(deserialized, doc);
    }

    #[test]
    fn test_write_json_file_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("openapi.json");
        
        let doc = create_test_document();
        write_to_file(&serialize_json(&doc).unwrap(), &file_path).unwrap();
        
        let content = fs::read_to_string(&file_path).unwrap();
        let deserialized: OpenApiDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(deserialized.info.title, "Test API");
    }
}
