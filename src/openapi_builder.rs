use crate::schema_generator::Schema;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Operations of a single path, keyed by lower-cased HTTP method.
pub type PathItem = IndexMap<String, Operation>;

/// Path templates in discovery order.
pub type Paths = IndexMap<String, PathItem>;

/// OpenAPI document builder
pub struct OpenApiBuilder {
    /// Static document metadata
    metadata: DocumentMetadata,
    /// Paths collection (path template -> PathItem)
    paths: Paths,
    /// Observed server origins
    servers: Vec<Server>,
}

/// OpenAPI Info object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// API title
    pub title: String,
    /// API version
    pub version: String,
    /// API description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Contact information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    /// License information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

/// OpenAPI Contact object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Specification extensions such as `x-twitter`
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

/// OpenAPI License object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// OpenAPI External Documentation object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalDocs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
}

/// OpenAPI Server object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Origin of the server (`scheme://host[:port]`)
    pub url: String,
}

/// Static metadata wrapped around the discovered paths.
///
/// Every field is optional when deserialized, so a metadata file only needs to name the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMetadata {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
    pub contact: Option<Contact>,
    pub license: Option<License>,
    #[serde(rename = "externalDocs", alias = "external_docs")]
    pub external_docs: Option<ExternalDocs>,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            title: "Generated API".to_string(),
            version: "1.0.0".to_string(),
            description: Some(
                "API documentation generated from HTTP Archive captures".to_string(),
            ),
            contact: None,
            license: None,
            external_docs: None,
        }
    }
}

impl DocumentMetadata {
    /// Parse metadata from YAML or JSON text
    pub fn from_yaml_str(content: &str) -> crate::error::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// OpenAPI Operation object - represents a single API operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation summary (URL of the first observed request)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Grouping tags, assigned after all entries are processed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Parameters (path, query, header) in discovery order
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Request body
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Responses keyed by status code
    pub responses: IndexMap<String, Response>,
}

impl Operation {
    /// Create an empty operation
    pub fn new(summary: Option<String>) -> Self {
        Self {
            summary,
            tags: Vec::new(),
            parameters: Vec::new(),
            request_body: None,
            responses: IndexMap::new(),
        }
    }

    /// Whether a parameter with this name and location already exists
    pub fn has_parameter(&self, name: &str, location: ParameterLocation) -> bool {
        has_parameter(&self.parameters, name, location)
    }

    /// Append a parameter unless one with the same name and location exists.
    ///
    /// Returns `true` when the parameter was inserted.
    pub fn add_parameter(&mut self, parameter: Parameter) -> bool {
        if self.has_parameter(&parameter.name, parameter.location) {
            return false;
        }
        self.parameters.push(parameter);
        true
    }

    /// Fold another operation for the same path and method into this one.
    ///
    /// Values already present here win: parameters are deduplicated, and the
    /// summary, request body and responses of `self` are kept.
    pub fn absorb(&mut self, other: Operation) {
        for parameter in other.parameters {
            self.add_parameter(parameter);
        }
        if self.summary.is_none() {
            self.summary = other.summary;
        }
        if self.request_body.is_none() {
            self.request_body = other.request_body;
        }
        for (status, response) in other.responses {
            self.responses.entry(status).or_insert(response);
        }
    }
}

/// Whether `parameters` contains one with the given name and location.
///
/// Header names are compared case-insensitively.
pub fn has_parameter(parameters: &[Parameter], name: &str, location: ParameterLocation) -> bool {
    parameters.iter().any(|p| {
        p.location == location
            && match location {
                ParameterLocation::Header => p.name.eq_ignore_ascii_case(name),
                _ => p.name == name,
            }
    })
}

/// Where a parameter appears in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
}

/// OpenAPI Parameter object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Parameter location (path, query, header)
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Whether the parameter is required
    pub required: bool,
    /// Parameter schema
    pub schema: Schema,
    /// Observed value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

impl Parameter {
    /// Required string parameter carrying an observed value as its example
    pub fn observed(name: &str, location: ParameterLocation, value: &str) -> Self {
        Self {
            name: name.to_string(),
            location,
            required: true,
            schema: Schema::string(),
            example: Some(Value::String(value.to_string())),
        }
    }
}

/// OpenAPI RequestBody object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Content types and their schemas
    pub content: IndexMap<String, MediaType>,
}

/// OpenAPI MediaType object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// Schema for this media type
    pub schema: Schema,
    /// Observed payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

/// OpenAPI Response object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Response description
    pub description: String,
    /// Response content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
}

/// Complete OpenAPI document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version
    pub openapi: String,
    /// API info
    pub info: Info,
    /// External documentation
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,
    /// Observed servers
    pub servers: Vec<Server>,
    /// API paths
    pub paths: Paths,
}

impl OpenApiBuilder {
    /// Create a new OpenApiBuilder with default metadata
    pub fn new() -> Self {
        debug!("Initializing OpenApiBuilder");
        Self {
            metadata: DocumentMetadata::default(),
            paths: IndexMap::new(),
            servers: Vec::new(),
        }
    }

    /// Set custom metadata for the API
    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the discovered paths
    pub fn with_paths(mut self, paths: Paths) -> Self {
        self.paths = paths;
        self
    }

    /// Set the observed servers
    pub fn with_servers(mut self, servers: Vec<Server>) -> Self {
        self.servers = servers;
        self
    }

    /// Build the final OpenAPI document
    pub fn build(self) -> OpenApiDocument {
        debug!(
            "Building final OpenAPI document with {} paths and {} servers",
            self.paths.len(),
            self.servers.len()
        );

        let DocumentMetadata {
            title,
            version,
            description,
            contact,
            license,
            external_docs,
        } = self.metadata;

        OpenApiDocument {
            openapi: "3.0.0".to_string(),
            info: Info {
                title,
                version,
                description,
                contact,
                license,
            },
            external_docs,
            servers: self.servers,
            paths: self.paths,
        }
    }
}

impl Default for OpenApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}
