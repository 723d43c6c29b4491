use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// JSON type names used by inferred schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

/// Minimal OpenAPI schema inferred from example payloads.
///
/// Only structural information is kept: no `required`, `enum`, `format` or unions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// The type of the schema (string, integer, object, array, etc.)
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Items schema for array types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Properties for object types, in discovery order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,
    /// Observed value, used for path parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl Schema {
    /// Create a schema of the given type with no children
    pub fn of_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            items: None,
            properties: None,
            default: None,
        }
    }

    /// Plain `{type: string}` schema
    pub fn string() -> Self {
        Self::of_type(SchemaType::String)
    }

    /// Attach a default value
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Schema generator - derives schemas from JSON example values
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Infer a schema for any JSON value.
    ///
    /// Total over every JSON shape:
    /// - integral numbers become `integer`, other numbers `number`
    /// - `null` becomes `string`, since bare null schemas are rejected by most OpenAPI tooling
    /// - arrays are described by their first element only (`string` items when empty), so
    ///   heterogeneous arrays lose precision
    /// - objects keep their keys in document order
    pub fn infer(value: &Value) -> Schema {
        match value {
            Value::Null => Schema::string(),
            Value::Bool(_) => Schema::of_type(SchemaType::Boolean),
            Value::Number(number) => Self::number_schema(number),
            Value::String(_) => Schema::string(),
            Value::Array(items) => Self::array_schema(items),
            Value::Object(map) => Self::object_schema(map),
        }
    }

    fn number_schema(number: &Number) -> Schema {
        let is_integral = number.is_i64()
            || number.is_u64()
            || number
                .as_f64()
                .map(|f| f.is_finite() && f.fract() == 0.0)
                .unwrap_or(false);

        if is_integral {
            Schema::of_type(SchemaType::Integer)
        } else {
            Schema::of_type(SchemaType::Number)
        }
    }

    fn array_schema(items: &[Value]) -> Schema {
        let item_schema = match items.first() {
            Some(first) => Self::infer(first),
            None => Schema::string(),
        };

        if items.len() > 1 {
            debug!("Inferring array items from the first of {} elements", items.len());
        }

        Schema {
            items: Some(Box::new(item_schema)),
            ..Schema::of_type(SchemaType::Array)
        }
    }

    fn object_schema(map: &Map<String, Value>) -> Schema {
        let properties: IndexMap<String, Schema> = map
            .iter()
            .map(|(key, value)| (key.clone(), Self::infer(value)))
            .collect();

        Schema {
            properties: Some(properties),
            ..Schema::of_type(SchemaType::Object)
        }
    }
}
