//! Rewriting of raw request paths into OpenAPI path templates.
//!
//! `/users/42` becomes `/users/{usersId}` and a `usersId` path parameter is recorded.
//! Templating is idempotent: running it again over the same raw path and parameter list
//! yields the same template and adds nothing new.

use crate::openapi_builder::{has_parameter, Parameter, ParameterLocation};
use crate::schema_generator::{Schema, SchemaType};
use crate::segment::{Classification, SegmentClassifier, SegmentKind};
use log::debug;
use serde_json::Value;

/// Path templater built on top of [`SegmentClassifier`].
pub struct PathTemplater;

impl PathTemplater {
    /// Replace dynamic segments of `raw_path` with `{name}` placeholders.
    ///
    /// A placeholder is named after the preceding literal segment plus `Id`. When there is
    /// no such literal (the dynamic segment comes first, or follows another dynamic
    /// segment) the name is `param<index>`, where `index` is the position of the segment
    /// in the `/`-split path.
    ///
    /// Newly discovered parameters are appended to `existing_parameters`. A parameter
    /// with the same name already in the list is left untouched, so the first observed
    /// value stays the default.
    ///
    /// # Example
    ///
    /// ```
    /// use har_to_openapi::templater::PathTemplater;
    ///
    /// let mut parameters = Vec::new();
    /// let template = PathTemplater::template_path("/users/42/posts", &mut parameters);
    /// assert_eq!(template, "/users/{usersId}/posts");
    /// assert_eq!(parameters[0].name, "usersId");
    /// ```
    pub fn template_path(raw_path: &str, existing_parameters: &mut Vec<Parameter>) -> String {
        let segments: Vec<&str> = raw_path.split('/').collect();
        let classifications: Vec<Classification> = segments
            .iter()
            .map(|segment| SegmentClassifier::classify(segment))
            .collect();

        let mut templated: Vec<String> = Vec::with_capacity(segments.len());

        for (index, classification) in classifications.iter().enumerate() {
            if !classification.is_dynamic() {
                templated.push(classification.value.clone());
                continue;
            }

            let name = Self::parameter_name(&classifications, index);
            templated.push(format!("{{{}}}", name));

            if has_parameter(existing_parameters, &name, ParameterLocation::Path) {
                continue;
            }

            debug!(
                "Discovered path parameter {} ({:?}) in {}",
                name, classification.kind, raw_path
            );
            existing_parameters.push(Parameter {
                name,
                location: ParameterLocation::Path,
                required: true,
                schema: Self::parameter_schema(classification),
                example: None,
            });
        }

        templated.join("/")
    }

    fn parameter_name(classifications: &[Classification], index: usize) -> String {
        let previous = index
            .checked_sub(1)
            .and_then(|i| classifications.get(i))
            .filter(|prev| !prev.is_dynamic() && !prev.value.is_empty());

        match previous {
            Some(prev) => format!("{}Id", prev.value),
            None => format!("param{}", index),
        }
    }

    fn parameter_schema(classification: &Classification) -> Schema {
        let raw = classification.value.as_str();
        match classification.kind {
            SegmentKind::Integer => {
                let default = raw
                    .parse::<u64>()
                    .map(Value::from)
                    .unwrap_or_else(|_| Value::String(raw.to_string()));
                Schema::of_type(SchemaType::Integer).with_default(default)
            }
            SegmentKind::Float => {
                let default = raw
                    .parse::<f64>()
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::String(raw.to_string()));
                Schema::of_type(SchemaType::Number).with_default(default)
            }
            SegmentKind::Uuid | SegmentKind::None => {
                Schema::string().with_default(Value::String(raw.to_string()))
            }
        }
    }
}
