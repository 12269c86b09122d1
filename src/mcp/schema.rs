//! Tool Input Schemas
//!
//! The subset of JSON Schema used to describe tool arguments: a flat object
//! of typed properties. The same structure is advertised through
//! `tools/list` and used to validate `tools/call` arguments before any
//! handler runs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

/// Primitive JSON types a property may declare
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl JsonType {
    /// Returns true when `value` is an instance of this type.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            JsonType::String => value.is_string(),
            JsonType::Integer => value.is_i64() || value.is_u64(),
            JsonType::Number => value.is_number(),
            JsonType::Boolean => value.is_boolean(),
            JsonType::Array => value.is_array(),
            JsonType::Object => value.is_object(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonType::String => "string",
            JsonType::Integer => "integer",
            JsonType::Number => "number",
            JsonType::Boolean => "boolean",
            JsonType::Array => "array",
            JsonType::Object => "object",
        }
    }
}

/// Schema of a single property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub kind: JsonType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Value the handler substitutes when the property is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl PropertySchema {
    pub fn new(kind: JsonType) -> Self {
        Self {
            kind,
            description: None,
            default: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_value(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

fn object_type() -> String {
    "object".to_string()
}

fn allow_additional() -> bool {
    true
}

/// Object schema for a tool's `arguments`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InputSchema {
    /// Always `"object"`
    #[serde(rename = "type", default = "object_type")]
    pub kind: String,

    #[serde(default)]
    pub properties: BTreeMap<String, PropertySchema>,

    #[serde(default)]
    pub required: Vec<String>,

    /// Absent in a deserialized schema means `true`, as in JSON Schema;
    /// schemas built in code start closed.
    #[serde(default = "allow_additional")]
    pub additional_properties: bool,
}

impl Default for InputSchema {
    fn default() -> Self {
        Self {
            kind: object_type(),
            properties: BTreeMap::new(),
            required: Vec::new(),
            additional_properties: false,
        }
    }
}

/// Reasons a set of arguments does not satisfy an [`InputSchema`]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaViolation {
    #[error("arguments must be a JSON object")]
    NotAnObject,
    #[error("unexpected property '{0}'")]
    UnexpectedProperty(String),
    #[error("missing required property '{0}'")]
    MissingRequired(String),
    #[error("property '{field}' must be of type {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },
    #[error("{0}")]
    Malformed(String),
}

impl SchemaViolation {
    /// Name of the offending field, if the violation concerns one.
    pub fn field(&self) -> Option<&str> {
        match self {
            SchemaViolation::NotAnObject | SchemaViolation::Malformed(_) => None,
            SchemaViolation::UnexpectedProperty(field)
            | SchemaViolation::MissingRequired(field)
            | SchemaViolation::WrongType { field, .. } => Some(field),
        }
    }
}

impl InputSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an optional property.
    pub fn property(mut self, name: impl Into<String>, schema: PropertySchema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Adds a property and marks it required.
    pub fn required_property(mut self, name: impl Into<String>, schema: PropertySchema) -> Self {
        let name = name.into();
        self.required.push(name.clone());
        self.properties.insert(name, schema);
        self
    }

    /// Checks `args` against this schema.
    ///
    /// Unknown properties are rejected unless `additionalProperties` is set;
    /// the first violation found is reported.
    pub fn validate(&self, args: &Map<String, Value>) -> Result<(), SchemaViolation> {
        for (field, value) in args {
            match self.properties.get(field) {
                Some(property) if !property.kind.matches(value) => {
                    return Err(SchemaViolation::WrongType {
                        field: field.clone(),
                        expected: property.kind.as_str(),
                    });
                }
                Some(_) => {}
                None if !self.additional_properties => {
                    return Err(SchemaViolation::UnexpectedProperty(field.clone()));
                }
                None => {}
            }
        }

        if let Some(missing) = self.required.iter().find(|r| !args.contains_key(*r)) {
            return Err(SchemaViolation::MissingRequired(missing.clone()));
        }

        Ok(())
    }

    /// Normalises raw `arguments` (absent or `null` means empty) and validates them.
    pub fn validate_value(
        &self,
        args: Option<Value>,
    ) -> Result<Map<String, Value>, SchemaViolation> {
        let args = match args {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(map)) => map,
            Some(_) => return Err(SchemaViolation::NotAnObject),
        };
        self.validate(&args)?;
        Ok(args)
    }
}
