//! Schema types
//!
//! A small query-layer type model: scalars, lists and named object types,
//! with per-field argument declarations and optional resolver functions.

use crate::types::{JsonObject, JsonValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Scalar types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarType {
    String,
    Int,
    Float,
    Boolean,
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::String => write!(f, "String"),
            ScalarType::Int => write!(f, "Int"),
            ScalarType::Float => write!(f, "Float"),
            ScalarType::Boolean => write!(f, "Boolean"),
        }
    }
}

/// The type of a field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Scalar(ScalarType),
    List(Box<FieldType>),
    Object(Arc<ObjectType>),
}

impl FieldType {
    /// Wrap this type in a list
    #[must_use]
    pub fn list_of(self) -> Self {
        FieldType::List(Box::new(self))
    }

    /// Element type of a list, or `None` for non-lists
    pub fn item_type(&self) -> Option<&FieldType> {
        match self {
            FieldType::List(inner) => Some(inner),
            _ => None,
        }
    }

    /// Object type of this field, looking through lists
    pub fn object_type(&self) -> Option<&Arc<ObjectType>> {
        match self {
            FieldType::Object(object) => Some(object),
            FieldType::List(inner) => inner.object_type(),
            FieldType::Scalar(_) => None,
        }
    }

    /// Whether this is a list type
    pub fn is_list(&self) -> bool {
        matches!(self, FieldType::List(_))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Scalar(scalar) => write!(f, "{scalar}"),
            FieldType::List(inner) => write!(f, "[{inner}]"),
            FieldType::Object(object) => write!(f, "{}", object.name),
        }
    }
}

/// A named object type
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectType {
    /// Type name
    pub name: String,
    /// Fields by name
    pub fields: BTreeMap<String, FieldDescriptor>,
}

impl ObjectType {
    /// Create an object type
    pub fn new(name: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Get a field
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    /// Field names in order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }
}

/// Fields inferred for one nesting level
pub type FieldMap = BTreeMap<String, FieldDescriptor>;

/// A query-time argument declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentDef {
    /// Argument name
    pub name: String,
    /// Argument type
    #[serde(rename = "type")]
    pub arg_type: ScalarType,
    /// Description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ArgumentDef {
    /// Create an argument
    pub fn new(name: impl Into<String>, arg_type: ScalarType) -> Self {
        Self {
            name: name.into(),
            arg_type,
            description: None,
        }
    }

    /// Set description
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Argument values passed to a resolver
pub type ResolveArgs = JsonObject;

/// Per-resolution context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveContext {
    /// Record key being resolved
    pub field_name: String,
    /// Consuming page, used for dependency recording
    pub path: Option<String>,
    /// Reference instant for relative dates
    pub now: DateTime<Utc>,
}

impl Default for ResolveContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolveContext {
    /// Create a context at the current instant with no consuming page
    pub fn new() -> Self {
        Self {
            field_name: String::new(),
            path: None,
            now: Utc::now(),
        }
    }

    /// Set the consuming page
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Pin the reference instant
    #[must_use]
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Same context, resolving a different record key
    #[must_use]
    pub fn for_field(&self, field_name: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            ..self.clone()
        }
    }
}

/// Computes a field's runtime value from its parent record
pub type Resolver =
    Arc<dyn Fn(&JsonObject, &ResolveArgs, &ResolveContext) -> Option<JsonValue> + Send + Sync>;

/// An inferred field
#[derive(Clone)]
pub struct FieldDescriptor {
    /// Resolved type
    pub field_type: FieldType,
    /// Query-time arguments
    pub args: Vec<ArgumentDef>,
    /// Custom resolver; without one the raw record value is returned
    pub resolver: Option<Resolver>,
    /// Record key to read when it differs from the exposed field name
    pub source: Option<String>,
}

impl FieldDescriptor {
    /// Create a descriptor of the given type
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            args: Vec::new(),
            resolver: None,
            source: None,
        }
    }

    /// Create a scalar descriptor
    pub fn scalar(scalar: ScalarType) -> Self {
        Self::new(FieldType::Scalar(scalar))
    }

    /// Create an object descriptor
    pub fn object(object: Arc<ObjectType>) -> Self {
        Self::new(FieldType::Object(object))
    }

    /// Set arguments
    #[must_use]
    pub fn with_args(mut self, args: Vec<ArgumentDef>) -> Self {
        self.args = args;
        self
    }

    /// Set resolver
    #[must_use]
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Set the record key this field reads
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get an argument declaration
    pub fn arg(&self, name: &str) -> Option<&ArgumentDef> {
        self.args.iter().find(|a| a.name == name)
    }

    /// Resolve this field on a record
    pub fn resolve(
        &self,
        record: &JsonObject,
        field_name: &str,
        args: &ResolveArgs,
        ctx: &ResolveContext,
    ) -> Option<JsonValue> {
        let key = self.source.as_deref().unwrap_or(field_name);
        match &self.resolver {
            Some(resolver) => resolver(record, args, &ctx.for_field(key)),
            None => record.get(key).filter(|v| !v.is_null()).cloned(),
        }
    }
}

impl PartialEq for FieldDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.field_type == other.field_type
            && self.args == other.args
            && self.resolver.is_some() == other.resolver.is_some()
            && self.source == other.source
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("field_type", &self.field_type)
            .field("args", &self.args)
            .field("resolver", &self.resolver.as_ref().map(|_| "<fn>"))
            .field("source", &self.source)
            .finish()
    }
}

/// A named type already built in the current schema pass
#[derive(Debug, Clone)]
pub struct KnownType {
    /// Type name (the record type it was built for)
    pub name: String,
    /// Object type for records of this type
    pub object_type: Option<Arc<ObjectType>>,
    /// Ready-made descriptor for fields referencing files
    pub file_field: Option<FieldDescriptor>,
}

impl KnownType {
    /// A known type backed by an object type
    pub fn new(object_type: Arc<ObjectType>) -> Self {
        Self {
            name: object_type.name.clone(),
            object_type: Some(object_type),
            file_field: None,
        }
    }

    /// Attach the file reference descriptor
    #[must_use]
    pub fn with_file_field(mut self, field: FieldDescriptor) -> Self {
        self.file_field = Some(field);
        self
    }
}
