//! Whole-schema construction
//!
//! Runs the inferrer once per record type and assembles the results into a
//! [`Schema`]. Types are built in the order their first record appears,
//! except that `File` always comes first so path-valued fields elsewhere can
//! reference it.

use super::inference::SchemaInferrer;
use super::links;
use super::naming::TypeNames;
use super::printer;
use super::types::{
    FieldDescriptor, FieldMap, FieldType, KnownType, ObjectType, ResolveArgs, ResolveContext,
    ScalarType,
};
use crate::collaborators::{DependencyRecorder, MediaTypeGuesser, PathClassifier};
use crate::config::InferenceConfig;
use crate::error::{Error, Result};
use crate::types::{id_to_string, JsonObject, JsonValue, NodeExt, FILE_TYPE_NAME};
use std::sync::Arc;
use tracing::{debug, info};

// ============================================================================
// Schema
// ============================================================================

/// The inferred schema for a record set
#[derive(Debug, Clone)]
pub struct Schema {
    types: Vec<KnownType>,
    records: Arc<Vec<JsonObject>>,
}

impl Schema {
    /// Node types in build order
    pub fn types(&self) -> &[KnownType] {
        &self.types
    }

    /// Names of the node types in build order
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.name.as_str()).collect()
    }

    /// Look up a node type
    pub fn get(&self, name: &str) -> Option<&KnownType> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Object type of a node type
    pub fn object_type(&self, name: &str) -> Option<&Arc<ObjectType>> {
        self.get(name).and_then(|t| t.object_type.as_ref())
    }

    /// The records the schema was built from
    pub fn records(&self) -> &[JsonObject] {
        &self.records
    }

    /// Find a record by type and id
    ///
    /// Ids are compared in their rendered form, so `"7"` finds a record with
    /// numeric id `7`.
    pub fn find_record(&self, type_name: &str, id: &str) -> Result<&JsonObject> {
        self.records
            .iter()
            .find(|r| {
                r.node_type() == Some(type_name)
                    && r.node_id().map(id_to_string).as_deref() == Some(id)
            })
            .ok_or_else(|| Error::RecordNotFound {
                type_name: type_name.to_string(),
                id: id.to_string(),
            })
    }

    /// Resolve one field of a record of the given type
    pub fn resolve(
        &self,
        type_name: &str,
        record: &JsonObject,
        field: &str,
        args: &ResolveArgs,
        ctx: &ResolveContext,
    ) -> Result<Option<JsonValue>> {
        let object = self
            .object_type(type_name)
            .ok_or_else(|| Error::type_not_found(type_name))?;
        let descriptor = object
            .field(field)
            .ok_or_else(|| Error::field_not_found(type_name, field))?;
        Ok(descriptor.resolve(record, field, args, ctx))
    }

    /// Render the schema as SDL
    pub fn to_sdl(&self) -> String {
        printer::print_schema(self)
    }

    /// Describe the schema as JSON
    pub fn describe(&self) -> JsonValue {
        printer::describe(self)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builds a [`Schema`] from a record set
#[derive(Clone)]
pub struct SchemaBuilder {
    config: InferenceConfig,
    recorder: Option<Arc<dyn DependencyRecorder>>,
    media_types: Option<Arc<dyn MediaTypeGuesser>>,
    paths: Option<Arc<dyn PathClassifier>>,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBuilder {
    /// Builder with default configuration and collaborators
    pub fn new() -> Self {
        Self {
            config: InferenceConfig::default(),
            recorder: None,
            media_types: None,
            paths: None,
        }
    }

    /// Set the inference configuration
    #[must_use]
    pub fn with_config(mut self, config: InferenceConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the dependency recorder
    #[must_use]
    pub fn with_recorder(mut self, recorder: Arc<dyn DependencyRecorder>) -> Self {
        self.recorder = Some(recorder);
        self
    }

    /// Set the media-type guesser
    #[must_use]
    pub fn with_media_type_guesser(mut self, guesser: Arc<dyn MediaTypeGuesser>) -> Self {
        self.media_types = Some(guesser);
        self
    }

    /// Set the path classifier
    #[must_use]
    pub fn with_path_classifier(mut self, classifier: Arc<dyn PathClassifier>) -> Self {
        self.paths = Some(classifier);
        self
    }

    fn inferrer(&self, records: Arc<Vec<JsonObject>>) -> SchemaInferrer {
        let mut inferrer = SchemaInferrer::new(records).with_config(&self.config);
        if let Some(recorder) = &self.recorder {
            inferrer = inferrer.with_recorder(Arc::clone(recorder));
        }
        if let Some(guesser) = &self.media_types {
            inferrer = inferrer.with_media_type_guesser(Arc::clone(guesser));
        }
        if let Some(classifier) = &self.paths {
            inferrer = inferrer.with_path_classifier(Arc::clone(classifier));
        }
        inferrer
    }

    /// Infer a schema for every record type in `records`
    pub fn build(&self, records: Vec<JsonObject>) -> Result<Schema> {
        self.config.validate()?;
        for (index, record) in records.iter().enumerate() {
            match record.node_type() {
                Some(t) if !t.is_empty() => {}
                _ => {
                    return Err(Error::invalid_record(
                        index,
                        "record has no string `type` field",
                    ))
                }
            }
        }

        let records = Arc::new(records);
        let inferrer = self.inferrer(Arc::clone(&records));
        let groups = group_by_type(&records);

        let mut names = TypeNames::new();
        for (type_name, _) in &groups {
            names.reserve(type_name);
        }

        let mut known: Vec<KnownType> = Vec::with_capacity(groups.len());
        for (type_name, group) in groups {
            let mut fields = inferrer.infer_fields_with_names(&group, None, &known, &mut names);
            fields.extend(node_fields());

            debug!(
                type_name = %type_name,
                records = group.len(),
                fields = fields.len(),
                "Built node type"
            );

            let object = Arc::new(ObjectType::new(type_name.clone(), fields));
            let mut entry = KnownType::new(Arc::clone(&object));
            if type_name == FILE_TYPE_NAME {
                entry = entry.with_file_field(links::file_reference_field(object, inferrer.targets()));
            }
            known.push(entry);
        }

        info!(types = known.len(), records = records.len(), "Schema inferred");
        Ok(Schema {
            types: known,
            records,
        })
    }
}

/// Group records by type, first-seen order with `File` moved to the front
fn group_by_type(records: &[JsonObject]) -> Vec<(String, Vec<JsonObject>)> {
    let mut groups: Vec<(String, Vec<JsonObject>)> = Vec::new();
    for record in records {
        let type_name = record.node_type().unwrap_or_default();
        match groups.iter_mut().find(|(name, _)| name == type_name) {
            Some((_, group)) => group.push(record.clone()),
            None => groups.push((type_name.to_string(), vec![record.clone()])),
        }
    }

    if let Some(pos) = groups.iter().position(|(name, _)| name == FILE_TYPE_NAME) {
        let file = groups.remove(pos);
        groups.insert(0, file);
    }
    groups
}

/// Fields every node type carries
fn node_fields() -> FieldMap {
    let string = || FieldDescriptor::scalar(ScalarType::String);
    FieldMap::from([
        ("id".to_string(), string()),
        ("parent".to_string(), string()),
        (
            "children".to_string(),
            FieldDescriptor::new(FieldType::Scalar(ScalarType::String).list_of()),
        ),
    ])
}

/// Build a schema with default configuration
pub fn build_schema(records: Vec<JsonObject>) -> Result<Schema> {
    SchemaBuilder::new().build(records)
}
