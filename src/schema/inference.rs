//! Field type inference from example records

use super::date_field::date_field;
use super::extract::ExampleExtractor;
use super::links::{self, LinkTargets};
use super::naming::{field_key, TypeNames};
use super::types::{FieldDescriptor, FieldMap, FieldType, KnownType, ObjectType, ScalarType};
use crate::collaborators::{
    DefaultPathClassifier, DependencyRecorder, ExtensionGuesser, MediaTypeGuesser, NoopRecorder,
    PathClassifier,
};
use crate::config::InferenceConfig;
use crate::dates;
use crate::types::{
    is_reserved_field, join_selector, ExamplePolicy, JsonObject, JsonValue, NodeExt,
    FILE_TYPE_NAME, LINK_SUFFIX,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Schema inferrer with its collaborators
///
/// Holds everything an inference pass reads besides the records being
/// typed: the full record set (the search space for cross-references), the
/// override mapping, the dependency recorder handed to generated resolvers,
/// and the file-path heuristics.
#[derive(Clone)]
pub struct SchemaInferrer {
    targets: LinkTargets,
    mapping: BTreeMap<String, String>,
    extractor: ExampleExtractor,
    media_types: Arc<dyn MediaTypeGuesser>,
    paths: Arc<dyn PathClassifier>,
}

impl SchemaInferrer {
    /// Create an inferrer over the full record set
    pub fn new(all_records: Arc<Vec<JsonObject>>) -> Self {
        Self {
            targets: LinkTargets {
                records: all_records,
                recorder: Arc::new(NoopRecorder),
            },
            mapping: BTreeMap::new(),
            extractor: ExampleExtractor::default(),
            media_types: Arc::new(ExtensionGuesser),
            paths: Arc::new(DefaultPathClassifier),
        }
    }

    /// Apply mapping and example policy from a configuration
    #[must_use]
    pub fn with_config(mut self, config: &InferenceConfig) -> Self {
        self.mapping = config.mapping.clone();
        self.extractor = ExampleExtractor::new(config.example_policy);
        self
    }

    /// Set the override mapping
    #[must_use]
    pub fn with_mapping(mut self, mapping: BTreeMap<String, String>) -> Self {
        self.mapping = mapping;
        self
    }

    /// Set the example policy
    #[must_use]
    pub fn with_example_policy(mut self, policy: ExamplePolicy) -> Self {
        self.extractor = ExampleExtractor::new(policy);
        self
    }

    /// Set the dependency recorder used by generated resolvers
    #[must_use]
    pub fn with_recorder(mut self, recorder: Arc<dyn DependencyRecorder>) -> Self {
        self.targets.recorder = recorder;
        self
    }

    /// Set the media-type guesser
    #[must_use]
    pub fn with_media_type_guesser(mut self, guesser: Arc<dyn MediaTypeGuesser>) -> Self {
        self.media_types = guesser;
        self
    }

    /// Set the path classifier
    #[must_use]
    pub fn with_path_classifier(mut self, classifier: Arc<dyn PathClassifier>) -> Self {
        self.paths = classifier;
        self
    }

    /// The example extractor in use
    pub fn extractor(&self) -> &ExampleExtractor {
        &self.extractor
    }

    pub(crate) fn targets(&self) -> &LinkTargets {
        &self.targets
    }

    /// Infer the fields of `records` at `selector`
    ///
    /// `records` should all share one record type. Untypeable fields are
    /// left out of the result. Nested type names are unique within this call.
    pub fn infer_fields(
        &self,
        records: &[JsonObject],
        selector: Option<&str>,
        known: &[KnownType],
    ) -> FieldMap {
        let mut names = TypeNames::new();
        self.infer_fields_with_names(records, selector, known, &mut names)
    }

    /// [`infer_fields`](Self::infer_fields) sharing a type name registry
    /// with the rest of a schema build
    pub fn infer_fields_with_names(
        &self,
        records: &[JsonObject],
        selector: Option<&str>,
        known: &[KnownType],
        names: &mut TypeNames,
    ) -> FieldMap {
        let Some(first) = records.first() else {
            return FieldMap::new();
        };
        let record_type = first.node_type().unwrap_or_default();
        let selector = selector.filter(|s| !s.is_empty());
        let examples = self.extractor.extract(records, selector);

        let mut candidates = Vec::new();
        for (key, value) in &examples {
            if selector.is_none() && is_reserved_field(key) {
                continue;
            }

            let next_selector = join_selector([selector.unwrap_or_default(), key.as_str()]);
            let mapping_key = join_selector([record_type, next_selector.as_str()]);

            let (name, inferred) = if let Some(type_name) = self.mapping.get(&mapping_key) {
                match links::infer_from_mapping(value, &mapping_key, type_name, known, &self.targets)
                {
                    Some(field) => (key.as_str(), field),
                    None => continue,
                }
            } else if let Some(base) = key.strip_suffix(LINK_SUFFIX).filter(|b| !b.is_empty()) {
                match links::infer_from_link(value, &mapping_key, known, &self.targets) {
                    Some(field) => (base, field.with_source(key.clone())),
                    None => continue,
                }
            } else if let Some(field) = self.infer_file(record_type, value, known) {
                (key.as_str(), field)
            } else {
                match self.classify(value, &next_selector, records, known, names) {
                    Some(field) => (key.as_str(), field),
                    None => {
                        debug!(selector = %next_selector, "Field could not be typed");
                        continue;
                    }
                }
            };

            candidates.push((field_key(name), key, inferred));
        }

        // keys used verbatim keep their name; renamed ones yield on collision
        let (verbatim, renamed): (Vec<_>, Vec<_>) = candidates
            .into_iter()
            .partition(|(exposed, key, _)| exposed == *key);

        let mut fields = FieldMap::new();
        for (exposed, _, inferred) in verbatim {
            fields.insert(exposed, inferred);
        }
        for (exposed, key, inferred) in renamed {
            let unique = unique_field_name(&fields, &exposed);
            if unique != exposed {
                warn!(
                    key = %key,
                    field = %unique,
                    "Sanitized field name collides with another field; suffixed"
                );
            }
            let inferred = if inferred.source.is_none() {
                inferred.with_source(key.clone())
            } else {
                inferred
            };
            fields.insert(unique, inferred);
        }

        fields
    }

    fn infer_file(
        &self,
        record_type: &str,
        value: &JsonValue,
        known: &[KnownType],
    ) -> Option<FieldDescriptor> {
        if record_type == FILE_TYPE_NAME {
            return None;
        }
        if !links::looks_like_file(value, self.media_types.as_ref(), self.paths.as_ref()) {
            return None;
        }
        links::known_file_field(known)
    }

    /// Structural classification of one example value
    fn classify(
        &self,
        value: &JsonValue,
        selector: &str,
        records: &[JsonObject],
        known: &[KnownType],
        names: &mut TypeNames,
    ) -> Option<FieldDescriptor> {
        match value {
            JsonValue::Array(items) => {
                let head = items.first()?;
                if head.is_object() {
                    let object = self.build_object_type(selector, records, known, names)?;
                    Some(FieldDescriptor::new(FieldType::Object(object).list_of()))
                } else {
                    let item = self.classify(head, selector, records, known, names)?;
                    Some(FieldDescriptor::new(item.field_type.list_of()))
                }
            }
            JsonValue::Null => None,
            JsonValue::String(text) if dates::is_date(text) => Some(date_field()),
            JsonValue::Bool(_) => Some(FieldDescriptor::scalar(ScalarType::Boolean)),
            JsonValue::String(_) => Some(FieldDescriptor::scalar(ScalarType::String)),
            JsonValue::Object(_) => {
                let object = self.build_object_type(selector, records, known, names)?;
                Some(FieldDescriptor::object(object))
            }
            JsonValue::Number(number) => {
                let integral = number.is_i64()
                    || number.is_u64()
                    || number.as_f64().is_some_and(|n| n % 1.0 == 0.0);
                if integral {
                    Some(FieldDescriptor::scalar(ScalarType::Int))
                } else {
                    Some(FieldDescriptor::scalar(ScalarType::Float))
                }
            }
        }
    }

    /// New named object type for the records' values at `selector`
    fn build_object_type(
        &self,
        selector: &str,
        records: &[JsonObject],
        known: &[KnownType],
        names: &mut TypeNames,
    ) -> Option<Arc<ObjectType>> {
        let fields = self.infer_fields_with_names(records, Some(selector), known, names);
        if fields.is_empty() {
            return None;
        }

        let field_name = selector.rsplit('.').next().unwrap_or(selector);
        let name = names.claim(field_name);
        Some(Arc::new(ObjectType::new(name, fields)))
    }
}

/// `name`, or `name_2`, `name_3`, ... when already present in `fields`
fn unique_field_name(fields: &FieldMap, name: &str) -> String {
    if !fields.contains_key(name) {
        return name.to_string();
    }
    (2..)
        .map(|n| format!("{name}_{n}"))
        .find(|candidate| !fields.contains_key(candidate))
        .unwrap_or_else(|| name.to_string())
}

/// Infer fields with default collaborators and no override mapping
pub fn infer_fields(
    records: &[JsonObject],
    selector: Option<&str>,
    known: &[KnownType],
) -> FieldMap {
    SchemaInferrer::new(Arc::new(records.to_vec())).infer_fields(records, selector, known)
}
