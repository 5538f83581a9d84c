//! Cross-reference fields
//!
//! Fields that point at other records instead of holding data: override
//! mapping hits, `___NODE` link fields, and file paths. Their resolvers look
//! the target records up in the full record set at query time and record a
//! dependency from the consuming page to every record they return.

use super::types::{
    FieldDescriptor, FieldType, KnownType, ObjectType, ResolveArgs, ResolveContext, Resolver,
};
use crate::collaborators::{
    DependencyRecorder, MediaTypeGuesser, PathClassifier, MS_DOWNLOAD, OCTET_STREAM,
};
use crate::types::{id_to_string, JsonObject, JsonValue, NodeExt, FILE_TYPE_NAME};
use std::sync::Arc;
use tracing::warn;

/// Shared handles every reference resolver captures
#[derive(Clone)]
pub(crate) struct LinkTargets {
    pub records: Arc<Vec<JsonObject>>,
    pub recorder: Arc<dyn DependencyRecorder>,
}

impl LinkTargets {
    /// Resolver matching records by `matcher(record, value)` for each value
    /// (or each element of a list value) stored under the resolved key
    fn resolver<M>(&self, matcher: M) -> Resolver
    where
        M: Fn(&JsonObject, &JsonValue) -> bool + Send + Sync + 'static,
    {
        let targets = self.clone();
        Arc::new(
            move |record: &JsonObject, _args: &ResolveArgs, ctx: &ResolveContext| {
                let value = record.get(&ctx.field_name).filter(|v| !v.is_null())?;
                match value {
                    JsonValue::Array(values) => Some(JsonValue::Array(
                        values
                            .iter()
                            .map(|v| targets.find(v, ctx, &matcher).unwrap_or(JsonValue::Null))
                            .collect(),
                    )),
                    single => targets.find(single, ctx, &matcher),
                }
            },
        )
    }

    fn find<M>(&self, value: &JsonValue, ctx: &ResolveContext, matcher: &M) -> Option<JsonValue>
    where
        M: Fn(&JsonObject, &JsonValue) -> bool,
    {
        let node = self.records.iter().find(|node| matcher(node, value))?;
        if let (Some(path), Some(id)) = (&ctx.path, node.node_id()) {
            self.recorder.record(path, &id_to_string(id));
        }
        Some(JsonValue::Object(node.clone()))
    }
}

fn known_object_type(known: &[KnownType], name: &str) -> Option<Arc<ObjectType>> {
    known
        .iter()
        .find(|t| t.name == name)
        .and_then(|t| t.object_type.clone())
}

fn typed_like(value: &JsonValue, object: Arc<ObjectType>) -> FieldType {
    let field_type = FieldType::Object(object);
    if value.is_array() {
        field_type.list_of()
    } else {
        field_type
    }
}

/// Descriptor for a field the override mapping points at `type_name`
///
/// Returns `None` (after logging) when no known type has that name.
pub(crate) fn infer_from_mapping(
    value: &JsonValue,
    selector: &str,
    type_name: &str,
    known: &[KnownType],
    targets: &LinkTargets,
) -> Option<FieldDescriptor> {
    let Some(object) = known_object_type(known, type_name) else {
        warn!(
            selector,
            type_name, "Couldn't find a matching node type for mapped field"
        );
        return None;
    };

    let target = type_name.to_string();
    let resolver = targets.resolver(move |node, id| {
        node.node_type() == Some(target.as_str()) && node.get("id") == Some(id)
    });

    Some(FieldDescriptor::new(typed_like(value, object)).with_resolver(resolver))
}

/// Descriptor for a `___NODE` field holding the id(s) of other records
///
/// The type is taken from the record the (first) id points to. Returns
/// `None` (after logging) when that record or its type is unknown.
pub(crate) fn infer_from_link(
    value: &JsonValue,
    selector: &str,
    known: &[KnownType],
    targets: &LinkTargets,
) -> Option<FieldDescriptor> {
    let id = match value {
        JsonValue::Array(ids) => {
            let Some(first) = ids.first() else {
                warn!(selector, "Link field holds no node ids");
                return None;
            };
            first
        }
        other => other,
    };

    let Some(linked) = targets.records.iter().find(|n| n.node_id() == Some(id)) else {
        warn!(selector, id = %id, "Linked node not found");
        return None;
    };

    let type_name = linked.node_type().unwrap_or_default();
    let Some(object) = known_object_type(known, type_name) else {
        warn!(selector, type_name, "Linked node type has not been built");
        return None;
    };

    let resolver = targets.resolver(|node, id| node.node_id() == Some(id));
    Some(FieldDescriptor::new(typed_like(value, object)).with_resolver(resolver))
}

/// Whether a value looks like a relative path to a file
pub(crate) fn looks_like_file(
    value: &JsonValue,
    media_types: &dyn MediaTypeGuesser,
    paths: &dyn PathClassifier,
) -> bool {
    let Some(text) = value.as_str() else {
        return false;
    };

    let media_type = media_types.guess(text);
    media_type != OCTET_STREAM
        && media_type != MS_DOWNLOAD
        && paths.is_relative_path(text)
        && paths.is_relative_url(text)
}

/// The ready-made descriptor of the known `File` type, if there is one
pub(crate) fn known_file_field(known: &[KnownType]) -> Option<FieldDescriptor> {
    known
        .iter()
        .find(|t| t.name == FILE_TYPE_NAME)
        .and_then(|t| t.file_field.clone())
}

/// Build the descriptor other types use to reference `File` records
///
/// A path string (or list of them) resolves to the `File` record whose
/// `relativePath` (ignoring a leading `./`) or `absolutePath` equals it.
pub(crate) fn file_reference_field(
    file_type: Arc<ObjectType>,
    targets: &LinkTargets,
) -> FieldDescriptor {
    let resolver = targets.resolver(|node, value| {
        let Some(path) = value.as_str() else {
            return false;
        };
        if node.node_type() != Some(FILE_TYPE_NAME) {
            return false;
        }
        let relative = path.strip_prefix("./").unwrap_or(path);
        node.get("relativePath").and_then(JsonValue::as_str) == Some(relative)
            || node.get("absolutePath").and_then(JsonValue::as_str) == Some(path)
    });

    FieldDescriptor::object(file_type).with_resolver(resolver)
}
