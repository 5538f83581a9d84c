//! Schema rendering

use super::builder::Schema;
use super::types::{FieldDescriptor, ObjectType};
use crate::types::JsonValue;
use serde_json::json;
use std::collections::{HashSet, VecDeque};
use std::fmt::Write;
use std::sync::Arc;

/// Every object type reachable from the schema, node types first
fn reachable_types(schema: &Schema) -> Vec<Arc<ObjectType>> {
    let mut queue: VecDeque<Arc<ObjectType>> = schema
        .types()
        .iter()
        .filter_map(|t| t.object_type.clone())
        .collect();
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    while let Some(object) = queue.pop_front() {
        if !seen.insert(object.name.clone()) {
            continue;
        }
        for field in object.fields.values() {
            if let Some(nested) = field.field_type.object_type() {
                queue.push_back(Arc::clone(nested));
            }
        }
        out.push(object);
    }
    out
}

/// Render one object type as an SDL `type` block
pub fn print_object(object: &ObjectType) -> String {
    let mut out = format!("type {} {{\n", object.name);
    for (name, field) in &object.fields {
        let _ = writeln!(out, "  {name}{}: {}", print_args(field), field.field_type);
    }
    out.push('}');
    out
}

fn print_args(field: &FieldDescriptor) -> String {
    if field.args.is_empty() {
        return String::new();
    }
    let args: Vec<String> = field
        .args
        .iter()
        .map(|a| format!("{}: {}", a.name, a.arg_type))
        .collect();
    format!("({})", args.join(", "))
}

/// Render the whole schema as SDL
pub fn print_schema(schema: &Schema) -> String {
    reachable_types(schema)
        .iter()
        .map(|object| print_object(object))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Describe the schema as JSON
pub fn describe(schema: &Schema) -> JsonValue {
    let types: Vec<JsonValue> = reachable_types(schema)
        .iter()
        .map(|object| {
            let fields: serde_json::Map<String, JsonValue> = object
                .fields
                .iter()
                .map(|(name, field)| {
                    let mut entry = json!({ "type": field.field_type.to_string() });
                    if !field.args.is_empty() {
                        entry["args"] = json!(field.args);
                    }
                    if let Some(source) = &field.source {
                        entry["source"] = json!(source);
                    }
                    (name.clone(), entry)
                })
                .collect();
            json!({
                "name": object.name,
                "node": schema.get(&object.name).is_some(),
                "fields": fields,
            })
        })
        .collect();

    json!({ "types": types })
}
