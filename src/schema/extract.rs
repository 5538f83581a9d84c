//! Field example extraction
//!
//! Reduces a record set to one representative value per field. Only the
//! shape of the example matters downstream, so conflicting occurrences are
//! settled by the configured [`ExamplePolicy`] rather than unioned.

use crate::types::{ExamplePolicy, JsonObject, JsonValue};

/// Builds field examples from a record set
#[derive(Debug, Clone, Copy, Default)]
pub struct ExampleExtractor {
    policy: ExamplePolicy,
}

impl ExampleExtractor {
    /// Create an extractor with the given policy
    pub fn new(policy: ExamplePolicy) -> Self {
        Self { policy }
    }

    /// The policy in use
    pub fn policy(&self) -> ExamplePolicy {
        self.policy
    }

    /// One example per field found at `selector` across `records`
    ///
    /// The selector is a dotted path of field names. Arrays met along the
    /// path are flattened, so the objects inside an array field are treated
    /// as a record set of their own.
    pub fn extract(&self, records: &[JsonObject], selector: Option<&str>) -> JsonObject {
        let path: Vec<&str> = selector
            .map(|s| s.split('.').filter(|p| !p.is_empty()).collect())
            .unwrap_or_default();

        let mut objects = Vec::new();
        for record in records {
            collect_from_record(record, &path, &mut objects);
        }

        let mut examples = JsonObject::new();
        for object in objects {
            self.merge_object(&mut examples, object);
        }
        examples
    }

    fn merge_object(&self, target: &mut JsonObject, source: &JsonObject) {
        for (key, value) in source {
            match target.get_mut(key) {
                Some(existing) => self.merge_value(existing, value),
                None => {
                    target.insert(key.clone(), self.representative(value));
                }
            }
        }
    }

    fn merge_value(&self, existing: &mut JsonValue, incoming: &JsonValue) {
        match (existing, incoming) {
            (JsonValue::Object(target), JsonValue::Object(source)) => {
                self.merge_object(target, source);
            }
            (JsonValue::Array(target), JsonValue::Array(source)) => {
                let incoming = self.representative_items(source);
                match (target.first_mut(), incoming.into_iter().next()) {
                    (Some(JsonValue::Object(head)), Some(JsonValue::Object(other))) => {
                        self.merge_object(head, &other);
                    }
                    (None, Some(item)) => target.push(item),
                    (Some(head), Some(item)) if self.policy == ExamplePolicy::LastSeen => {
                        *head = item;
                    }
                    // an empty array never replaces a populated example
                    _ => {}
                }
            }
            (slot, incoming) => {
                if self.policy == ExamplePolicy::LastSeen {
                    *slot = self.representative(incoming);
                }
            }
        }
    }

    /// Collapse arrays to a single representative element, recursively
    fn representative(&self, value: &JsonValue) -> JsonValue {
        match value {
            JsonValue::Array(items) => JsonValue::Array(self.representative_items(items)),
            JsonValue::Object(map) => {
                let mut out = JsonObject::new();
                self.merge_object(&mut out, map);
                JsonValue::Object(out)
            }
            other => other.clone(),
        }
    }

    fn representative_items(&self, items: &[JsonValue]) -> Vec<JsonValue> {
        let Some(first) = items.first() else {
            return Vec::new();
        };

        if first.is_object() {
            let mut merged = JsonObject::new();
            for item in items {
                if let JsonValue::Object(map) = item {
                    self.merge_object(&mut merged, map);
                }
            }
            vec![JsonValue::Object(merged)]
        } else {
            vec![self.representative(first)]
        }
    }
}

fn collect_from_record<'a>(record: &'a JsonObject, path: &[&str], out: &mut Vec<&'a JsonObject>) {
    match path.split_first() {
        None => out.push(record),
        Some((head, rest)) => {
            if let Some(next) = record.get(*head) {
                collect_from_value(next, rest, out);
            }
        }
    }
}

fn collect_from_value<'a>(value: &'a JsonValue, path: &[&str], out: &mut Vec<&'a JsonObject>) {
    match value {
        JsonValue::Array(items) => {
            for item in items {
                collect_from_value(item, path, out);
            }
        }
        JsonValue::Object(map) => collect_from_record(map, path, out),
        _ => {}
    }
}
