//! Decoder implementations
//!
//! Each decoder handles a specific file format.

use super::types::{DecoderConfig, DecoderFormat, RecordDecoder};
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use std::fs;
use std::path::Path;
use tracing::debug;

// ============================================================================
// JSON Decoder
// ============================================================================

/// JSON decoder with optional record path extraction
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder {
    /// Dotted path to the record array
    record_path: Option<String>,
}

impl JsonDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSON decoder with a record path
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            record_path: Some(path.into()),
        }
    }

    /// Extract records from a JSON value using the record path
    fn extract_records(&self, value: JsonValue) -> Result<Vec<JsonObject>> {
        let selected = match &self.record_path {
            Some(path) => match extract_simple_path(&value, path) {
                Some(found) => found.clone(),
                None => {
                    return Err(Error::decode(format!(
                        "Record path '{path}' not found in document"
                    )))
                }
            },
            None => value,
        };

        match selected {
            JsonValue::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| into_record(item, index))
                .collect(),
            single => Ok(vec![into_record(single, 0)?]),
        }
    }
}

impl RecordDecoder for JsonDecoder {
    fn decode(&self, body: &str) -> Result<Vec<JsonObject>> {
        let value = self.decode_raw(body)?;
        self.extract_records(value)
    }

    fn decode_raw(&self, body: &str) -> Result<JsonValue> {
        serde_json::from_str(body).map_err(|e| Error::Decode {
            message: format!("Failed to parse JSON: {e}"),
        })
    }
}

// ============================================================================
// JSONL Decoder
// ============================================================================

/// JSON Lines decoder (one JSON object per line)
#[derive(Debug, Clone, Default)]
pub struct JsonlDecoder;

impl JsonlDecoder {
    /// Create a new JSONL decoder
    pub fn new() -> Self {
        Self
    }
}

impl RecordDecoder for JsonlDecoder {
    fn decode(&self, body: &str) -> Result<Vec<JsonObject>> {
        let mut records = Vec::new();

        for (line_num, line) in body.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let value: JsonValue = serde_json::from_str(line).map_err(|e| Error::Decode {
                message: format!("Failed to parse JSONL at line {}: {e}", line_num + 1),
            })?;

            records.push(into_record(value, line_num)?);
        }

        Ok(records)
    }

    fn decode_raw(&self, body: &str) -> Result<JsonValue> {
        let records = self.decode(body)?;
        Ok(JsonValue::Array(
            records.into_iter().map(JsonValue::Object).collect(),
        ))
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Create a decoder for a configuration
pub fn create_decoder(config: &DecoderConfig) -> Box<dyn RecordDecoder> {
    match config.format {
        DecoderFormat::Json => match &config.record_path {
            Some(path) => Box::new(JsonDecoder::with_path(path)),
            None => Box::new(JsonDecoder::new()),
        },
        DecoderFormat::Jsonl => Box::new(JsonlDecoder::new()),
    }
}

/// Read and decode a record file
///
/// The format follows the file extension (`.jsonl`/`.ndjson` are JSON
/// Lines); `record_path` applies to JSON files only.
pub fn load_records(path: impl AsRef<Path>, record_path: Option<&str>) -> Result<Vec<JsonObject>> {
    let path = path.as_ref();
    let body = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    let mut config = DecoderConfig {
        format: DecoderFormat::from_path(path),
        record_path: None,
    };
    if let Some(record_path) = record_path {
        config = config.with_record_path(record_path);
    }

    let records = create_decoder(&config).decode(&body)?;
    debug!(path = %path.display(), records = records.len(), "Loaded records");
    Ok(records)
}

fn into_record(value: JsonValue, index: usize) -> Result<JsonObject> {
    match value {
        JsonValue::Object(map) => Ok(map),
        other => Err(Error::decode(format!(
            "Record {index} is not an object: {other}"
        ))),
    }
}

/// Walk a dotted path, with `name[index]` segments selecting array
/// elements (negative indices count from the end)
fn extract_simple_path<'a>(value: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = value;
    for part in path.split('.').filter(|p| !p.is_empty()) {
        if let Some(bracket_pos) = part.find('[') {
            let name = &part[..bracket_pos];
            let index_str = part[bracket_pos + 1..].strip_suffix(']')?;

            if !name.is_empty() {
                current = current.get(name)?;
            }

            let index: i64 = index_str.parse().ok()?;
            let JsonValue::Array(arr) = current else {
                return None;
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
            let idx = if index < 0 {
                (arr.len() as i64 + index) as usize
            } else {
                index as usize
            };
            current = arr.get(idx)?;
        } else {
            current = current.get(part)?;
        }
    }

    Some(current)
}
