//! Decoder types and traits
//!
//! Defines the core decoder abstractions.

use crate::error::Result;
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Format of a record file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecoderFormat {
    /// JSON format (default)
    #[default]
    Json,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

impl DecoderFormat {
    /// Pick a format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("ndjson") => {
                DecoderFormat::Jsonl
            }
            _ => DecoderFormat::Json,
        }
    }
}

/// Configuration for decoding record files
#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    /// File format
    pub format: DecoderFormat,
    /// Dotted path to the record array (JSON only)
    pub record_path: Option<String>,
}

impl DecoderConfig {
    /// Create a JSON decoder config
    pub fn json() -> Self {
        Self {
            format: DecoderFormat::Json,
            ..Default::default()
        }
    }

    /// Create a JSON decoder config with a record path
    pub fn json_with_path(path: impl Into<String>) -> Self {
        Self {
            format: DecoderFormat::Json,
            record_path: Some(path.into()),
        }
    }

    /// Create a JSONL decoder config
    pub fn jsonl() -> Self {
        Self {
            format: DecoderFormat::Jsonl,
            ..Default::default()
        }
    }

    /// Set the record path
    #[must_use]
    pub fn with_record_path(mut self, path: impl Into<String>) -> Self {
        self.record_path = Some(path.into());
        self
    }
}

/// Trait for decoding file bodies into records
pub trait RecordDecoder: Send + Sync {
    /// Decode the body into a list of records
    fn decode(&self, body: &str) -> Result<Vec<JsonObject>>;

    /// Decode the body into a single JSON value
    fn decode_raw(&self, body: &str) -> Result<JsonValue>;
}
