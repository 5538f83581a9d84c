// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # node-infer
//!
//! Schema inference for collections of heterogeneous JSON records ("nodes").
//!
//! ## Features
//!
//! - **Example Extraction**: One representative value per field across every record of a type
//! - **Type Inference**: Scalars, ISO 8601 dates, lists and nested object types
//! - **Cross-References**: Override mappings, `___NODE` link fields and relative file paths
//!   resolve to other records at query time
//! - **Dependency Tracking**: Reference resolvers record which page read which record
//! - **Date Arguments**: `formatString`, `fromNow` and `difference` on date fields
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use node_infer::{InferenceConfig, SchemaBuilder};
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"type": "Author", "id": "a1", "name": "Jo"}),
//!     json!({"type": "Post", "id": "p1", "author": "a1", "date": "2021-03-01"}),
//! ];
//! let records = records.into_iter().filter_map(|r| r.as_object().cloned()).collect();
//!
//! let config = InferenceConfig::new().with_mapping("Post.author", "Author");
//! let schema = SchemaBuilder::new().with_config(config).build(records)?;
//! println!("{}", schema.to_sdl());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        SchemaBuilder                         │
//! │        group by type → infer fields → register type          │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌─────────────┬────────────────┴─────┬────────────────────────┐
//! │  Extractor  │      Inferrer        │      Classifier        │
//! ├─────────────┼──────────────────────┼────────────────────────┤
//! │ merge       │ mapping overrides    │ lists, objects         │
//! │ flatten     │ ___NODE links        │ dates                  │
//! │ policies    │ file paths           │ scalars                │
//! └─────────────┴──────────────────────┴────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Inference configuration
pub mod config;

/// Dependency recording, media-type guessing and path classification
pub mod collaborators;

/// ISO 8601 date parsing, formatting and relative time
pub mod dates;

/// Schema inference
pub mod schema;

/// Record file decoders (JSON, JSONL)
pub mod decode;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use collaborators::{DependencyLog, DependencyRecorder};
pub use config::{load_config, load_config_from_str, InferenceConfig};
pub use schema::{build_schema, Schema, SchemaBuilder, SchemaInferrer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
