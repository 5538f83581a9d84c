//! Record decoder module
//!
//! Supports: JSON, JSONL
//!
//! # Overview
//!
//! Turns a record file into the list of JSON objects schema inference runs
//! on. JSON bodies may nest the record array under a dotted path such as
//! `data.nodes`.

mod decoders;
mod types;

pub use decoders::{create_decoder, load_records, JsonDecoder, JsonlDecoder};
pub use types::{DecoderConfig, DecoderFormat, RecordDecoder};
