//! CLI module
//!
//! Command-line interface for schema inference.
//!
//! # Commands
//!
//! - `infer` - Infer and print the schema of a record file
//! - `resolve` - Resolve one field of one record

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
