//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Node schema inference CLI
#[derive(Parser, Debug)]
#[command(name = "node-infer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Inference configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Infer the schema of a record file
    Infer {
        /// Record file (JSON array or JSON Lines)
        #[arg(short, long)]
        records: PathBuf,

        /// Dotted path to the record array inside a JSON document
        #[arg(long)]
        record_path: Option<String>,

        /// Only print this node type
        #[arg(short = 't', long = "type")]
        type_name: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "sdl")]
        format: OutputFormat,
    },

    /// Resolve one field of one record
    Resolve {
        /// Record file (JSON array or JSON Lines)
        #[arg(short, long)]
        records: PathBuf,

        /// Dotted path to the record array inside a JSON document
        #[arg(long)]
        record_path: Option<String>,

        /// Node type of the record
        #[arg(short = 't', long = "type")]
        type_name: String,

        /// Record id
        #[arg(long)]
        id: String,

        /// Field to resolve
        #[arg(long)]
        field: String,

        /// Field arguments as a JSON object
        #[arg(long)]
        args: Option<String>,

        /// Page path to record dependencies against
        #[arg(long)]
        path: Option<String>,

        /// Reference instant for relative dates (RFC 3339)
        #[arg(long)]
        now: Option<String>,
    },
}

/// Schema output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Schema definition language
    Sdl,
    /// JSON description
    Json,
}
