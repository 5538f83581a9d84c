//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::collaborators::DependencyLog;
use crate::config::{load_config, InferenceConfig};
use crate::decode::load_records;
use crate::error::{Error, Result, ResultExt};
use crate::schema::{print_object, ResolveArgs, ResolveContext, Schema, SchemaBuilder};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Infer {
                records,
                record_path,
                type_name,
                format,
            } => self.infer(records, record_path.as_deref(), type_name.as_deref(), *format),
            Commands::Resolve {
                records,
                record_path,
                type_name,
                id,
                field,
                args,
                path,
                now,
            } => {
                let request = ResolveRequest {
                    type_name,
                    id,
                    field,
                    args: args.as_deref(),
                    path: path.as_deref(),
                    now: now.as_deref(),
                };
                self.resolve(records, record_path.as_deref(), &request)
            }
        }
    }

    /// Load the inference configuration, if one was given
    fn load_config(&self) -> Result<InferenceConfig> {
        match &self.cli.config {
            Some(path) => load_config(path),
            None => Ok(InferenceConfig::default()),
        }
    }

    fn build(
        &self,
        records: &Path,
        record_path: Option<&str>,
        builder: SchemaBuilder,
    ) -> Result<Schema> {
        let config = self.load_config()?;
        let records = load_records(records, record_path)?;
        debug!(records = records.len(), mappings = config.mapping.len(), "Building schema");
        builder.with_config(config).build(records)
    }

    /// Infer and render the schema
    fn infer(
        &self,
        records: &Path,
        record_path: Option<&str>,
        type_name: Option<&str>,
        format: OutputFormat,
    ) -> Result<String> {
        let schema = self.build(records, record_path, SchemaBuilder::new())?;

        match (type_name, format) {
            (None, OutputFormat::Sdl) => Ok(schema.to_sdl()),
            (None, OutputFormat::Json) => Ok(serde_json::to_string_pretty(&schema.describe())?),
            (Some(name), OutputFormat::Sdl) => {
                let object = schema
                    .object_type(name)
                    .ok_or_else(|| Error::type_not_found(name))?;
                Ok(print_object(object))
            }
            (Some(name), OutputFormat::Json) => {
                let description = schema.describe();
                let entry = description["types"]
                    .as_array()
                    .and_then(|types| types.iter().find(|t| t["name"] == name))
                    .cloned()
                    .ok_or_else(|| Error::type_not_found(name))?;
                Ok(serde_json::to_string_pretty(&entry)?)
            }
        }
    }

    /// Resolve one field and report the dependencies it recorded
    fn resolve(
        &self,
        records: &Path,
        record_path: Option<&str>,
        request: &ResolveRequest<'_>,
    ) -> Result<String> {
        let log = Arc::new(DependencyLog::new());
        let schema = self.build(
            records,
            record_path,
            SchemaBuilder::new().with_recorder(log.clone()),
        )?;

        let record = schema.find_record(request.type_name, request.id)?;
        let args: ResolveArgs = match request.args {
            Some(text) => {
                serde_json::from_str(text).context("Field arguments must be a JSON object")?
            }
            None => ResolveArgs::new(),
        };

        let mut ctx = ResolveContext::new();
        if let Some(path) = request.path {
            ctx = ctx.with_path(path);
        }
        if let Some(now) = request.now {
            let now = DateTime::parse_from_rfc3339(now)
                .map_err(|e| Error::invalid_value("now", e.to_string()))?;
            ctx = ctx.with_now(now.with_timezone(&Utc));
        }

        let value = schema.resolve(request.type_name, record, request.field, &args, &ctx)?;
        let output = json!({
            "type": request.type_name,
            "id": request.id,
            "field": request.field,
            "value": value.unwrap_or(Value::Null),
            "dependencies": log.entries(),
        });
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

/// Arguments of the `resolve` command
struct ResolveRequest<'a> {
    type_name: &'a str,
    id: &'a str,
    field: &'a str,
    args: Option<&'a str>,
    path: Option<&'a str>,
    now: Option<&'a str>,
}
