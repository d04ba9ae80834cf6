//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, CursorConfig};
use crate::cursor::{build_cursor, from_extended_json, Cursor, SortSpec};
use crate::error::{Error, Result, ResultExt};
use crate::types::{Document, JsonValue};
use serde_json::json;
use std::io::{self, Read};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
    config: CursorConfig,
}

impl Runner {
    /// Create a new runner, loading the config file if one was given
    pub fn new(cli: Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => load_config(path)?,
            None => CursorConfig::default(),
        };
        Ok(Self { cli, config })
    }

    /// Loaded configuration
    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    /// Log level for this run (`--verbose` wins over the config)
    pub fn log_level(&self) -> tracing::Level {
        if self.cli.verbose {
            tracing::Level::DEBUG
        } else {
            self.config.log_level.into()
        }
    }

    /// Run the CLI command and print its result
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        self.print(&output)
    }

    /// Run the CLI command and return its result
    pub fn execute(&self) -> Result<JsonValue> {
        debug!(command = ?self.cli.command, "Executing command");

        match &self.cli.command {
            Commands::Build { sort, document } => self.build(sort.as_deref(), document.as_deref()),
            Commands::Encode { cursor } => self.encode(cursor.as_deref()),
            Commands::Decode { token } => self.decode(token),
            Commands::Limit { requested } => {
                Ok(json!({ "limit": self.config.limits.apply(*requested) }))
            }
        }
    }

    /// Build a cursor from a document
    fn build(&self, sort: Option<&str>, document: Option<&str>) -> Result<JsonValue> {
        let sort = match sort {
            Some(spec) => spec.parse::<SortSpec>()?,
            None => self.config.sort_or_default(),
        };
        let document = read_document(document)?;

        let cursor = build_cursor(&document, &sort);
        Ok(json!({
            "sort": sort.to_string(),
            "cursor": cursor.to_extended_json(),
            "token": cursor.encode(),
        }))
    }

    /// Encode a cursor document
    fn encode(&self, cursor: Option<&str>) -> Result<JsonValue> {
        let cursor = Cursor::from_document(read_document(cursor)?);
        Ok(json!({ "token": cursor.encode() }))
    }

    /// Decode a token
    fn decode(&self, token: &str) -> Result<JsonValue> {
        let cursor = Cursor::decode(token)?;
        Ok(json!({ "cursor": cursor.to_extended_json() }))
    }

    fn print(&self, output: &JsonValue) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(output)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(output)?,
        };
        println!("{rendered}");
        Ok(())
    }
}

/// Parse an Extended JSON document from an inline value or stdin
fn read_document(inline: Option<&str>) -> Result<Document> {
    let content = match inline {
        Some(json_str) => json_str.to_string(),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read document from stdin")?;
            buf
        }
    };

    let json: JsonValue = serde_json::from_str(&content)
        .map_err(|e| Error::invalid_document(format!("Invalid document JSON: {e}")))?;
    from_extended_json(json)
}
