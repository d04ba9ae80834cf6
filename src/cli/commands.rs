//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Solidafy Cursor CLI
#[derive(Parser, Debug)]
#[command(name = "solidafy-cursor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a cursor from a document (Extended JSON) and a sort specification
    Build {
        /// Sort specification, e.g. `createdAt:-1,_id:1` or `-createdAt,_id`
        /// (defaults to the config's default_sort)
        #[arg(short, long)]
        sort: Option<String>,

        /// Inline document JSON (read from stdin if omitted)
        #[arg(short, long)]
        document: Option<String>,
    },

    /// Encode a cursor document (Extended JSON) into a token
    Encode {
        /// Inline cursor JSON (read from stdin if omitted)
        #[arg(long)]
        cursor: Option<String>,
    },

    /// Decode a token into Extended JSON
    Decode {
        /// Cursor token
        token: String,
    },

    /// Sanitize a requested page size
    Limit {
        /// Requested page size (omit for the default)
        #[arg(allow_negative_numbers = true)]
        requested: Option<i64>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON (one object per line)
    Json,
    /// Human-readable output
    Pretty,
}
