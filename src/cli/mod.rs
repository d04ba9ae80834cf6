//! CLI module
//!
//! Command-line interface for working with cursor tokens.
//!
//! # Commands
//!
//! - `build` - Build a cursor from a document and a sort specification
//! - `encode` - Encode a cursor document into a token
//! - `decode` - Decode a token back into Extended JSON
//! - `limit` - Sanitize a requested page size

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
