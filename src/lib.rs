//! # Solidafy Cursor
//!
//! Opaque cursor pagination helpers for sorted document collections.
//!
//! ## Features
//!
//! - **Cursor Building**: Project a document onto the sort keys, in sort order
//! - **Dot Notation**: Sort keys like `info.color` resolve into nested documents
//! - **Typed Tokens**: Dates and object ids survive the round trip through a token
//! - **Limit Sanitizing**: Default and clamp client-requested page sizes
//!
//! ## Quick Start
//!
//! ```rust
//! use bson::doc;
//! use solidafy_cursor::cursor::{build_cursor, decode_cursor, SortSpec};
//! use solidafy_cursor::limit::sanitize_limit;
//!
//! # fn main() -> solidafy_cursor::Result<()> {
//! let limit = sanitize_limit(None);
//! assert_eq!(limit, 20);
//!
//! // Last document of the current page
//! let last = doc! { "_id": 42, "createdAt": "2020-03-22", "color": "blue" };
//! let sort: SortSpec = "createdAt:1,color:-1".parse()?;
//!
//! let token = build_cursor(&last, &sort).encode();
//!
//! // Next request
//! let cursor = decode_cursor(&token)?;
//! assert_eq!(cursor.keys().collect::<Vec<_>>(), vec!["createdAt", "color"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   build_cursor    ┌──────────┐   encode_cursor   ┌─────────┐
//! │   Document   │ ────────────────▶ │  Cursor  │ ────────────────▶ │  Token  │
//! │ + SortSpec   │                   │ (ordered)│ ◀──────────────── │ (b64url)│
//! └──────────────┘                   └──────────┘   decode_cursor   └─────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
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

/// Cursor building and token codec
pub mod cursor;

/// Page size sanitizing
pub mod limit;

/// Configuration loading
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use cursor::{build_cursor, decode_cursor, encode_cursor, Cursor, SortDirection, SortSpec};
pub use limit::{sanitize_limit, LimitPolicy, DEFAULT_LIMIT};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
