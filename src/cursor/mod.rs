//! Cursor module
//!
//! Opaque cursors for resuming iteration over a sorted result set.
//!
//! # Overview
//!
//! - [`build_cursor`] projects a document onto the sort keys, in sort order
//! - [`encode_cursor`] turns the projection into a URL-safe token
//! - [`decode_cursor`] reverses it, restoring dates and object ids
//!
//! Turning a cursor into a range filter is left to the query layer; the
//! [`Cursor`] (with its [`SortSpec`]) is the hand-off point.

mod builder;
mod codec;
mod types;

pub use builder::{build_cursor, resolve_path};
pub use codec::{decode_cursor, encode_cursor, from_extended_json, to_extended_json};
pub use types::{Cursor, SortDirection, SortSpec};
