//! Cursor construction
//!
//! Projects a document down to the fields named by a sort specification.

use super::types::{Cursor, SortSpec};
use crate::types::{Document, Value};
use tracing::debug;

/// Build a cursor for `document` positioned under `sort`
///
/// The result holds exactly the sort keys, in sort order, each mapped to the
/// value found in the document. Dot-notation keys are resolved against nested
/// documents; a key whose path does not resolve maps to `Null`, which is how
/// the store orders and matches missing fields. The encoded token therefore
/// carries an explicit `null` for that key instead of leaving it out.
///
/// # Examples
///
/// ```
/// use bson::doc;
/// use solidafy_cursor::cursor::{build_cursor, SortSpec};
///
/// let document = doc! { "_id": 7, "info": { "color": "blue" }, "name": "John" };
/// let sort = SortSpec::new().desc("info.color").asc("_id");
///
/// let cursor = build_cursor(&document, &sort);
/// assert_eq!(cursor.keys().collect::<Vec<_>>(), vec!["info.color", "_id"]);
/// assert_eq!(cursor.get("info.color").and_then(|v| v.as_str()), Some("blue"));
/// ```
pub fn build_cursor(document: &Document, sort: &SortSpec) -> Cursor {
    let mut fields = Document::new();

    for field in sort.keys() {
        let value = resolve_path(document, field).cloned().unwrap_or(Value::Null);
        fields.insert(field, value);
    }

    debug!(fields = fields.len(), sort = %sort, "Built cursor");
    Cursor::from_document(fields)
}

/// Resolve a dot-notation path against a document
///
/// Plain keys are looked up directly first, so a top-level field whose name
/// contains a dot still wins over nested traversal. Numeric segments index
/// into arrays. Returns `None` as soon as a segment is missing.
pub fn resolve_path<'a>(document: &'a Document, path: &str) -> Option<&'a Value> {
    if let Some(value) = document.get(path) {
        return Some(value);
    }
    if !path.contains('.') {
        return None;
    }

    let mut segments = path.split('.');
    let mut current = document.get(segments.next()?)?;

    for segment in segments {
        current = match current {
            Value::Document(doc) => doc.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}
