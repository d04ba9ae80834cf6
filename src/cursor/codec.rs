//! Cursor token codec
//!
//! A token is the compact relaxed Extended JSON of the cursor document,
//! base64url-encoded without padding. Extended JSON tags (`$date`, `$oid`,
//! ...) carry the value types plain JSON would lose, so a date decodes back
//! to a date and an object id back to an object id.

use super::types::Cursor;
use crate::error::{Error, Result};
use crate::types::{Document, JsonValue, Value};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use serde_json::json;
use tracing::{debug, warn};

/// URL-safe alphabet, no padding on encode, padding tolerated on decode
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode a cursor into an opaque URL-safe token
pub fn encode_cursor(cursor: &Cursor) -> String {
    let json = to_extended_json(cursor.as_document());
    let token = TOKEN_ENGINE.encode(json.to_string());
    debug!(fields = cursor.len(), token_len = token.len(), "Encoded cursor");
    token
}

/// Decode a token produced by [`encode_cursor`]
///
/// Fails with [`Error::InvalidCursor`] when the token is not base64url, does
/// not hold a JSON object, or carries a malformed Extended JSON tag.
pub fn decode_cursor(token: &str) -> Result<Cursor> {
    let result = decode_token(token.trim());
    match &result {
        Ok(cursor) => debug!(fields = cursor.len(), "Decoded cursor"),
        Err(e) => warn!(error = %e, "Rejected cursor token"),
    }
    result
}

fn decode_token(token: &str) -> Result<Cursor> {
    if token.is_empty() {
        return Err(Error::invalid_cursor("token is empty"));
    }

    let bytes = TOKEN_ENGINE
        .decode(token)
        .map_err(|e| Error::invalid_cursor(format!("not base64url: {e}")))?;
    let json: JsonValue = serde_json::from_slice(&bytes)
        .map_err(|e| Error::invalid_cursor(format!("not JSON: {e}")))?;

    parse_document(json)
        .map(Cursor::from_document)
        .map_err(Error::invalid_cursor)
}

/// Convert a document to relaxed Extended JSON, preserving key order
///
/// `Int64` values are written in canonical `{"$numberLong": "..."}` form so
/// they do not narrow to `Int32` on the way back.
pub fn to_extended_json(document: &Document) -> JsonValue {
    JsonValue::Object(
        document
            .iter()
            .map(|(key, value)| (key.clone(), value_to_extended_json(value)))
            .collect(),
    )
}

fn value_to_extended_json(value: &Value) -> JsonValue {
    match value {
        Value::Document(doc) => to_extended_json(doc),
        Value::Array(items) => JsonValue::Array(items.iter().map(value_to_extended_json).collect()),
        Value::Int64(n) => json!({ "$numberLong": n.to_string() }),
        other => other.clone().into_relaxed_extjson(),
    }
}

/// Parse Extended JSON (relaxed or canonical) into a document
///
/// Tagged objects are rebuilt into their typed values. The top level must be
/// a plain object, not a tagged scalar.
pub fn from_extended_json(json: JsonValue) -> Result<Document> {
    parse_document(json).map_err(Error::invalid_document)
}

fn parse_document(json: JsonValue) -> std::result::Result<Document, String> {
    if !json.is_object() {
        return Err(format!("expected a JSON object, found {}", json_kind(&json)));
    }

    match Value::try_from(json) {
        Ok(Value::Document(doc)) => Ok(doc),
        Ok(other) => Err(format!(
            "expected a document, found {:?}",
            other.element_type()
        )),
        Err(e) => Err(format!("bad extended JSON: {e}")),
    }
}

fn json_kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
