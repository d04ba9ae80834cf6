//! Cursor types
//!
//! Defines the sort specification and the cursor object built from it.

use crate::error::{Error, Result};
use crate::types::{Document, JsonValue, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Sort Direction
// ============================================================================

/// Direction of a single sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first (`1`)
    #[default]
    Ascending,
    /// Largest first (`-1`)
    Descending,
}

impl SortDirection {
    /// Numeric form used by sort documents
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }

    /// The opposite direction
    pub fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }
}

impl TryFrom<i64> for SortDirection {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            1 => Ok(Self::Ascending),
            -1 => Ok(Self::Descending),
            other => Err(Error::invalid_sort(format!(
                "direction must be 1 or -1, got {other}"
            ))),
        }
    }
}

impl TryFrom<&Value> for SortDirection {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Int32(v) => Self::try_from(i64::from(*v)),
            Value::Int64(v) => Self::try_from(*v),
            Value::Double(v) if v.fract() == 0.0 => Self::try_from(*v as i64),
            other => Err(Error::invalid_sort(format!(
                "direction must be 1 or -1, got {other}"
            ))),
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "asc" | "ascending" => Ok(Self::Ascending),
            "-1" | "desc" | "descending" => Ok(Self::Descending),
            other => Err(Error::invalid_sort(format!("unknown direction '{other}'"))),
        }
    }
}

impl Serialize for SortDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_i32())
    }
}

impl<'de> Deserialize<'de> for SortDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(i64),
            Name(String),
        }

        let direction = match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Self::try_from(n),
            Repr::Name(s) => s.parse(),
        };
        direction.map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Sort Specification
// ============================================================================

/// Ordered mapping of field name to sort direction
///
/// Insertion order is precedence: the first key is the primary sort key.
/// Keys may use dot notation (`info.color`) to address nested fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortSpec {
    fields: IndexMap<String, SortDirection>,
}

impl SortSpec {
    /// Create an empty sort specification
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ascending key
    #[must_use]
    pub fn asc(mut self, field: impl Into<String>) -> Self {
        self.push(field, SortDirection::Ascending);
        self
    }

    /// Append a descending key
    #[must_use]
    pub fn desc(mut self, field: impl Into<String>) -> Self {
        self.push(field, SortDirection::Descending);
        self
    }

    /// Append a key, or update its direction in place if already present
    pub fn push(&mut self, field: impl Into<String>, direction: SortDirection) {
        self.fields.insert(field.into(), direction);
    }

    /// Direction for a field
    pub fn direction(&self, field: &str) -> Option<SortDirection> {
        self.fields.get(field).copied()
    }

    /// Field names in precedence order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Field/direction pairs in precedence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, SortDirection)> {
        self.fields.iter().map(|(k, d)| (k.as_str(), *d))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Same keys with every direction flipped (for paging backwards)
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            fields: self
                .fields
                .iter()
                .map(|(k, d)| (k.clone(), d.reverse()))
                .collect(),
        }
    }

    /// Mongo-style sort document (`{field: 1 | -1}`)
    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();
        for (field, direction) in self.iter() {
            doc.insert(field, direction.as_i32());
        }
        doc
    }
}

impl TryFrom<&Document> for SortSpec {
    type Error = Error;

    fn try_from(doc: &Document) -> Result<Self> {
        let mut spec = Self::new();
        for (field, value) in doc {
            let direction = SortDirection::try_from(value)
                .map_err(|e| Error::invalid_sort(format!("field '{field}': {e}")))?;
            spec.push(field.clone(), direction);
        }
        Ok(spec)
    }
}

impl FromStr for SortSpec {
    type Err = Error;

    /// Parse `createdAt:-1,_id:1` or `-createdAt,_id`
    fn from_str(s: &str) -> Result<Self> {
        let mut spec = Self::new();

        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (field, direction) = if let Some((field, dir)) = part.rsplit_once(':') {
                (field.trim(), dir.parse::<SortDirection>()?)
            } else if let Some(field) = part.strip_prefix('-') {
                (field, SortDirection::Descending)
            } else {
                (part.strip_prefix('+').unwrap_or(part), SortDirection::Ascending)
            };

            if field.is_empty() {
                return Err(Error::invalid_sort(format!("empty field name in '{part}'")));
            }
            if spec.fields.contains_key(field) {
                return Err(Error::invalid_sort(format!("duplicate field '{field}'")));
            }
            spec.push(field, direction);
        }

        if spec.is_empty() {
            return Err(Error::invalid_sort("at least one sort field is required"));
        }
        Ok(spec)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, direction)| format!("{field}:{}", direction.as_i32()))
            .collect();
        write!(f, "{}", parts.join(","))
    }
}

// ============================================================================
// Cursor
// ============================================================================

/// Position marker within a sorted result set
///
/// Holds one value per sort key, in sort-key order. Serializes as its
/// opaque token so it can be embedded directly in API response bodies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cursor {
    fields: Document,
}

impl Cursor {
    /// Wrap an already-projected document
    pub fn from_document(fields: Document) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Field names in stored order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_document(&self) -> &Document {
        &self.fields
    }

    pub fn into_document(self) -> Document {
        self.fields
    }

    /// Relaxed Extended JSON form, keys in stored order
    pub fn to_extended_json(&self) -> JsonValue {
        super::codec::to_extended_json(&self.fields)
    }

    /// Encode to an opaque URL-safe token
    pub fn encode(&self) -> String {
        super::codec::encode_cursor(self)
    }

    /// Decode an opaque token
    pub fn decode(token: &str) -> Result<Self> {
        super::codec::decode_cursor(token)
    }
}

impl From<Document> for Cursor {
    fn from(fields: Document) -> Self {
        Self::from_document(fields)
    }
}

impl From<Cursor> for Document {
    fn from(cursor: Cursor) -> Self {
        cursor.fields
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Cursor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl Serialize for Cursor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Cursor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Self::decode(&token).map_err(serde::de::Error::custom)
    }
}
