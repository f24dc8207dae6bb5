//! Domain models for the ROM catalog.
//!
//! - [`FieldValue`] - a cell: plain text or a list of strings
//! - [`Record`] - one ROM build, columns in header order
//! - [`Index`] - key to bucket of record positions
//! - [`Dataset`] - all records plus the three lookup indexes
//! - [`DatasetDocument`] - owned form of a written document

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

mod dataset;

pub use dataset::{ConversionSummary, Dataset, DatasetDocument, Index, IndexKind};

// =============================================================================
// Well-known columns
// =============================================================================

pub const ROM_NAME: &str = "rom_name";
pub const ANDROID_VERSION: &str = "android_version";
pub const DOWNLOAD_LINKS: &str = "download_links";
pub const BUILD_TYPE: &str = "build_type";

// =============================================================================
// Field Value
// =============================================================================

/// Value of a single column.
///
/// Serialized untagged: a JSON string or a JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Text content, if this is a scalar.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    /// Items, if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            FieldValue::Text(_) => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::List(items.into_iter().map(String::from).collect())
    }
}

// =============================================================================
// Record
// =============================================================================

/// One ROM build entry.
///
/// A flat mapping from column name to value. Columns keep the order of the
/// CSV header, which is also the order they are written in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: IndexMap::with_capacity(capacity),
        }
    }

    /// Set a column. Replacing an existing column keeps its position.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields.get(column)
    }

    /// Non-empty scalar text of a column.
    ///
    /// Absent columns and empty cells both yield `None`.
    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column)
            .and_then(FieldValue::as_text)
            .filter(|s| !s.is_empty())
    }

    /// List items of a column, empty if the column is absent or not a list.
    pub fn list(&self, column: &str) -> &[String] {
        self.get(column)
            .and_then(FieldValue::as_list)
            .unwrap_or(&[])
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}
