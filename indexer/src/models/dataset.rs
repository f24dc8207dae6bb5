//! The indexed catalog document.
//!
//! [`Dataset`] keeps every record once, in `all_roms`, and each [`Index`]
//! stores positions into it. Records are copied into the buckets only when
//! the dataset is serialized, so every indexed record is also in `all_roms`.

use std::fmt;

use indexmap::IndexMap;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::Record;

// =============================================================================
// Index
// =============================================================================

/// The three lookup indexes of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Name,
    AndroidVersion,
    BuildType,
}

impl IndexKind {
    pub const ALL: [IndexKind; 3] = [IndexKind::Name, IndexKind::AndroidVersion, IndexKind::BuildType];

    /// Key of this index in the output document.
    pub fn document_key(self) -> &'static str {
        match self {
            IndexKind::Name => "by_name",
            IndexKind::AndroidVersion => "by_android_version",
            IndexKind::BuildType => "by_build_type",
        }
    }
}

/// Mapping from key to bucket, keys in first-seen order.
///
/// A bucket holds positions into the dataset's record list, in the order
/// they were inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    buckets: IndexMap<String, Vec<usize>>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `position` to the bucket of `key`, creating the bucket on first use.
    ///
    /// Inserting the same position twice in a row is a no-op, so a record
    /// carrying a key more than once lands in its bucket once.
    pub fn insert(&mut self, key: &str, position: usize) {
        let bucket = self.buckets.entry(key.to_string()).or_default();
        if bucket.last() != Some(&position) {
            bucket.push(position);
        }
    }

    pub fn get(&self, key: &str) -> Option<&[usize]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// All records plus the three lookup indexes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    all_roms: Vec<Record>,
    by_name: Index,
    by_android_version: Index,
    by_build_type: Index,
}

impl Dataset {
    pub(crate) fn from_parts(
        all_roms: Vec<Record>,
        by_name: Index,
        by_android_version: Index,
        by_build_type: Index,
    ) -> Self {
        Self {
            all_roms,
            by_name,
            by_android_version,
            by_build_type,
        }
    }

    /// All records in input order.
    pub fn records(&self) -> &[Record] {
        &self.all_roms
    }

    pub fn index(&self, kind: IndexKind) -> &Index {
        match kind {
            IndexKind::Name => &self.by_name,
            IndexKind::AndroidVersion => &self.by_android_version,
            IndexKind::BuildType => &self.by_build_type,
        }
    }

    /// Records stored under `key`, in bucket order. Empty for unknown keys.
    pub fn bucket(&self, kind: IndexKind, key: &str) -> Vec<&Record> {
        self.index(kind)
            .get(key)
            .map(|positions| self.resolve(positions).collect())
            .unwrap_or_default()
    }

    fn resolve<'a>(&'a self, positions: &'a [usize]) -> impl Iterator<Item = &'a Record> + 'a {
        positions.iter().filter_map(|&p| self.all_roms.get(p))
    }

    pub fn summary(&self) -> ConversionSummary {
        ConversionSummary {
            total_roms: self.all_roms.len(),
            unique_names: self.by_name.len(),
            android_versions: self.by_android_version.keys().map(String::from).collect(),
            build_types: self.by_build_type.keys().map(String::from).collect(),
        }
    }
}

/// Serializes one index as `{ key: [record, ...] }`.
struct BucketsView<'a> {
    dataset: &'a Dataset,
    index: &'a Index,
}

impl Serialize for BucketsView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.index
                .iter()
                .map(|(key, positions)| (key, self.dataset.resolve(positions).collect::<Vec<_>>())),
        )
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Dataset", 4)?;
        state.serialize_field("all_roms", &self.all_roms)?;
        state.serialize_field(
            "by_name",
            &BucketsView {
                dataset: self,
                index: &self.by_name,
            },
        )?;
        state.serialize_field(
            "by_android_version",
            &BucketsView {
                dataset: self,
                index: &self.by_android_version,
            },
        )?;
        state.serialize_field(
            "by_build_type",
            &BucketsView {
                dataset: self,
                index: &self.by_build_type,
            },
        )?;
        state.end()
    }
}

// =============================================================================
// Document (read back)
// =============================================================================

/// A written document parsed back into owned records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetDocument {
    pub all_roms: Vec<Record>,
    pub by_name: IndexMap<String, Vec<Record>>,
    pub by_android_version: IndexMap<String, Vec<Record>>,
    pub by_build_type: IndexMap<String, Vec<Record>>,
}

impl From<&Dataset> for DatasetDocument {
    fn from(dataset: &Dataset) -> Self {
        let materialize = |kind: IndexKind| -> IndexMap<String, Vec<Record>> {
            dataset
                .index(kind)
                .iter()
                .map(|(key, positions)| (key.to_string(), dataset.resolve(positions).cloned().collect()))
                .collect()
        };
        Self {
            all_roms: dataset.all_roms.clone(),
            by_name: materialize(IndexKind::Name),
            by_android_version: materialize(IndexKind::AndroidVersion),
            by_build_type: materialize(IndexKind::BuildType),
        }
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Counts and keys reported after a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub total_roms: usize,
    pub unique_names: usize,
    pub android_versions: Vec<String>,
    pub build_types: Vec<String>,
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total ROMs: {}", self.total_roms)?;
        writeln!(f, "Unique ROM names: {}", self.unique_names)?;
        writeln!(f, "Android versions: {:?}", self.android_versions)?;
        write!(f, "Build types: {:?}", self.build_types)
    }
}
