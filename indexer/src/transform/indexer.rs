//! Build the lookup indexes of a dataset.
//!
//! # Architecture
//!
//! ```text
//! all_roms (input order)              by_name / by_android_version / by_build_type
//! ┌──────────────────────────────┐   ┌────────────────────────────────┐
//! │ 0: LineageOS 14 [OFFICIAL]   │   │ LineageOS → [0, 2]             │
//! │ 1: crDroid   13 [OFFICIAL,   │ → │ crDroid   → [1]                │
//! │                  GAPPS]      │   │ OFFICIAL  → [0, 1]             │
//! │ 2: LineageOS 13 []           │   │ GAPPS     → [1]                │
//! └──────────────────────────────┘   └────────────────────────────────┘
//! ```
//!
//! A single pass appends each record's position to the buckets of its keys.
//! Empty or absent `rom_name` and `android_version` are not indexed; each
//! distinct build-type token gets one entry.

use crate::models::{Dataset, Index, Record, ANDROID_VERSION, BUILD_TYPE, ROM_NAME};

/// Index `records` and wrap them into a [`Dataset`].
pub fn build_dataset(records: Vec<Record>) -> Dataset {
    let mut by_name = Index::new();
    let mut by_android_version = Index::new();
    let mut by_build_type = Index::new();

    for (position, record) in records.iter().enumerate() {
        if let Some(name) = record.text(ROM_NAME) {
            by_name.insert(name, position);
        }

        if let Some(version) = record.text(ANDROID_VERSION) {
            by_android_version.insert(version, position);
        }

        // Index::insert skips a repeated position, so duplicate tokens count once.
        for token in record.list(BUILD_TYPE) {
            by_build_type.insert(token, position);
        }
    }

    Dataset::from_parts(records, by_name, by_android_version, by_build_type)
}
