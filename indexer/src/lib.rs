//! # ROM Indexer - indexed ROM catalog for the static website
//!
//! Reads the CSV of Android ROM builds and writes one JSON document holding
//! every build plus lookup indexes by ROM name, Android version and build
//! type.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Transform  │────▶│  JSON file  │
//! │   (UTF-8)   │     │  (records)  │     │ (lists+idx) │     │  (indexed)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rom_indexer::convert;
//!
//! let dataset = convert("roms_for_website.csv", "roms_data.json").unwrap();
//! println!("{}", dataset.summary());
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Fixed paths and [`ConvertOptions`]
//! - [`error`] - Error types
//! - [`models`] - Records, indexes and the dataset
//! - [`parser`] - CSV parsing
//! - [`transform`] - List splitting, indexing and the pipeline
//! - [`output`] - JSON writing and reading
//! - [`logs`] - Progress logging

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod output;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::ConvertOptions;

pub use error::{ConversionError, ConversionResult, CsvError, CsvResult};

pub use models::{
    ConversionSummary,
    Dataset,
    DatasetDocument,
    FieldValue,
    Index,
    IndexKind,
    Record,
};

pub use parser::{csv_to_records, parse_csv, parse_csv_file, ParseResult};

pub use transform::{
    build_dataset,
    convert,
    convert_with,
    expand_list_field,
    expand_list_fields,
    split_list,
    transform_records,
};

pub use output::{read_document, to_json_pretty, write_dataset};
