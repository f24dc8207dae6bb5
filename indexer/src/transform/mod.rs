//! Transformation module.
//!
//! - Fields: split comma-separated cells into lists
//! - Indexer: bucket records by name, Android version and build type
//! - Pipeline: read, transform, index and write in one call

pub mod fields;
pub mod indexer;
pub mod pipeline;

pub use fields::{expand_list_field, expand_list_fields, split_list};
pub use indexer::build_dataset;
pub use pipeline::*;
