#![deny(unsafe_code)]

pub mod merger;
pub mod writer;

pub use merger::{MergeOutput, merge_sources};
pub use writer::{OUTPUT_COLUMNS, write_merged_csv};
