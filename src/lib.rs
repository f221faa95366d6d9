//! Filter and aggregate small CSV files.
//!
//! [`process_csv`] is the whole pipeline: load a file, keep the rows
//! matching an optional `--where` condition, and optionally reduce one
//! column to its average, minimum or maximum.

pub mod data;
pub mod error;
pub mod query;
pub mod render;

pub use data::model::ResultTable;
pub use error::{to_exit_code, Error, ErrorKind, USAGE_EXIT_CODE};
pub use query::{process_csv, Query};
