//! Interchange export formats.
//!
//! Provides CSV and JSON renderings of the scan collection. The store's
//! export operations and the CLI `export` command both delegate here.

mod csv_format;
mod json_format;

pub use csv_format::to_csv;
pub use json_format::to_json;
