//! CSV export.
//!
//! This module flattens extracted records into rows and writes them through
//! a [`CsvSink`] in the column layout of the running export.

mod csv;
mod row;

pub use self::csv::{CsvSink, ExportLayout};
pub use self::row::{lookup_row, site_row, ENRICHMENT_COLUMNS, LOOKUP_COLUMNS, SITE_COLUMNS};
