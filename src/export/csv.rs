//! CSV output sink.
//!
//! Writes one flattened row per record, in the column layout of the export
//! being run.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use csv::Writer;

use super::row::{lookup_row, site_row, ENRICHMENT_COLUMNS, LOOKUP_COLUMNS, SITE_COLUMNS};
use crate::error_handling::RunError;
use crate::extract::{LookupRecord, SiteRecord};

/// Column layout of an export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportLayout {
    /// Top sites rows, with detail columns when `enriched`
    TopSites { enriched: bool },
    /// Per-URL lookup rows
    Lookup,
}

impl ExportLayout {
    /// Header row for this layout.
    pub fn header(self) -> Vec<&'static str> {
        match self {
            ExportLayout::TopSites { enriched } => {
                let mut header = SITE_COLUMNS.to_vec();
                if enriched {
                    header.extend(ENRICHMENT_COLUMNS);
                }
                header
            }
            ExportLayout::Lookup => LOOKUP_COLUMNS.to_vec(),
        }
    }
}

/// A CSV writer bound to one export layout.
pub struct CsvSink<W: Write> {
    writer: Writer<W>,
    layout: ExportLayout,
    rows: usize,
}

impl CsvSink<File> {
    /// Opens `path` for appending, creating it if needed.
    ///
    /// The header is written only when `write_header` is set, so a resumed
    /// export continues the existing file.
    pub fn append(path: &Path, layout: ExportLayout, write_header: bool) -> Result<Self, RunError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Self::from_writer(file, layout, write_header)
    }

    /// Creates or truncates `path` and writes the header.
    pub fn create(path: &Path, layout: ExportLayout) -> Result<Self, RunError> {
        let file = File::create(path)?;
        Self::from_writer(file, layout, true)
    }
}

impl<W: Write> CsvSink<W> {
    /// Wraps any writer, writing the header first when `write_header` is set.
    pub fn from_writer(inner: W, layout: ExportLayout, write_header: bool) -> Result<Self, RunError> {
        let mut writer = Writer::from_writer(inner);
        if write_header {
            writer.write_record(layout.header())?;
        }
        Ok(CsvSink {
            writer,
            layout,
            rows: 0,
        })
    }

    /// Column layout this sink writes.
    pub fn layout(&self) -> ExportLayout {
        self.layout
    }

    /// Number of data rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Writes a top sites row.
    pub fn write_site(&mut self, record: &SiteRecord) -> Result<(), RunError> {
        let enriched = matches!(self.layout, ExportLayout::TopSites { enriched: true });
        self.writer.write_record(site_row(record, enriched))?;
        self.rows += 1;
        Ok(())
    }

    /// Writes a lookup row.
    pub fn write_lookup(&mut self, record: &LookupRecord) -> Result<(), RunError> {
        self.writer.write_record(lookup_row(record))?;
        self.rows += 1;
        Ok(())
    }

    /// Flushes buffered rows to the underlying writer.
    pub fn flush(&mut self) -> Result<(), RunError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<W, RunError> {
        self.writer
            .into_inner()
            .map_err(|e| RunError::Io(std::io::Error::new(e.error().kind(), e.error().to_string())))
    }
}
