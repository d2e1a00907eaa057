//! CSV decoding of state transition tables
//!
//! A table is a CSV file whose first record is the header
//! `SOURCE,DEST,TRIGGER`, followed by one record per transition. Fields are
//! kept exactly as written; emptiness carries meaning further down the
//! pipeline.

use crate::{Error, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// File extension of state transition tables
pub const CSV_EXTENSION: &str = "csv";

/// The only header accepted when header checking is on
pub const HEADER: [&str; 3] = ["SOURCE", "DEST", "TRIGGER"];

/// One undecorated table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub source: String,
    pub dest: String,
    pub trigger: String,
}

impl RawRow {
    pub fn new(
        source: impl Into<String>,
        dest: impl Into<String>,
        trigger: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            trigger: trigger.into(),
        }
    }
}

/// Reads raw rows out of CSV input
#[derive(Debug, Clone)]
pub struct TableReader {
    require_header: bool,
}

impl Default for TableReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TableReader {
    pub fn new() -> Self {
        Self {
            require_header: true,
        }
    }

    /// Accept any first record as the header
    pub fn require_header(mut self, require: bool) -> Self {
        self.require_header = require;
        self
    }

    /// Read every data row from `input`
    pub fn read<R: io::Read>(&self, input: R) -> Result<Vec<RawRow>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input);

        let header = csv_reader.headers()?.clone();
        if self.require_header && header.iter().ne(HEADER) {
            return Err(Error::InvalidHeader {
                expected: HEADER.iter().map(|h| h.to_string()).collect(),
                found: header.iter().map(str::to_string).collect(),
            });
        }

        let mut rows = Vec::new();
        for (idx, record) in csv_reader.records().enumerate() {
            let record = record?;
            let row = idx + 1;
            match (record.get(0), record.get(1), record.get(2), record.len()) {
                (Some(source), Some(dest), Some(trigger), 3) => {
                    rows.push(RawRow::new(source, dest, trigger));
                }
                (.., len) => {
                    return Err(Error::malformed_row(
                        row,
                        format!("expected 3 fields, found {}", len),
                    ));
                }
            }
        }

        tracing::debug!("Read {} rows", rows.len());
        Ok(rows)
    }

    /// Read every data row from the table at `path`
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<Vec<RawRow>> {
        let path = path.as_ref();
        tracing::info!("Reading state transition table {:?}", path);
        let file = File::open(path)?;
        self.read(file)
    }
}

/// Append `.csv` unless the path already ends with it
pub fn resolve_table_path(path: impl Into<PathBuf>) -> PathBuf {
    let path = path.into();
    let has_extension = path
        .extension()
        .is_some_and(|ext| ext == CSV_EXTENSION);
    if has_extension {
        path
    } else {
        let mut name = path.into_os_string();
        name.push(".");
        name.push(CSV_EXTENSION);
        PathBuf::from(name)
    }
}
