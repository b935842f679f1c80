//! Workbook sources and sinks.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Table, TableError};

/// A collection of named sheets.
pub trait Workbook {
    /// Sheet names in workbook order.
    fn sheet_names(&self) -> Vec<String>;

    fn read_sheet(&self, name: &str) -> Result<Table, TableError>;

    /// Replaces a sheet of the same name in place, or appends a new one.
    fn write_sheet(&mut self, table: Table) -> Result<(), TableError>;

    fn has_sheet(&self, name: &str) -> bool {
        self.sheet_names().iter().any(|s| s == name)
    }
}

/// In-memory workbook; also the on-disk JSON document shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryWorkbook {
    pub sheets: Vec<Table>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    fn upsert(&mut self, table: Table) {
        match self.sheets.iter_mut().find(|s| s.name == table.name) {
            Some(slot) => *slot = table,
            None => self.sheets.push(table),
        }
    }
}

impl Workbook for MemoryWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    fn read_sheet(&self, name: &str) -> Result<Table, TableError> {
        self.sheets
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| TableError::MissingSheet(name.to_string()))
    }

    fn write_sheet(&mut self, table: Table) -> Result<(), TableError> {
        self.upsert(table);
        Ok(())
    }
}

/// File-backed workbook stored as a single pretty-printed JSON document.
///
/// Every `write_sheet` rewrites the file, so each sheet lands on disk
/// independently of the ones written after it.
#[derive(Debug)]
pub struct JsonWorkbook {
    path: PathBuf,
    book: MemoryWorkbook,
}

impl JsonWorkbook {
    /// Opens an existing workbook.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path).map_err(|source| TableError::Read {
            path: path.clone(),
            source,
        })?;
        let book: MemoryWorkbook =
            serde_json::from_str(&text).map_err(|source| TableError::Parse {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(path = %path.display(), sheets = book.sheets.len(), "opened workbook");
        Ok(Self { path, book })
    }

    /// Starts an empty workbook; nothing touches disk until the first write.
    pub fn create(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            book: MemoryWorkbook::new(),
        }
    }

    /// Opens `path` when it exists, otherwise starts an empty workbook there.
    pub fn open_or_create(path: impl AsRef<Path>) -> Result<Self, TableError> {
        if path.as_ref().exists() {
            Self::open(path)
        } else {
            Ok(Self::create(path))
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_memory(self) -> MemoryWorkbook {
        self.book
    }

    fn flush(&self) -> Result<(), TableError> {
        let text = serde_json::to_string_pretty(&self.book).map_err(TableError::Encode)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| TableError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, text).map_err(|source| TableError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl Workbook for JsonWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.book.sheet_names()
    }

    fn read_sheet(&self, name: &str) -> Result<Table, TableError> {
        self.book.read_sheet(name)
    }

    fn write_sheet(&mut self, table: Table) -> Result<(), TableError> {
        tracing::debug!(
            path = %self.path.display(),
            sheet = %table.name,
            rows = table.len(),
            "writing sheet"
        );
        self.book.upsert(table);
        self.flush()
    }
}
