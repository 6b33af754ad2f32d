//! Record Store Trait - Domain Layer Abstraction
//!
//! The roster lives in an external table that somebody else edits. The
//! domain only needs one operation from it: "give me the current contents of
//! the sheet". Everything else (where the table lives, how it is encoded) is
//! an infrastructure concern.
//!
//! ## Implementations
//! - `MemoryRecordStore`: in-process workbook, used by tests and benches
//! - `WorkbookFileStore`: JSON workbook on disk, re-read on every call

use super::record::Cell;
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// 一张表的快照，第 0 行是表头
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn header(&self) -> Option<&[Cell]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// All rows after the header, in store order.
    pub fn data_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().skip(1).map(Vec::as_slice)
    }

    pub fn has_data(&self) -> bool {
        self.rows.len() > 1
    }

    /// 以表头行的宽度为准
    pub fn column_count(&self) -> usize {
        self.header().map_or(0, <[Cell]>::len)
    }
}

/// Reasons the roster could not be read.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The workbook exists but has no sheet with the configured name.
    #[error("sheet not found: {sheet} (available: {available:?})")]
    SheetNotFound { sheet: String, available: Vec<String> },

    #[error("failed to read workbook {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse workbook {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::SheetNotFound { .. } => "sheet_not_found",
            StoreError::Io { .. } => "io",
            StoreError::Parse { .. } => "parse",
        }
    }
}

/// Read-only access to the roster sheet.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Name of the sheet this store reads.
    fn sheet_name(&self) -> &str;

    /// Reads the whole sheet as it is right now.
    async fn read_sheet(&self) -> Result<Sheet, StoreError>;
}
