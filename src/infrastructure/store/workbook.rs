//! JSON workbook backend.
//!
//! ## File format
//! ```json
//! {
//!   "sheets": {
//!     "入場者リスト": [
//!       ["CAMPFIRE_ID", "氏名", "リターン内容", "入場権利", "リハ見学権利", "備考"],
//!       ["abc123", "Taro", "T-Shirt", "有", "有", ""]
//!     ]
//!   }
//! }
//! ```

use crate::domain::admission::{Cell, RecordStore, Sheet, StoreError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A set of named sheets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    #[serde(default)]
    pub sheets: BTreeMap<String, Vec<Vec<Cell>>>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a sheet, builder style.
    pub fn with_sheet(mut self, name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        self.sheets.insert(name.into(), rows);
        self
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.keys().cloned().collect()
    }

    /// Snapshot of one sheet, or `SheetNotFound` listing what does exist.
    pub fn sheet(&self, name: &str) -> Result<Sheet, StoreError> {
        self.sheets
            .get(name)
            .map(|rows| Sheet::new(name, rows.clone()))
            .ok_or_else(|| StoreError::SheetNotFound {
                sheet: name.to_string(),
                available: self.sheet_names(),
            })
    }

    fn parse(bytes: &[u8], path: &Path) -> Result<Self, StoreError> {
        serde_json::from_slice(bytes).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Record store backed by a workbook file on disk.
#[derive(Debug, Clone)]
pub struct WorkbookFileStore {
    path: PathBuf,
    sheet_name: String,
}

impl WorkbookFileStore {
    pub fn new(path: impl Into<PathBuf>, sheet_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sheet_name: sheet_name.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordStore for WorkbookFileStore {
    fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    async fn read_sheet(&self) -> Result<Sheet, StoreError> {
        // 每次都重新读取：名单由外部维护
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "workbook read");

        Workbook::parse(&bytes, &self.path)?.sheet(&self.sheet_name)
    }
}
