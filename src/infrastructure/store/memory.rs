//! In-memory record store.

use super::workbook::Workbook;
use crate::domain::admission::{Cell, RecordStore, Sheet, StoreError};
use async_trait::async_trait;

/// 内存中的名单，供测试与基准使用
pub struct MemoryRecordStore {
    workbook: Workbook,
    sheet_name: String,
}

impl MemoryRecordStore {
    /// Store with a single sheet holding `rows` (row 0 is the header).
    pub fn new(sheet_name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        let sheet_name = sheet_name.into();
        Self {
            workbook: Workbook::new().with_sheet(sheet_name.clone(), rows),
            sheet_name,
        }
    }

    /// Store reading `sheet_name` out of an arbitrary workbook. The sheet
    /// does not have to exist.
    pub fn from_workbook(workbook: Workbook, sheet_name: impl Into<String>) -> Self {
        Self {
            workbook,
            sheet_name: sheet_name.into(),
        }
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    async fn read_sheet(&self) -> Result<Sheet, StoreError> {
        self.workbook.sheet(&self.sheet_name)
    }
}
