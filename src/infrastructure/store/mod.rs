/// Record store backends
///
/// - memory: in-process workbook (tests, benches, embedding)
/// - workbook: JSON workbook file, re-read on every lookup so edits made by
///   whoever maintains the roster are picked up without a restart

pub mod memory;
pub mod workbook;

pub use memory::MemoryRecordStore;
pub use workbook::{Workbook, WorkbookFileStore};

/// 默认读取的表名
pub const DEFAULT_SHEET_NAME: &str = "入場者リスト";
