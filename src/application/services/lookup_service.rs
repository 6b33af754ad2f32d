//! Lookup Service - Roster Scan
//!
//! Finds a participant in the roster and derives their access decision.
//!
//! ## Algorithm
//! - Read the sheet from the record store
//! - Skip the header row
//! - Compare each row's trimmed identifier with the trimmed input, exactly
//!   and case-sensitively
//! - The first match wins; later duplicates are ignored
//!
//! ## Errors
//! "Not found" is a normal outcome (`AccessDecision { found: false, .. }`).
//! Only a roster that cannot be located or read is an error
//! (`LookupError::StoreUnavailable`), and it is never folded into
//! "not found".
//!
//! ## Usage
//! ```rust,ignore
//! let store = Arc::new(WorkbookFileStore::new("roster.json", "入場者リスト"));
//! let service = LookupService::new(store);
//!
//! let decision = service.lookup("abc123").await?;
//! println!("pattern = {}", decision.pattern());
//! ```

use crate::domain::admission::{trim_text, AccessDecision, Cell, Record, RecordStore, StoreError};
use crate::shared::metrics::METRICS;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors returned by the lookup service
#[derive(Debug, Error)]
pub enum LookupError {
    /// The roster could not be located or read
    #[error("record store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

/// Diagnostic summary of the roster sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetStructure {
    pub sheet: String,
    pub row_count: usize,
    pub column_count: usize,
    pub header: Option<Vec<String>>,
    pub first_data_row: Option<Vec<String>>,
}

/// Roster lookup service
///
/// # Type Parameters
/// * `S` - Record store implementation
pub struct LookupService<S: RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore> LookupService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Looks up one identifier.
    ///
    /// # Arguments
    /// * `identifier` - Raw identifier; surrounding whitespace is ignored
    ///
    /// # Returns
    /// * `Ok(AccessDecision)` - found or not found
    /// * `Err(LookupError::StoreUnavailable)` - the roster could not be read
    pub async fn lookup(&self, identifier: &str) -> Result<AccessDecision, LookupError> {
        let identifier = trim_text(identifier);
        if identifier.is_empty() {
            // 空ID会匹配到空行，直接视为未找到
            debug!("empty identifier, skipping scan");
            return Ok(AccessDecision::not_found());
        }

        let started = Instant::now();
        let sheet = self.store.read_sheet().await.map_err(|e| {
            error!(sheet = %self.store.sheet_name(), error = %e, "record store unavailable");
            METRICS.store_errors_total.with_label_values(&[e.kind()]).inc();
            e
        })?;

        if !sheet.has_data() {
            warn!(sheet = %sheet.name, "no data found in sheet");
            self.observe(started, "empty");
            return Ok(AccessDecision::not_found());
        }

        let matched = sheet
            .data_rows()
            .find(|row| Record::identifier_of(row) == identifier)
            .map(Record::from_row);

        let decision = match matched {
            Some(record) => {
                info!(
                    identifier = %record.identifier,
                    entry_access = %record.entry_access,
                    rehearsal_access = %record.rehearsal_access,
                    "participant found"
                );
                self.observe(started, "found");
                AccessDecision::from_record(record)
            }
            None => {
                info!(identifier = %identifier, "participant not found");
                self.observe(started, "not_found");
                AccessDecision::not_found()
            }
        };

        Ok(decision)
    }

    /// Summarizes the roster sheet: size, header row and first data row.
    pub async fn inspect(&self) -> Result<SheetStructure, LookupError> {
        let sheet = self.store.read_sheet().await?;
        let render = |row: &[Cell]| row.iter().map(Cell::to_text).collect::<Vec<_>>();

        let header = sheet.header().map(render);
        let first_data_row = sheet.data_rows().next().map(render);

        Ok(SheetStructure {
            sheet: sheet.name.clone(),
            row_count: sheet.rows.len(),
            column_count: sheet.column_count(),
            header,
            first_data_row,
        })
    }

    fn observe(&self, started: Instant, result: &str) {
        METRICS
            .lookup_duration
            .with_label_values(&[result])
            .observe(started.elapsed().as_secs_f64());
    }
}
