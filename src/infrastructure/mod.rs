/// Infrastructure Layer - Technical Implementations
///
/// Everything that touches the outside world: the roster backends, the HTTP
/// surface, health and metrics.
///
/// The infrastructure layer depends on the domain layer but the domain
/// layer does not depend on infrastructure (dependency inversion).
///
/// ## Modules
/// - `store`: record store backends (memory, JSON workbook file)
/// - `http`: axum router, CORS, server
/// - `observability`: health checks, metrics endpoint

pub mod http;
pub mod observability;
pub mod store;

// Re-export key types
pub use http::{create_router, AppState, HttpServer};
pub use store::{MemoryRecordStore, Workbook, WorkbookFileStore, DEFAULT_SHEET_NAME};
