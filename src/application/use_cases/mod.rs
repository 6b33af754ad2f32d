/// Use Cases - High-level business operations
///
/// ## Available Use Cases
/// - `CheckAccessUseCase`: validates, looks up and builds the response envelope
///
/// ## Extraction Strategies
/// - `JsonBodyExtractor`: POST body `{"campfireId": ...}`
/// - `QueryParamExtractor`: GET `?campfireId=...`

pub mod check_access;
pub mod extract;

// Re-export key types
pub use check_access::{envelope_for, CheckAccessUseCase};
pub use extract::{IdentifierExtractor, JsonBodyExtractor, QueryParamExtractor};
