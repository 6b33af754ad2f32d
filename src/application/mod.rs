/// Application Layer - Use Cases and Services
///
/// Orchestrates the domain rules to serve one access check. Depends on the
/// domain layer and reaches the roster only through `RecordStore`, so any
/// backend can be injected.
///
/// ## Modules
/// - `services`: `LookupService` (roster scan, sheet inspection)
/// - `use_cases`: `CheckAccessUseCase` (request → envelope) and the
///   identifier extraction strategies

pub mod services;
pub mod use_cases;

// Re-export key services
pub use services::{LookupError, LookupService, SheetStructure};
pub use use_cases::{
    envelope_for, CheckAccessUseCase, IdentifierExtractor, JsonBodyExtractor, QueryParamExtractor,
};
