/// Application Services
///
/// Services coordinate domain logic to implement application workflows.

pub mod lookup_service;

pub use lookup_service::{LookupError, LookupService, SheetStructure};
