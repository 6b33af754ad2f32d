/// Domain Layer - Core Business Logic
///
/// Pure access-decision rules: how a roster row is read, how its flags turn
/// into a decision, and which identifiers are acceptable. No I/O happens
/// here; the roster itself is reached through the `RecordStore` trait.
///
/// ## Modules
/// - `admission`: roster rows, access decisions, the record store trait
/// - `validation`: identifier input rules
///
/// ## Principles
/// 1. **Pure Business Logic**: No I/O, no frameworks, no infrastructure
/// 2. **Read-only Roster**: Nothing here creates, mutates or deletes a row
/// 3. **Testable**: Easy to unit test without a real sheet

pub mod admission;
pub mod validation;

// Re-export key types
pub use admission::{AccessDecision, Cell, Profile, Record, RecordStore, Sheet, StoreError};
pub use validation::{IdentifierValidator, ValidationError};
