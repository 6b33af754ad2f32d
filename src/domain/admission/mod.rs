/// Domain Layer - Admission Module
///
/// ## Row layout
/// | column | content |
/// |---|---|
/// | A | identifier (CAMPFIRE ID) |
/// | B | display name |
/// | C | reward description |
/// | D | entry access (`有` = granted) |
/// | E | rehearsal access (`有` = granted) |
/// | F | note |
///
/// Row 0 is the header and is never matched.

pub mod decision;
pub mod record;
pub mod traits;

pub use decision::{AccessDecision, Profile};
pub use record::{columns, trim_text, Cell, Record, ACCESS_GRANTED};
pub use traits::{RecordStore, Sheet, StoreError};
