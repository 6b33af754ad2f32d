/// Shared utilities and types used across all layers
///
/// This module contains:
/// - Protocol definitions (request, response envelope, access patterns, messages)
/// - Prometheus metrics

pub mod metrics;
pub mod protocol;

// Re-export commonly used types
pub use metrics::METRICS;
pub use protocol::{
    messages, AccessEnvelope, AccessPattern, CheckAccessRequest, EnvelopeData,
    CAMPFIRE_ID_FIELD,
};
