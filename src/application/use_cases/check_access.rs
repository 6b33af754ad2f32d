//! Check Access Use Case
//!
//! The request-handling half of the service. Both entry points funnel into
//! `execute`, which only differs by the extraction strategy passed in.
//!
//! ## Workflow
//! 1. Extract the raw identifier (body or query string)
//! 2. Require it to be non-blank
//! 3. Look it up in the roster
//! 4. Map the decision to a response envelope
//!
//! ## Error Boundary
//! This is the single place where internal failures become user-visible.
//! Validation failures get their specific message; anything else (including
//! an unavailable roster) becomes the generic system-error envelope and the
//! detail only goes to the log.

use super::extract::IdentifierExtractor;
use crate::application::services::{LookupError, LookupService};
use crate::domain::admission::{AccessDecision, RecordStore};
use crate::domain::validation::IdentifierValidator;
use crate::shared::metrics::METRICS;
use crate::shared::protocol::AccessEnvelope;
use tracing::{error, warn};

/// Check Access Use Case
pub struct CheckAccessUseCase<S: RecordStore> {
    service: LookupService<S>,
    validator: IdentifierValidator,
}

impl<S: RecordStore> CheckAccessUseCase<S> {
    pub fn new(service: LookupService<S>) -> Self {
        Self::with_validator(service, IdentifierValidator::new())
    }

    pub fn with_validator(service: LookupService<S>, validator: IdentifierValidator) -> Self {
        Self { service, validator }
    }

    pub fn service(&self) -> &LookupService<S> {
        &self.service
    }

    /// Handles one request end to end. Never fails: every outcome is an envelope.
    pub async fn execute<E: IdentifierExtractor>(
        &self,
        extractor: &E,
        input: &E::Input,
    ) -> AccessEnvelope {
        let entry_point = extractor.entry_point();

        let identifier = match extractor
            .extract(input)
            .and_then(|raw| self.validator.require(raw.as_deref()))
        {
            Ok(identifier) => identifier,
            Err(e) => {
                warn!(entry_point, reason = %e, "request rejected");
                METRICS
                    .checks_total
                    .with_label_values(&[entry_point, "rejected"])
                    .inc();
                return AccessEnvelope::rejected(e.user_message());
            }
        };

        match self.service.lookup(&identifier).await {
            Ok(decision) => {
                let envelope = envelope_for(decision);
                let outcome = envelope.pattern.map_or("error", |p| p.as_str());
                METRICS
                    .checks_total
                    .with_label_values(&[entry_point, outcome])
                    .inc();
                envelope
            }
            Err(LookupError::StoreUnavailable(e)) => {
                error!(entry_point, error = %e, "access check failed");
                METRICS
                    .checks_total
                    .with_label_values(&[entry_point, "error"])
                    .inc();
                AccessEnvelope::internal_error()
            }
        }
    }
}

/// Maps a decision to the envelope the client renders.
pub fn envelope_for(decision: AccessDecision) -> AccessEnvelope {
    let pattern = decision.pattern();
    AccessEnvelope::decided(pattern, decision.profile.map(Into::into))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::extract::{JsonBodyExtractor, QueryParamExtractor};
    use crate::domain::admission::Cell;
    use crate::infrastructure::store::{MemoryRecordStore, Workbook};
    use crate::shared::protocol::{messages, AccessPattern};
    use serde_json::json;
    use std::sync::Arc;

    const SHEET: &str = "入場者リスト";

    fn row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|c| Cell::from(*c)).collect()
    }

    fn use_case_with(data_row: &[&str]) -> CheckAccessUseCase<MemoryRecordStore> {
        let store = MemoryRecordStore::new(
            SHEET,
            vec![row(&["CAMPFIRE_ID", "氏名", "リターン", "入場", "リハ", "備考"]), row(data_row)],
        );
        CheckAccessUseCase::new(LookupService::new(Arc::new(store)))
    }

    fn query(id: &str) -> Option<Vec<(String, String)>> {
        Some(vec![("campfireId".to_string(), id.to_string())])
    }

    #[tokio::test]
    async fn test_both_access_scenario() {
        let use_case = use_case_with(&["abc123", "Taro", "T-Shirt", "有", "有", ""]);

        let envelope = use_case.execute(&QueryParamExtractor, &query("abc123")).await;
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "success": true,
                "hasAccess": true,
                "message": messages::BOTH,
                "pattern": "both",
                "data": { "name": "Taro", "returnItem": "T-Shirt", "rehearsalAccess": "有" }
            })
        );
    }

    #[tokio::test]
    async fn test_entrance_only_scenario() {
        let use_case = use_case_with(&["abc123", "Taro", "T-Shirt", "有", "無", ""]);

        let envelope = use_case.execute(&QueryParamExtractor, &query("abc123")).await;
        assert!(envelope.success);
        assert!(envelope.has_access);
        assert_eq!(envelope.pattern, Some(AccessPattern::EntranceOnly));
        assert_eq!(envelope.message, messages::ENTRANCE_ONLY);
        assert_eq!(envelope.data.unwrap().rehearsal_access.as_deref(), Some("無"));
    }

    #[tokio::test]
    async fn test_no_access_scenario() {
        let use_case = use_case_with(&["abc123", "Taro", "T-Shirt", "無", "有", ""]);

        let envelope = use_case.execute(&QueryParamExtractor, &query("abc123")).await;
        assert!(envelope.success);
        assert!(!envelope.has_access);
        assert_eq!(envelope.pattern, Some(AccessPattern::None));
        assert!(envelope.data.is_none());
    }

    #[tokio::test]
    async fn test_not_found_scenario() {
        let use_case = use_case_with(&["abc123", "Taro", "T-Shirt", "有", "有", ""]);

        let envelope = use_case.execute(&QueryParamExtractor, &query("zzz999")).await;
        assert!(!envelope.success);
        assert!(!envelope.has_access);
        assert_eq!(envelope.pattern, Some(AccessPattern::NotFound));
        assert_eq!(envelope.message, messages::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_post_and_get_agree() {
        let use_case = use_case_with(&["abc123", "Taro", "T-Shirt", "有", "無", "memo"]);

        let via_get = use_case.execute(&QueryParamExtractor, &query(" abc123 ")).await;
        let via_post = use_case
            .execute(&JsonBodyExtractor, br#"{"campfireId": " abc123 "}"#.as_slice())
            .await;
        assert_eq!(via_get, via_post);
        assert_eq!(via_post.data.unwrap().note.as_deref(), Some("memo"));
    }

    #[tokio::test]
    async fn test_blank_identifier_rejected() {
        // 名单里有空ID行也不能被匹配到
        let use_case = use_case_with(&["", "Ghost", "", "有", "有", ""]);

        let envelope = use_case.execute(&QueryParamExtractor, &query("   ")).await;
        assert_eq!(envelope, AccessEnvelope::rejected(messages::IDENTIFIER_MISSING));

        let envelope = use_case.execute(&JsonBodyExtractor, b"{}".as_slice()).await;
        assert_eq!(envelope.message, messages::IDENTIFIER_MISSING);
        assert!(envelope.pattern.is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let use_case = use_case_with(&["abc123", "", "", "有", "", ""]);

        let envelope = use_case.execute(&JsonBodyExtractor, b"{oops".as_slice()).await;
        assert!(!envelope.success);
        assert_eq!(envelope.message, messages::MALFORMED_REQUEST);
    }

    #[tokio::test]
    async fn test_store_unavailable_becomes_generic_error() {
        let store = MemoryRecordStore::from_workbook(Workbook::new(), SHEET);
        let use_case = CheckAccessUseCase::new(LookupService::new(Arc::new(store)));

        let envelope = use_case.execute(&QueryParamExtractor, &query("abc123")).await;
        assert_eq!(envelope, AccessEnvelope::internal_error());
        // 不能泄露内部细节
        assert!(!envelope.message.contains(SHEET));
    }
}
