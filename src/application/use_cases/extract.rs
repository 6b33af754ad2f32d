//! Identifier extraction strategies.
//!
//! The two historical entry points differ only in where `campfireId` lives.
//! Each strategy turns its raw input into "the identifier, if any" and
//! reports undecodable payloads as `MalformedRequest`; everything after that
//! is shared.

use crate::domain::validation::ValidationError;
use crate::shared::protocol::CAMPFIRE_ID_FIELD;
use serde_json::Value;

/// Pulls the raw identifier out of one request shape.
pub trait IdentifierExtractor: Send + Sync {
    /// Raw request input this strategy understands.
    type Input: ?Sized + Sync;

    /// Label used in logs and metrics.
    fn entry_point(&self) -> &'static str;

    /// # Returns
    /// * `Ok(Some(id))` - a string identifier was present (not yet trimmed)
    /// * `Ok(None)` - the field is missing or not a string
    /// * `Err(ValidationError::MalformedRequest)` - the payload could not be decoded
    fn extract(&self, input: &Self::Input) -> Result<Option<String>, ValidationError>;
}

/// POST 入口: `{"campfireId": "..."}`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBodyExtractor;

impl IdentifierExtractor for JsonBodyExtractor {
    type Input = [u8];

    fn entry_point(&self) -> &'static str {
        "post"
    }

    fn extract(&self, input: &[u8]) -> Result<Option<String>, ValidationError> {
        let value: Value = serde_json::from_slice(input)
            .map_err(|e| ValidationError::MalformedRequest(e.to_string()))?;

        let object = value.as_object().ok_or_else(|| {
            ValidationError::MalformedRequest("request body is not a JSON object".to_string())
        })?;

        Ok(object
            .get(CAMPFIRE_ID_FIELD)
            .and_then(Value::as_str)
            .map(str::to_string))
    }
}

/// GET 入口: `?campfireId=...`
///
/// The input is the decoded query pairs in URL order, or `None` when the
/// query string could not be decoded. A repeated `campfireId` resolves to
/// its first occurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParamExtractor;

impl IdentifierExtractor for QueryParamExtractor {
    type Input = Option<Vec<(String, String)>>;

    fn entry_point(&self) -> &'static str {
        "get"
    }

    fn extract(
        &self,
        input: &Option<Vec<(String, String)>>,
    ) -> Result<Option<String>, ValidationError> {
        let params = input.as_ref().ok_or_else(|| {
            ValidationError::MalformedRequest("query string could not be decoded".to_string())
        })?;

        Ok(params
            .iter()
            .find(|(key, _)| key == CAMPFIRE_ID_FIELD)
            .map(|(_, value)| value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_present() {
        let id = JsonBodyExtractor
            .extract(br#"{"campfireId": " abc123 "}"#)
            .unwrap();
        assert_eq!(id.as_deref(), Some(" abc123 "));
    }

    #[test]
    fn test_json_body_missing_or_not_string() {
        assert_eq!(JsonBodyExtractor.extract(b"{}").unwrap(), None);
        assert_eq!(JsonBodyExtractor.extract(br#"{"campfireId": 123}"#).unwrap(), None);
        assert_eq!(JsonBodyExtractor.extract(br#"{"campfireId": null}"#).unwrap(), None);
    }

    #[test]
    fn test_json_body_malformed() {
        for body in [&b"{not json"[..], b"", b"[1, 2]", b"\"abc123\""] {
            assert!(matches!(
                JsonBodyExtractor.extract(body),
                Err(ValidationError::MalformedRequest(_))
            ));
        }
    }

    fn pairs(items: &[(&str, &str)]) -> Option<Vec<(String, String)>> {
        Some(
            items
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_query_param() {
        assert_eq!(
            QueryParamExtractor
                .extract(&pairs(&[("other", "x"), ("campfireId", "abc123")]))
                .unwrap()
                .as_deref(),
            Some("abc123")
        );

        assert_eq!(QueryParamExtractor.extract(&pairs(&[])).unwrap(), None);
        assert!(matches!(
            QueryParamExtractor.extract(&None),
            Err(ValidationError::MalformedRequest(_))
        ));
    }

    #[test]
    fn test_query_param_repeated_first_wins() {
        let params = pairs(&[("campfireId", "first"), ("campfireId", "second")]);
        assert_eq!(
            QueryParamExtractor.extract(&params).unwrap().as_deref(),
            Some("first")
        );
    }
}
