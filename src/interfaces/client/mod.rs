//! Access Client
//!
//! The form side of the contract: validate what the participant typed, ask
//! the deployed endpoint, and decide which screen to show.
//!
//! ## Screens
//! | envelope | screen |
//! |---|---|
//! | success && hasAccess && pattern == both | `BothAccess` |
//! | success && hasAccess (any other pattern) | `EntranceOnly` |
//! | success && !hasAccess | `NoAccess` |
//! | otherwise | `Message` (envelope message) |
//!
//! ## Usage
//! ```rust,ignore
//! let client = AccessClient::new(ClientConfig::new("https://example.com/exec"))?;
//! match client.check("abc123").await {
//!     Ok(screen) => println!("{}", screen.render()),
//!     Err(e) => println!("{}", e.user_message()),
//! }
//! ```

use crate::domain::validation::{IdentifierValidator, ValidationError};
use crate::shared::protocol::{
    messages, AccessEnvelope, AccessPattern, CheckAccessRequest, EnvelopeData, CAMPFIRE_ID_FIELD,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, error};

/// 请求方式，对应两种历史部署
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RequestMethod {
    #[default]
    Get,
    Post,
}

/// Client configuration.
///
/// Loaded from JSON as `{"endpointUrl": "...", "method": "get"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub endpoint_url: String,
    #[serde(default)]
    pub method: RequestMethod,
}

impl ClientConfig {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            method: RequestMethod::default(),
        }
    }

    pub fn with_method(mut self, method: RequestMethod) -> Self {
        self.method = method;
        self
    }

    /// Reads a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ClientError> {
        let bytes = std::fs::read(path).map_err(|e| ClientError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Client-side errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Rejected before any request was sent
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("endpoint URL is not configured")]
    NotConfigured,

    #[error("failed to load client config {path}: {message}")]
    Config { path: String, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    ResponseParse(#[source] serde_json::Error),
}

impl ClientError {
    /// 给用户看的消息：输入错误给出具体提示，其余一律"稍后再试"
    pub fn user_message(&self) -> String {
        match self {
            ClientError::InvalidInput(e) => e.user_message(),
            _ => messages::CLIENT_RETRY_LATER.to_string(),
        }
    }
}

/// Which screen the form shows for a response.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// 入场OK + 彩排见学OK
    BothAccess(Option<EnvelopeData>),
    /// 入场OK
    EntranceOnly(Option<EnvelopeData>),
    /// 入场NG
    NoAccess,
    /// 留在输入画面并显示消息
    Message(String),
}

impl Screen {
    pub fn from_envelope(envelope: AccessEnvelope) -> Self {
        match (envelope.success, envelope.has_access) {
            (true, true) if envelope.pattern == Some(AccessPattern::Both) => {
                Screen::BothAccess(envelope.data)
            }
            // 旧部署不返回 pattern，按只有入场处理
            (true, true) => Screen::EntranceOnly(envelope.data),
            (true, false) => Screen::NoAccess,
            _ if envelope.message.is_empty() => Screen::Message(messages::NOT_FOUND.to_string()),
            _ => Screen::Message(envelope.message),
        }
    }

    /// Plain-text rendering of the screen.
    pub fn render(&self) -> String {
        match self {
            Screen::BothAccess(data) => {
                let mut lines = vec!["入場OK・リハ見学OK".to_string()];
                lines.extend(profile_lines(data.as_ref()));
                lines.push("リハ見学: 可能".to_string());
                lines.join("\n")
            }
            Screen::EntranceOnly(data) => {
                let mut lines = vec!["入場OK".to_string()];
                lines.extend(profile_lines(data.as_ref()));
                lines.join("\n")
            }
            Screen::NoAccess => messages::NO_ACCESS.to_string(),
            Screen::Message(message) => message.clone(),
        }
    }
}

fn profile_lines(data: Option<&EnvelopeData>) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(data) = data {
        if let Some(name) = &data.name {
            lines.push(format!("お名前: {}", name));
        }
        if let Some(item) = &data.return_item {
            lines.push(format!("リターン: {}", item));
        }
    }
    lines
}

/// HTTP client for a deployed access-check endpoint.
pub struct AccessClient {
    http: reqwest::Client,
    config: ClientConfig,
    validator: IdentifierValidator,
}

impl AccessClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        if config.endpoint_url.trim().is_empty() {
            return Err(ClientError::NotConfigured);
        }

        Ok(Self {
            http: reqwest::Client::new(),
            config,
            validator: IdentifierValidator::new(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Validates the input, queries the endpoint and picks a screen.
    pub async fn check(&self, raw: &str) -> Result<Screen, ClientError> {
        let identifier = self.validator.check_length(raw)?;
        let envelope = self.fetch(&identifier).await?;
        Ok(Screen::from_envelope(envelope))
    }

    /// Sends one request and decodes the envelope. No input validation.
    pub async fn fetch(&self, identifier: &str) -> Result<AccessEnvelope, ClientError> {
        let url = self.config.endpoint_url.as_str();
        debug!(url, method = ?self.config.method, identifier, "sending access check");

        let request = match self.config.method {
            RequestMethod::Get => self.http.get(url).query(&[(CAMPFIRE_ID_FIELD, identifier)]),
            RequestMethod::Post => self.http.post(url).json(&CheckAccessRequest {
                campfire_id: identifier.to_string(),
            }),
        };

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "access check request failed");
            ClientError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "access check returned HTTP error");
            return Err(ClientError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        debug!(body = %text, "access check response");

        serde_json::from_str(&text).map_err(|e| {
            error!(error = %e, body = %text, "failed to parse access check response");
            ClientError::ResponseParse(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(success: bool, has_access: bool, pattern: Option<AccessPattern>) -> AccessEnvelope {
        AccessEnvelope {
            success,
            has_access,
            message: "msg".to_string(),
            pattern,
            data: None,
        }
    }

    #[test]
    fn test_screen_selection() {
        assert_eq!(
            Screen::from_envelope(envelope(true, true, Some(AccessPattern::Both))),
            Screen::BothAccess(None)
        );
        assert_eq!(
            Screen::from_envelope(envelope(true, true, Some(AccessPattern::EntranceOnly))),
            Screen::EntranceOnly(None)
        );
        assert_eq!(
            Screen::from_envelope(envelope(true, true, None)),
            Screen::EntranceOnly(None)
        );
        assert_eq!(
            Screen::from_envelope(envelope(true, false, Some(AccessPattern::None))),
            Screen::NoAccess
        );
        assert_eq!(
            Screen::from_envelope(envelope(false, false, Some(AccessPattern::NotFound))),
            Screen::Message("msg".to_string())
        );
    }

    #[test]
    fn test_empty_message_falls_back_to_not_found() {
        let mut env = envelope(false, false, None);
        env.message.clear();
        assert_eq!(
            Screen::from_envelope(env),
            Screen::Message(messages::NOT_FOUND.to_string())
        );
    }

    #[test]
    fn test_render_both() {
        let screen = Screen::BothAccess(Some(EnvelopeData {
            name: Some("Taro".to_string()),
            return_item: Some("T-Shirt".to_string()),
            ..Default::default()
        }));
        assert_eq!(
            screen.render(),
            "入場OK・リハ見学OK\nお名前: Taro\nリターン: T-Shirt\nリハ見学: 可能"
        );
    }

    #[test]
    fn test_render_entrance_without_profile() {
        assert_eq!(Screen::EntranceOnly(None).render(), "入場OK");
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        assert!(matches!(
            AccessClient::new(ClientConfig::new("  ")),
            Err(ClientError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn test_short_input_rejected_before_request() {
        // 端口 9 (discard) 不会被请求到：校验先失败
        let client = AccessClient::new(ClientConfig::new("http://127.0.0.1:9/")).unwrap();

        let err = client.check("ab").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(ValidationError::TooShort { .. })));
        assert_eq!(err.user_message(), "IDは3文字以上で入力してください");
    }

    #[test]
    fn test_config_from_json() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"endpointUrl": "https://example.com/exec"}"#).unwrap();
        assert_eq!(config.endpoint_url, "https://example.com/exec");
        assert_eq!(config.method, RequestMethod::Get);

        let config: ClientConfig =
            serde_json::from_str(r#"{"endpointUrl": "https://example.com/exec", "method": "post"}"#)
                .unwrap();
        assert_eq!(config.method, RequestMethod::Post);
    }

    #[test]
    fn test_non_input_errors_use_generic_message() {
        assert_eq!(ClientError::Status(500).user_message(), messages::CLIENT_RETRY_LATER);
        assert_eq!(ClientError::NotConfigured.user_message(), messages::CLIENT_RETRY_LATER);
    }
}
