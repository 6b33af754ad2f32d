//! Wire types shared by the HTTP server and the access client.
//!
//! 响应信封的字段名沿用前端已经在使用的 camelCase 命名。

use serde::{Deserialize, Serialize};

/// 请求中携带标识符的字段名（查询参数与 JSON body 相同）
pub const CAMPFIRE_ID_FIELD: &str = "campfireId";

/// 面向用户的固定消息
pub mod messages {
    pub const IDENTIFIER_MISSING: &str = "IDが指定されていません";
    pub const MALFORMED_REQUEST: &str = "リクエスト形式が正しくありません";
    pub const NOT_FOUND: &str = "該当するIDが見つかりません";
    pub const NO_ACCESS: &str = "入場権利がありません";
    pub const ENTRANCE_ONLY: &str = "入場権利があります";
    pub const BOTH: &str = "入場権利とリハ見学権利があります";
    pub const INTERNAL_ERROR: &str = "システムエラーが発生しました";

    pub const INPUT_EMPTY: &str = "IDを入力してください";
    pub const CLIENT_RETRY_LATER: &str =
        "システムエラーが発生しました。しばらくしてから再度お試しください。";
}

/// POST 入口的请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAccessRequest {
    pub campfire_id: String,
}

/// 前端用来选择画面的分类标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessPattern {
    /// 入场=有, 彩排见学=有
    Both,
    /// 入场=有, 彩排见学=无
    EntranceOnly,
    /// 入场=无
    None,
    /// 名单中不存在
    NotFound,
}

impl AccessPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessPattern::Both => "both",
            AccessPattern::EntranceOnly => "entrance_only",
            AccessPattern::None => "none",
            AccessPattern::NotFound => "not_found",
        }
    }

    /// The user-facing message that accompanies this pattern.
    pub fn message(&self) -> &'static str {
        match self {
            AccessPattern::Both => messages::BOTH,
            AccessPattern::EntranceOnly => messages::ENTRANCE_ONLY,
            AccessPattern::None => messages::NO_ACCESS,
            AccessPattern::NotFound => messages::NOT_FOUND,
        }
    }

    pub fn grants_entry(&self) -> bool {
        matches!(self, AccessPattern::Both | AccessPattern::EntranceOnly)
    }
}

impl std::fmt::Display for AccessPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 有入场权利时附带的个人信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rehearsal_access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Response envelope returned by both entry points.
///
/// `success` means "the identifier was found", not "the request was well
/// formed"; `has_access` is only ever true together with `success`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessEnvelope {
    pub success: bool,
    pub has_access: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<AccessPattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EnvelopeData>,
}

impl AccessEnvelope {
    /// Envelope for a completed lookup. `data` is dropped unless the pattern grants entry.
    pub fn decided(pattern: AccessPattern, data: Option<EnvelopeData>) -> Self {
        let found = pattern != AccessPattern::NotFound;
        let has_access = pattern.grants_entry();
        Self {
            success: found,
            has_access,
            message: pattern.message().to_string(),
            pattern: Some(pattern),
            data: if has_access { data } else { None },
        }
    }

    /// 本地校验失败
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            has_access: false,
            message: message.into(),
            pattern: None,
            data: None,
        }
    }

    /// 内部错误，不向客户端暴露细节
    pub fn internal_error() -> Self {
        Self::rejected(messages::INTERNAL_ERROR)
    }
}
