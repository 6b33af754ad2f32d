//! Access decision derived from a roster row.

use super::record::Record;
use crate::shared::protocol::{AccessPattern, EnvelopeData};
use serde::Serialize;

/// 个人信息（只在有入场权利时返回给前端）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub display_name: Option<String>,
    pub reward_description: Option<String>,
    /// 彩排见学列的原始值
    pub rehearsal_access: Option<String>,
    pub note: Option<String>,
}

impl From<Profile> for EnvelopeData {
    fn from(profile: Profile) -> Self {
        EnvelopeData {
            name: profile.display_name,
            return_item: profile.reward_description,
            rehearsal_access: profile.rehearsal_access,
            note: profile.note,
        }
    }
}

/// Result of a roster lookup.
///
/// `entry_access`, `rehearsal_access` and `profile` only carry meaning when
/// `found` is true; a not-found decision always has them false/empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDecision {
    pub found: bool,
    pub entry_access: bool,
    pub rehearsal_access: bool,
    pub profile: Option<Profile>,
}

impl AccessDecision {
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn from_record(record: Record) -> Self {
        let entry_access = record.has_entry_access();
        let rehearsal_access = record.has_rehearsal_access();
        let rehearsal_raw = if record.rehearsal_access.is_empty() {
            None
        } else {
            Some(record.rehearsal_access)
        };

        Self {
            found: true,
            entry_access,
            rehearsal_access,
            profile: Some(Profile {
                display_name: record.display_name,
                reward_description: record.reward_description,
                rehearsal_access: rehearsal_raw,
                note: record.note,
            }),
        }
    }

    /// 入场权利决定一切：没有入场权利时忽略彩排列
    pub fn pattern(&self) -> AccessPattern {
        match (self.found, self.entry_access, self.rehearsal_access) {
            (false, _, _) => AccessPattern::NotFound,
            (true, false, _) => AccessPattern::None,
            (true, true, true) => AccessPattern::Both,
            (true, true, false) => AccessPattern::EntranceOnly,
        }
    }

    pub fn has_access(&self) -> bool {
        self.found && self.entry_access
    }
}
