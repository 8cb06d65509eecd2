use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::collections::BTreeMap;

/// A user profile as the SDK caches it.
///
/// Only `userId` is guaranteed; everything else is whatever the profile
/// service has synced so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Stable user identifier.
    pub user_id: SmolStr,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Application-defined profile extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<BTreeMap<SmolStr, String>>,
    /// Last profile sync, epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<i64>,
    /// SDK-defined user category.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub user_type: Option<i32>,
}

impl UserInfo {
    /// A profile carrying only the identifier.
    pub fn bare(user_id: impl Into<SmolStr>) -> Self {
        Self {
            user_id: user_id.into(),
            nickname: None,
            avatar: None,
            extra: None,
            update_time: None,
            user_type: None,
        }
    }
}
