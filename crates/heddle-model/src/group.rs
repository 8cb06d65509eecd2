use crate::user::UserInfo;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::collections::BTreeMap;

/// A group conversation's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInfo {
    /// Stable group identifier.
    pub group_id: SmolStr,
    /// Group display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// Group avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait: Option<String>,
    /// Application-defined extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<BTreeMap<SmolStr, String>>,
    /// Last sync, epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<i64>,
}

/// A user's membership record in one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    /// The group this record belongs to.
    pub group_id: SmolStr,
    /// The member.
    pub user_id: SmolStr,
    /// Per-group display name override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_display_name: Option<String>,
    /// Application-defined extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<BTreeMap<SmolStr, String>>,
    /// Last sync, epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<i64>,
}

/// Aggregate read counters for one group message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMessageReadInfo {
    /// Members that have read the message.
    pub read_count: i32,
    /// Members the message was delivered to.
    pub member_count: i32,
}

/// Per-member read breakdown for one group message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMessageMemberReadDetail {
    /// Members that have read the message.
    #[serde(default)]
    pub read_members: Vec<UserInfo>,
    /// Members that have not.
    #[serde(default)]
    pub unread_members: Vec<UserInfo>,
}
