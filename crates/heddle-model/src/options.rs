use crate::message::{MessageMentionInfo, PushData};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use smol_str::SmolStr;

/// Which way to page relative to an anchor timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum PullDirection {
    /// Toward newer entries.
    Newer = 0,
    /// Toward older entries.
    #[default]
    Older = 1,
}

/// Extras attached to an outgoing message.
///
/// Originated by script code; every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, bon::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(start_fn = new)]
pub struct SendMessageOptions {
    /// Who the message mentions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention_info: Option<MessageMentionInfo>,
    /// The quoted message's id, for replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub referred_message_id: Option<SmolStr>,
    /// Push notification payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_data: Option<PushData>,
}

/// Paging options for fetching message history.
///
/// Originated by script code; absent keys mean "let the SDK decide".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, bon::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(start_fn = new)]
pub struct GetMessageOptions {
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    /// Anchor timestamp from the previous page, epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
}
