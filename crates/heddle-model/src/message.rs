use crate::content::MessageContent;
use crate::conversation::Conversation;
use crate::convert::ConvertError;
use crate::group::GroupMessageReadInfo;
use crate::registry::ContentRegistry;
use crate::user::UserInfo;
use heddle_common::{Map, Value, from_value};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use smol_str::SmolStr;
use std::collections::BTreeMap;
use std::ops::BitOr;

/// Delivery state of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum MessageState {
    /// State not known (e.g. restored from an old database).
    Unknown = 0,
    /// Send in flight.
    Sending = 1,
    /// Acknowledged by the server.
    Sent = 2,
    /// Send failed.
    Fail = 3,
    /// Media upload in flight.
    Uploading = 4,
}

/// Whether the local user sent or received a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum MessageDirection {
    /// Sent by the local user.
    Send = 1,
    /// Received from someone else.
    Receive = 2,
}

/// How a message mentions users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum MentionType {
    /// No mention.
    #[default]
    Default = 0,
    /// Mentions everyone.
    All = 1,
    /// Mentions specific users.
    Someone = 2,
    /// Mentions everyone and calls out specific users.
    AllAndSomeone = 3,
}

/// Per-type delivery/storage behavior flags, combinable with `|`.
///
/// A custom type registered without explicit flags counts toward unread and
/// is stored, matching the SDK default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageFlags(pub u16);

impl MessageFlags {
    /// No special behavior.
    pub const NONE: Self = Self(0);
    /// Command message: delivery guaranteed, neither stored nor counted.
    pub const IS_CMD: Self = Self(1);
    /// Counts toward the conversation's unread badge.
    pub const IS_COUNTABLE: Self = Self(2);
    /// Status message: best effort, e.g. typing indicators.
    pub const IS_STATUS: Self = Self(4);
    /// Persisted in message history.
    pub const IS_SAVE: Self = Self(8);
    /// Edit of an earlier message.
    pub const IS_MODIFIED: Self = Self(16);
    /// Merged-forward container.
    pub const IS_MERGED: Self = Self(32);
    /// No notification or push.
    pub const IS_MUTE: Self = Self(64);
    /// Broadcast to many conversations without reordering them.
    pub const IS_BROADCAST: Self = Self(128);

    /// Whether every flag in `other` is set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for MessageFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Mention details attached to one message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageMentionInfo {
    /// How users are mentioned.
    #[serde(rename = "type")]
    pub mention_type: MentionType,
    /// The called-out users, empty for [`MentionType::All`].
    #[serde(default)]
    pub target_users: Vec<UserInfo>,
}

/// Push notification payload attached to an outgoing message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushData {
    /// Notification body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Opaque payload forwarded to the notification handler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

/// A message as the SDK stores it.
///
/// Forward conversion is total; the reverse path is
/// [`Message::from_script`], which needs a [`ContentRegistry`] to resolve
/// the content discriminator and therefore cannot be a plain deserialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Server-assigned identifier, empty until the send is acknowledged.
    pub message_id: SmolStr,
    /// Local sequence number, unique per device.
    pub client_msg_no: i64,
    /// Server timestamp, epoch milliseconds.
    pub timestamp: i64,
    /// Sender's user id.
    pub sender_user_id: SmolStr,
    /// Sender display name, when the profile is cached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_user_name: Option<String>,
    /// Sender avatar URL, when the profile is cached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_user_avatar: Option<String>,
    /// Sender profile extension, when the profile is cached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_user_extra: Option<BTreeMap<SmolStr, String>>,
    /// The conversation this message belongs to.
    pub conversation: Conversation,
    /// The typed content payload.
    pub content: MessageContent,
    /// Send or receive, absent for locally constructed messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<MessageDirection>,
    /// Delivery state, absent for locally constructed messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_state: Option<MessageState>,
    /// Whether the local user has read it.
    pub has_read: bool,
    /// Group read counters, group conversations only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_message_read_info: Option<GroupMessageReadInfo>,
    /// The quoted message, if this is a reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referred_message: Option<Box<Message>>,
    /// Mention details, absent when nobody is mentioned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mention_info: Option<MessageMentionInfo>,
    /// Device-local annotation, never synced.
    pub local_attribute: String,
    /// Deleted locally.
    pub is_delete: bool,
    /// Edited after sending.
    pub is_edit: bool,
}

/// Deserializable view of a message map; content stays raw until the
/// registry resolves it.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageSeed {
    #[serde(default)]
    message_id: SmolStr,
    #[serde(default)]
    client_msg_no: i64,
    #[serde(default)]
    timestamp: i64,
    #[serde(default)]
    sender_user_id: SmolStr,
    #[serde(default)]
    sender_user_name: Option<String>,
    #[serde(default)]
    sender_user_avatar: Option<String>,
    #[serde(default)]
    sender_user_extra: Option<BTreeMap<SmolStr, String>>,
    conversation: Conversation,
    content: Map,
    #[serde(default)]
    direction: Option<MessageDirection>,
    #[serde(default)]
    message_state: Option<MessageState>,
    #[serde(default)]
    has_read: bool,
    #[serde(default)]
    group_message_read_info: Option<GroupMessageReadInfo>,
    #[serde(default)]
    referred_message: Option<Map>,
    #[serde(default)]
    mention_info: Option<MessageMentionInfo>,
    #[serde(default)]
    local_attribute: String,
    #[serde(default)]
    is_delete: bool,
    #[serde(default)]
    is_edit: bool,
}

impl Message {
    /// A freshly composed message: content plus conversation, everything
    /// else at its pre-send default.
    pub fn compose(conversation: Conversation, content: MessageContent) -> Self {
        Self {
            message_id: SmolStr::default(),
            client_msg_no: 0,
            timestamp: 0,
            sender_user_id: SmolStr::default(),
            sender_user_name: None,
            sender_user_avatar: None,
            sender_user_extra: None,
            conversation,
            content,
            direction: None,
            message_state: None,
            has_read: false,
            group_message_read_info: None,
            referred_message: None,
            mention_info: None,
            local_attribute: String::new(),
            is_delete: false,
            is_edit: false,
        }
    }

    /// Rebuild a message from a script-side map.
    ///
    /// `conversation` and `content` are required; every other key falls back
    /// to its default when absent. The content map's discriminator is
    /// resolved against `registry` and its absence or an unrecognized value
    /// is an error, never a partially built message.
    pub fn from_script(map: &Map, registry: &ContentRegistry) -> Result<Self, ConvertError> {
        let seed: MessageSeed = from_value(&Value::Map(map.clone()))?;
        let content = MessageContent::from_map(&seed.content, registry)?;
        let referred_message = match &seed.referred_message {
            Some(inner) => Some(Box::new(Message::from_script(inner, registry)?)),
            None => None,
        };
        Ok(Self {
            message_id: seed.message_id,
            client_msg_no: seed.client_msg_no,
            timestamp: seed.timestamp,
            sender_user_id: seed.sender_user_id,
            sender_user_name: seed.sender_user_name,
            sender_user_avatar: seed.sender_user_avatar,
            sender_user_extra: seed.sender_user_extra,
            conversation: seed.conversation,
            content,
            direction: seed.direction,
            message_state: seed.message_state,
            has_read: seed.has_read,
            group_message_read_info: seed.group_message_read_info,
            referred_message,
            mention_info: seed.mention_info,
            local_attribute: seed.local_attribute,
            is_delete: seed.is_delete,
            is_edit: seed.is_edit,
        })
    }
}

/// One reaction event on a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageReaction {
    /// The reacted-to message.
    pub message_id: SmolStr,
    /// Application-defined reaction key, e.g. an emoji shortcode.
    pub reaction_type: SmolStr,
    /// Who reacted.
    pub user_id: SmolStr,
    /// When, epoch milliseconds.
    pub timestamp: i64,
}

/// Aggregated reactions of one kind on a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageReactionItem {
    /// The reaction key.
    pub reaction_id: SmolStr,
    /// Everyone who reacted with it.
    #[serde(default)]
    pub user_info_list: Vec<UserInfo>,
}

/// A message the local user has favorited.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteMessage {
    /// The favorited message.
    pub message: Message,
    /// When it was favorited, epoch milliseconds.
    pub created_time: i64,
}
