use crate::message::{MentionType, Message};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use smol_str::SmolStr;

/// What kind of conversation a [`Conversation`] identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ConversationType {
    /// One-to-one chat.
    Private = 1,
    /// Group chat.
    Group = 2,
    /// Ephemeral chatroom.
    Chatroom = 3,
    /// System notification channel.
    System = 4,
}

/// The (type, id) pair addressing one conversation.
///
/// Script code originates these, so the reverse conversion is supported;
/// both keys are required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Which kind of conversation.
    pub conversation_type: ConversationType,
    /// Identifier, unique within the type.
    pub conversation_id: SmolStr,
}

impl Conversation {
    /// Address a conversation.
    pub fn new(conversation_type: ConversationType, conversation_id: impl Into<SmolStr>) -> Self {
        Self {
            conversation_type,
            conversation_id: conversation_id.into(),
        }
    }
}

/// One mention of the local user, as kept on a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionMsg {
    /// Who sent the mentioning message.
    pub sender_id: SmolStr,
    /// The mentioning message.
    pub msg_id: SmolStr,
    /// Its timestamp, epoch milliseconds.
    pub msg_time: i64,
    /// How the local user was mentioned.
    #[serde(rename = "type")]
    pub mention_type: MentionType,
}

/// The unread mentions of the local user within one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMentionInfo {
    /// Mentions, oldest first.
    #[serde(default)]
    pub mention_msg_list: Vec<MentionMsg>,
}

/// A conversation together with its list-view state.
///
/// Forward-only: the SDK owns this state, script code never originates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationInfo {
    /// The conversation this state belongs to.
    pub conversation: Conversation,
    /// Unread message count.
    pub unread_count: i32,
    /// Pinned to the top of the list.
    pub is_top: bool,
    /// Muted (no notification badge).
    pub is_mute: bool,
    /// Whether any message is unread.
    pub has_unread: bool,
    /// When the conversation was pinned, epoch milliseconds.
    pub top_time: i64,
    /// List ordering key, epoch milliseconds.
    pub sort_time: i64,
    /// The newest message, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<Message>,
    /// Unsent draft text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<String>,
    /// Unread mentions of the local user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mention_info: Option<ConversationMentionInfo>,
    /// Resolved display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resolved avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// One hit from a search over conversations by message content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConversationsResult {
    /// The conversation that matched.
    pub conversation_info: ConversationInfo,
    /// How many messages in it matched.
    pub matched_count: i32,
}
