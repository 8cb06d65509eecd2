use crate::call::{CallInfo, CallMember, CallSession};
use crate::conversation::{
    Conversation, ConversationInfo, ConversationMentionInfo, MentionMsg, SearchConversationsResult,
};
use crate::group::{GroupInfo, GroupMember, GroupMessageMemberReadDetail, GroupMessageReadInfo};
use crate::message::{
    FavoriteMessage, Message, MessageMentionInfo, MessageReaction, MessageReactionItem, PushData,
};
use crate::moment::{
    GetMomentCommentOptions, GetMomentOptions, Moment, MomentComment, MomentMedia, MomentReaction,
};
use crate::options::{GetMessageOptions, SendMessageOptions};
use crate::user::UserInfo;
use heddle_common::{Map, Value, ValueError, from_value, to_value};
use serde::Serialize;
use smol_str::SmolStr;

/// Error converting between entities and scripting-boundary maps.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[non_exhaustive]
pub enum ConvertError {
    /// A content map arrived without its `contentType` discriminator.
    #[error("content map is missing its \"contentType\" discriminator")]
    MissingContentType,
    /// A reverse conversion met a discriminator that is neither SDK-defined
    /// nor registered.
    #[error("unrecognized content type {0:?}")]
    UnknownContentType(SmolStr),
    /// A registration used an empty tag or one inside the reserved `im:`
    /// namespace.
    #[error("content type {0:?} is empty or inside the reserved namespace")]
    ReservedContentType(SmolStr),
    /// A media-only decode was asked to handle a non-media tag.
    #[error("content type {0:?} does not carry media")]
    NotMediaContent(SmolStr),
    /// A custom payload was asked for its wire string but isn't UTF-8.
    #[error("custom payload is not UTF-8: {0}")]
    PayloadEncoding(#[from] std::string::FromUtf8Error),
    /// A wire form failed to parse or serialize.
    #[error("wire form error: {0}")]
    Wire(#[from] serde_json::Error),
    /// A value-shape mismatch while crossing the boundary.
    #[error(transparent)]
    Value(#[from] ValueError),
}

/// Forward conversion: entity → scripting-boundary map.
///
/// Stateless and non-mutating; the output is freshly owned and carries the
/// fixed key set the entity's serde attributes declare. Absent optional
/// fields produce absent keys, never explicit nulls.
pub trait ToScript: Serialize {
    /// Convert to the dictionary handed to script code.
    fn to_script_map(&self) -> Result<Map, ConvertError>
    where
        Self: Sized,
    {
        Ok(to_value(self)?.into_map()?)
    }
}

/// Reverse conversion: scripting-boundary map → entity.
///
/// Implemented only for the entities script code originates. Missing
/// optional keys fall back to the entity's defaults; missing required keys
/// are an error, never a partially built entity. [`Message`] is the one
/// reverse-capable entity not here, since its content needs a registry; see
/// [`Message::from_script`].
pub trait FromScript: Sized {
    /// Rebuild from a dictionary received from script code.
    fn from_script_map(map: &Map) -> Result<Self, ConvertError>;
}

macro_rules! impl_to_script {
    ($($entity:ty),* $(,)?) => {$(
        impl ToScript for $entity {}
    )*};
}

macro_rules! impl_from_script {
    ($($entity:ty),* $(,)?) => {$(
        impl FromScript for $entity {
            fn from_script_map(map: &Map) -> Result<Self, ConvertError> {
                Ok(from_value::<Self>(&Value::Map(map.clone()))?)
            }
        }
    )*};
}

impl_to_script!(
    Conversation,
    ConversationInfo,
    ConversationMentionInfo,
    MentionMsg,
    SearchConversationsResult,
    Message,
    MessageMentionInfo,
    MessageReaction,
    MessageReactionItem,
    FavoriteMessage,
    PushData,
    UserInfo,
    GroupInfo,
    GroupMember,
    GroupMessageReadInfo,
    GroupMessageMemberReadDetail,
    CallMember,
    CallSession,
    CallInfo,
    Moment,
    MomentMedia,
    MomentComment,
    MomentReaction,
);

impl_from_script!(
    Conversation,
    SendMessageOptions,
    GetMessageOptions,
    MomentMedia,
    GetMomentOptions,
    GetMomentCommentOptions,
);
