use crate::call::{CallFinishReason, CallMediaType};
use crate::conversation::Conversation;
use crate::convert::ConvertError;
use crate::registry::ContentRegistry;
use crate::user::UserInfo;
use bytes::Bytes;
use heddle_common::{Map, Value, from_value, to_value};
use serde::{Deserialize, Serialize, Serializer};
use smol_str::SmolStr;
use tracing::{debug, warn};

/// Content-type discriminator strings.
///
/// Everything under [`tags::RESERVED_PREFIX`] belongs to the SDK; custom
/// registrations must live outside it.
pub mod tags {
    /// Namespace reserved for SDK-defined content types.
    pub const RESERVED_PREFIX: &str = "im:";
    /// [`super::TextContent`]
    pub const TEXT: &str = "im:text";
    /// [`super::ImageContent`]
    pub const IMAGE: &str = "im:img";
    /// [`super::FileContent`]
    pub const FILE: &str = "im:file";
    /// [`super::VoiceContent`]
    pub const VOICE: &str = "im:voice";
    /// [`super::RecallInfoContent`]
    pub const RECALL_INFO: &str = "im:recallinfo";
    /// [`super::MergeContent`]
    pub const MERGE: &str = "im:merge";
    /// [`super::CallFinishNotifyContent`]
    pub const CALL_FINISH_NOTIFY: &str = "im:callfinishntf";
}

/// The map key carrying the content discriminator. Renaming it would break
/// every script depending on this bridge.
pub const CONTENT_TYPE_KEY: &str = "contentType";

/// Plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    /// The text.
    pub content: String,
}

/// A picture, possibly not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    /// Path on the sending device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    /// Thumbnail path on the sending device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_local_path: Option<String>,
    /// Remote URL once uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Remote thumbnail URL once uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Pixel width.
    #[serde(default)]
    pub width: i32,
    /// Pixel height.
    #[serde(default)]
    pub height: i32,
}

/// An arbitrary file attachment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContent {
    /// Path on the sending device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    /// Remote URL once uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// File name shown to the receiver.
    #[serde(default)]
    pub name: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: i64,
    /// MIME type.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub file_type: Option<String>,
}

/// A recorded voice clip.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceContent {
    /// Path on the sending device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    /// Remote URL once uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Clip length in seconds.
    #[serde(default)]
    pub duration: i64,
}

/// Tombstone left in place of a recalled message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecallInfoContent {}

/// One preview line inside a merged-forward container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergePreviewUnit {
    /// Preview text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_content: Option<String>,
    /// Who sent the previewed message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<UserInfo>,
}

/// A batch of messages forwarded as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeContent {
    /// Container title shown in the bubble.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Message that carries the merged container server-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_msg_id: Option<SmolStr>,
    /// The conversation the messages came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation: Option<Conversation>,
    /// The merged messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id_list: Option<Vec<SmolStr>>,
    /// Preview lines shown in the bubble.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_list: Option<Vec<MergePreviewUnit>>,
    /// Application-defined extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

/// Notice that a call ended, delivered into the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallFinishNotifyContent {
    /// Why the call ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<CallFinishReason>,
    /// Call length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Audio or video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<CallMediaType>,
}

/// Script-defined content: an opaque payload under a registered type tag.
///
/// The payload transits the native pipeline untouched; this layer never
/// validates that it is well-formed JSON. That contract belongs to the
/// script code on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomContent {
    content_type: SmolStr,
    payload: Bytes,
}

impl CustomContent {
    /// Wrap a payload under a type tag.
    pub fn new(content_type: impl Into<SmolStr>, payload: impl Into<Bytes>) -> Self {
        Self {
            content_type: content_type.into(),
            payload: payload.into(),
        }
    }

    /// The registered type tag.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// The held payload bytes.
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Replace the held payload.
    pub fn set_payload(&mut self, payload: impl Into<Bytes>) {
        self.payload = payload.into();
    }
}

/// Content of a type this layer doesn't model: the raw discriminator plus
/// whatever fields came with it, preserved so it can still cross the
/// boundary and go back out unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnknownContent {
    /// The raw discriminator.
    pub content_type: SmolStr,
    /// The fields as received, without the discriminator key.
    pub fields: Map,
}

/// The typed content of a message.
///
/// Closed over the SDK-defined variants plus two catch-alls:
/// [`MessageContent::Custom`] for script-registered types and
/// [`MessageContent::Unknown`] for anything else arriving off the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageContent {
    /// Plain text ([`tags::TEXT`]).
    Text(TextContent),
    /// Picture ([`tags::IMAGE`]).
    Image(ImageContent),
    /// File attachment ([`tags::FILE`]).
    File(FileContent),
    /// Voice clip ([`tags::VOICE`]).
    Voice(VoiceContent),
    /// Recall tombstone ([`tags::RECALL_INFO`]).
    RecallInfo(RecallInfoContent),
    /// Merged-forward container ([`tags::MERGE`]).
    Merge(MergeContent),
    /// Call-ended notice ([`tags::CALL_FINISH_NOTIFY`]).
    CallFinishNotify(CallFinishNotifyContent),
    /// Script-defined content under a registered tag.
    Custom(CustomContent),
    /// Unrecognized content passed through losslessly.
    Unknown(UnknownContent),
}

impl MessageContent {
    /// Plain text content.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(TextContent {
            content: content.into(),
        })
    }

    /// The discriminator string for this content.
    pub fn content_type(&self) -> &str {
        match self {
            Self::Text(_) => tags::TEXT,
            Self::Image(_) => tags::IMAGE,
            Self::File(_) => tags::FILE,
            Self::Voice(_) => tags::VOICE,
            Self::RecallInfo(_) => tags::RECALL_INFO,
            Self::Merge(_) => tags::MERGE,
            Self::CallFinishNotify(_) => tags::CALL_FINISH_NOTIFY,
            Self::Custom(custom) => custom.content_type(),
            Self::Unknown(unknown) => &unknown.content_type,
        }
    }

    /// Whether this content carries uploadable media.
    pub fn is_media(&self) -> bool {
        matches!(self, Self::Image(_) | Self::File(_) | Self::Voice(_))
    }

    /// One-line preview for conversation lists.
    pub fn digest(&self) -> String {
        match self {
            Self::Text(text) => text.content.clone(),
            Self::Image(_) => "[Image]".to_string(),
            Self::File(_) => "[File]".to_string(),
            Self::Voice(_) => "[Voice]".to_string(),
            Self::RecallInfo(_) => "[Recalled]".to_string(),
            Self::Merge(merge) => merge
                .title
                .clone()
                .unwrap_or_else(|| "[Chat History]".to_string()),
            Self::CallFinishNotify(_) => "[Call]".to_string(),
            Self::Custom(_) => "[Custom]".to_string(),
            Self::Unknown(_) => "[Unknown]".to_string(),
        }
    }

    /// The script-side dictionary view, always carrying the discriminator
    /// under [`CONTENT_TYPE_KEY`].
    ///
    /// Total by design: a custom payload that isn't a JSON object degrades
    /// to a tag-only map with a warning instead of failing the whole
    /// message.
    pub fn to_map(&self) -> Map {
        let mut map = match self {
            Self::Text(body) => body_map(body),
            Self::Image(body) => body_map(body),
            Self::File(body) => body_map(body),
            Self::Voice(body) => body_map(body),
            Self::RecallInfo(body) => body_map(body),
            Self::Merge(body) => body_map(body),
            Self::CallFinishNotify(body) => body_map(body),
            Self::Custom(custom) => custom_fields(custom),
            Self::Unknown(unknown) => unknown.fields.clone(),
        };
        map.insert(CONTENT_TYPE_KEY, self.content_type());
        map
    }

    /// Rebuild content from a script-side dictionary.
    ///
    /// The discriminator is required; a tag that is neither SDK-defined nor
    /// registered is an error rather than a guess.
    pub fn from_map(map: &Map, registry: &ContentRegistry) -> Result<Self, ConvertError> {
        let Some(tag) = map.get(CONTENT_TYPE_KEY).and_then(Value::as_str) else {
            return Err(ConvertError::MissingContentType);
        };
        if let Some(parsed) = Self::typed_from_map(tag, map) {
            return parsed;
        }
        if registry.is_registered(tag) {
            let payload = serde_json::to_vec(map)?;
            return Ok(Self::Custom(CustomContent::new(
                SmolStr::from(tag),
                payload,
            )));
        }
        Err(ConvertError::UnknownContentType(SmolStr::from(tag)))
    }

    /// The native wire form of this content, without the discriminator (the
    /// pipeline carries the tag next to the payload).
    pub fn to_wire_string(&self) -> Result<String, ConvertError> {
        match self {
            Self::Text(body) => Ok(serde_json::to_string(body)?),
            Self::Image(body) => Ok(serde_json::to_string(body)?),
            Self::File(body) => Ok(serde_json::to_string(body)?),
            Self::Voice(body) => Ok(serde_json::to_string(body)?),
            Self::RecallInfo(body) => Ok(serde_json::to_string(body)?),
            Self::Merge(body) => Ok(serde_json::to_string(body)?),
            Self::CallFinishNotify(body) => Ok(serde_json::to_string(body)?),
            Self::Custom(custom) => Ok(String::from_utf8(custom.payload.to_vec())?),
            Self::Unknown(unknown) => Ok(serde_json::to_string(&unknown.fields)?),
        }
    }

    /// Decode content off the native wire given the tag the pipeline
    /// delivered next to it.
    ///
    /// This is the receive path, so it never rejects a tag: a registered
    /// one wraps the payload untouched, and anything else passes through as
    /// [`MessageContent::Unknown`] so the caller still gets a value.
    pub fn from_wire_string(
        wire: &str,
        content_type: &str,
        registry: &ContentRegistry,
    ) -> Result<Self, ConvertError> {
        if let Some(parsed) = Self::typed_from_wire(content_type, wire) {
            return parsed;
        }
        if registry.is_registered(content_type) {
            return Ok(Self::Custom(CustomContent::new(
                SmolStr::from(content_type),
                wire.as_bytes().to_vec(),
            )));
        }
        debug!(content_type, "unrecognized content type off the wire");
        let fields = match serde_json::from_str::<serde_json::Value>(wire) {
            Ok(json @ serde_json::Value::Object(_)) => match Value::from(json) {
                Value::Map(map) => map,
                _ => Map::new(),
            },
            _ => {
                warn!(
                    content_type,
                    "unrecognized content payload is not a JSON object; fields dropped"
                );
                Map::new()
            }
        };
        Ok(Self::Unknown(UnknownContent {
            content_type: SmolStr::from(content_type),
            fields,
        }))
    }

    /// Like [`MessageContent::from_wire_string`], but accepts only the
    /// media-bearing tags.
    pub fn media_from_wire_string(wire: &str, content_type: &str) -> Result<Self, ConvertError> {
        let parsed = match content_type {
            tags::IMAGE => serde_json::from_str(wire).map(Self::Image),
            tags::FILE => serde_json::from_str(wire).map(Self::File),
            tags::VOICE => serde_json::from_str(wire).map(Self::Voice),
            other => return Err(ConvertError::NotMediaContent(SmolStr::from(other))),
        };
        Ok(parsed?)
    }

    fn typed_from_map(tag: &str, map: &Map) -> Option<Result<Self, ConvertError>> {
        let value = Value::Map(map.clone());
        let parsed = match tag {
            tags::TEXT => from_value(&value).map(Self::Text),
            tags::IMAGE => from_value(&value).map(Self::Image),
            tags::FILE => from_value(&value).map(Self::File),
            tags::VOICE => from_value(&value).map(Self::Voice),
            tags::RECALL_INFO => from_value(&value).map(Self::RecallInfo),
            tags::MERGE => from_value(&value).map(Self::Merge),
            tags::CALL_FINISH_NOTIFY => from_value(&value).map(Self::CallFinishNotify),
            _ => return None,
        };
        Some(parsed.map_err(ConvertError::from))
    }

    fn typed_from_wire(tag: &str, wire: &str) -> Option<Result<Self, ConvertError>> {
        let parsed = match tag {
            tags::TEXT => serde_json::from_str(wire).map(Self::Text),
            tags::IMAGE => serde_json::from_str(wire).map(Self::Image),
            tags::FILE => serde_json::from_str(wire).map(Self::File),
            tags::VOICE => serde_json::from_str(wire).map(Self::Voice),
            tags::RECALL_INFO => serde_json::from_str(wire).map(Self::RecallInfo),
            tags::MERGE => serde_json::from_str(wire).map(Self::Merge),
            tags::CALL_FINISH_NOTIFY => serde_json::from_str(wire).map(Self::CallFinishNotify),
            _ => return None,
        };
        Some(parsed.map_err(ConvertError::from))
    }
}

impl Serialize for MessageContent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().serialize(serializer)
    }
}

fn body_map<T: Serialize>(body: &T) -> Map {
    match to_value(body).and_then(Value::into_map) {
        Ok(map) => map,
        Err(err) => {
            warn!(error = %err, "content body did not serialize to a map");
            Map::new()
        }
    }
}

fn custom_fields(custom: &CustomContent) -> Map {
    match serde_json::from_slice::<serde_json::Value>(custom.payload()) {
        Ok(json @ serde_json::Value::Object(_)) => match Value::from(json) {
            Value::Map(map) => map,
            _ => Map::new(),
        },
        Ok(_) => {
            warn!(
                content_type = custom.content_type(),
                "custom payload is not a JSON object"
            );
            Map::new()
        }
        Err(err) => {
            warn!(
                content_type = custom.content_type(),
                error = %err,
                "custom payload is not valid JSON"
            );
            Map::new()
        }
    }
}
