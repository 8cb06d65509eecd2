use crate::user::UserInfo;
use serde::Serialize;
use serde_repr::{Deserialize_repr, Serialize_repr};
use smol_str::SmolStr;

/// Lifecycle state of a call, per participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum CallStatus {
    /// Not in a call.
    #[default]
    Idle = 0,
    /// Ringing, local side was invited.
    Incoming = 1,
    /// Ringing, local side invited.
    Outgoing = 2,
    /// Media channel being established.
    Connecting = 3,
    /// Media flowing.
    Connected = 4,
    /// Joined an ongoing multi-party call.
    Join = 5,
}

/// Audio-only or video call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum CallMediaType {
    /// Audio only.
    #[default]
    Voice = 0,
    /// Audio and video.
    Video = 1,
}

/// Why a call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum CallFinishReason {
    /// Not recorded.
    #[default]
    Unknown = 0,
    /// Local side hung up.
    Hangup = 1,
    /// Local side declined.
    Decline = 2,
    /// Local side was busy.
    Busy = 3,
    /// Local side never answered.
    NoResponse = 4,
    /// Local side cancelled before connect.
    Cancel = 5,
    /// Remote side hung up.
    OtherSideHangup = 6,
    /// Remote side declined.
    OtherSideDecline = 7,
    /// Remote side was busy.
    OtherSideBusy = 8,
    /// Remote side never answered.
    OtherSideNoResponse = 9,
    /// Remote side cancelled before connect.
    OtherSideCancel = 10,
    /// The room was torn down.
    RoomDestroy = 11,
    /// Network failure.
    NetworkError = 12,
    /// Answered on another device of the local user.
    AcceptOnOtherClient = 13,
    /// Hung up on another device of the local user.
    HangupOnOtherClient = 14,
}

/// One participant's view of a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallMember {
    /// The participant.
    pub user_info: UserInfo,
    /// Their call state.
    pub call_status: CallStatus,
    /// When they were invited, epoch milliseconds.
    pub start_time: i64,
    /// When their media connected, epoch milliseconds; 0 if never.
    pub connect_time: i64,
    /// When they left, epoch milliseconds; 0 while present.
    pub finish_time: i64,
    /// Who invited them, absent for the call owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inviter: Option<UserInfo>,
}

/// A live call as the SDK tracks it.
///
/// One-to-one and multi-party calls share this shape; `isMultiCall` is the
/// variant discriminator and always crosses the boundary so script code can
/// branch on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSession {
    /// Room identifier.
    pub call_id: SmolStr,
    /// Discriminator: multi-party when true.
    pub is_multi_call: bool,
    /// Audio or video.
    pub media_type: CallMediaType,
    /// The local participant's call state.
    pub call_status: CallStatus,
    /// When the call was placed, epoch milliseconds.
    pub start_time: i64,
    /// When the local side connected, epoch milliseconds; 0 if never.
    pub connect_time: i64,
    /// When the call ended, epoch milliseconds; 0 while live.
    pub finish_time: i64,
    /// User id of the call owner.
    pub owner: SmolStr,
    /// User id of whoever invited the local side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inviter: Option<SmolStr>,
    /// Why the call ended, meaningful once `finishTime` is set.
    pub finish_reason: CallFinishReason,
    /// Everyone else in the call.
    pub members: Vec<CallMember>,
    /// The local participant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_member: Option<CallMember>,
    /// Application-defined extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

/// Summary of a finished or ongoing call, as listed in call history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallInfo {
    /// Room identifier.
    pub call_id: SmolStr,
    /// Multi-party when true.
    pub is_multi_call: bool,
    /// Audio or video.
    pub media_type: CallMediaType,
    /// The call owner.
    pub owner: UserInfo,
    /// All participants.
    pub members: Vec<CallMember>,
    /// Application-defined extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}
