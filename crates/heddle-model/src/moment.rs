use crate::options::PullDirection;
use crate::user::UserInfo;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Whether a [`MomentMedia`] is a picture or a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MomentMediaType {
    /// Still image.
    Image,
    /// Video clip.
    Video,
}

/// One media attachment on a moment.
///
/// Script code originates these when publishing, so the reverse conversion
/// is supported; `type` and `url` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentMedia {
    /// Picture or clip.
    #[serde(rename = "type")]
    pub media_type: MomentMediaType,
    /// Where the media is hosted.
    pub url: String,
    /// Thumbnail URL, for clips and large pictures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_url: Option<String>,
    /// Pixel width.
    #[serde(default)]
    pub width: i32,
    /// Pixel height.
    #[serde(default)]
    pub height: i32,
    /// Clip length in seconds, clips only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

/// A comment under a moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentComment {
    /// Comment identifier.
    pub comment_id: SmolStr,
    /// The moment commented on.
    pub moment_id: SmolStr,
    /// Parent comment when this is a reply to a comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<SmolStr>,
    /// Comment text.
    pub content: String,
    /// Who commented.
    pub user_info: UserInfo,
    /// Author of the parent comment, for replies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_user_info: Option<UserInfo>,
    /// When, epoch milliseconds.
    pub create_time: i64,
}

/// All reactions of one kind on a moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentReaction {
    /// Application-defined reaction key.
    pub key: SmolStr,
    /// Everyone who reacted with it.
    pub user_list: Vec<UserInfo>,
}

/// A timeline post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Moment {
    /// Post identifier.
    pub moment_id: SmolStr,
    /// Post text.
    pub content: String,
    /// Attached media, in display order.
    pub media_list: Vec<MomentMedia>,
    /// The author.
    pub user_info: UserInfo,
    /// Comments, oldest first.
    pub comment_list: Vec<MomentComment>,
    /// Reactions grouped by key.
    pub reaction_list: Vec<MomentReaction>,
    /// When the post was published, epoch milliseconds.
    pub create_time: i64,
}

/// Paging options for fetching the moments timeline.
///
/// Originated by script code; absent keys fall back to the documented
/// defaults (first page of [`default_page_count`] posts, older-first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(start_fn = new)]
pub struct GetMomentOptions {
    /// Page size.
    #[serde(default = "default_page_count")]
    #[builder(default = default_page_count())]
    pub count: i32,
    /// Anchor timestamp from the previous page; 0 fetches the newest page.
    #[serde(default)]
    #[builder(default)]
    pub timestamp: i64,
    /// Paging direction relative to the anchor.
    #[serde(default)]
    #[builder(default)]
    pub direction: PullDirection,
}

/// Paging options for fetching a moment's comments.
///
/// `momentId` is required; paging keys default like [`GetMomentOptions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(start_fn = new)]
pub struct GetMomentCommentOptions {
    /// The moment whose comments to page through.
    #[builder(into)]
    pub moment_id: SmolStr,
    /// Page size.
    #[serde(default = "default_page_count")]
    #[builder(default = default_page_count())]
    pub count: i32,
    /// Anchor timestamp from the previous page; 0 fetches the newest page.
    #[serde(default)]
    #[builder(default)]
    pub timestamp: i64,
    /// Paging direction relative to the anchor.
    #[serde(default)]
    #[builder(default)]
    pub direction: PullDirection,
}

/// Default page size for moment and comment paging.
pub fn default_page_count() -> i32 {
    20
}
