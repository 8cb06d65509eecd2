//! Entity model and scripting-boundary converters for the heddle IM bridge
//!
//! Every entity the native SDK hands across the scripting boundary lives
//! here as a plain serde-annotated struct; the serde attributes are the key
//! contract script code depends on. Conversion happens through the
//! [`convert::ToScript`] / [`convert::FromScript`] traits, which cross the
//! boundary in one step via [`heddle_common::value`]. Message content is a
//! closed set of typed variants plus a registered-custom carrier and an
//! unknown fallback; see [`content::MessageContent`].
//!
//! Nothing in this crate does I/O, blocks, or retains references into its
//! inputs: every conversion returns a freshly owned value.

#![warn(missing_docs)]

pub use content::{CustomContent, MessageContent, UnknownContent};
pub use convert::{ConvertError, FromScript, ToScript};
pub use registry::ContentRegistry;

/// Call sessions, members and related enums.
pub mod call;
/// The polymorphic message content union and its wire codec.
pub mod content;
/// Conversations, conversation info and mention digests.
pub mod conversation;
/// Boundary-crossing traits and the conversion error type.
pub mod convert;
/// Groups, group members and read bookkeeping.
pub mod group;
/// Messages, reactions, mentions and favorites.
pub mod message;
/// Moments (timeline posts), their media and comments.
pub mod moment;
/// Options structs originated by script code.
pub mod options;
/// The custom content-type registry.
pub mod registry;
/// User profiles.
pub mod user;
