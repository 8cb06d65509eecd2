use heddle_common::{Map, Value};
use heddle_model::content::{ImageContent, VoiceContent};
use heddle_model::conversation::{Conversation, ConversationType};
use heddle_model::message::{
    Message, MessageDirection, MessageMentionInfo, MessageState, MentionType,
};
use heddle_model::moment::{GetMomentCommentOptions, GetMomentOptions, MomentMedia};
use heddle_model::options::{GetMessageOptions, PullDirection, SendMessageOptions};
use heddle_model::user::UserInfo;
use heddle_model::{ContentRegistry, ConvertError, FromScript, MessageContent, ToScript};

fn registry() -> ContentRegistry {
    let mut registry = ContentRegistry::new();
    registry.register("custom.poll").unwrap();
    registry
}

#[test]
fn conversation_round_trips() {
    let conversation = Conversation::new(ConversationType::Group, "g-42");
    let map = conversation.to_script_map().unwrap();
    let back = Conversation::from_script_map(&map).unwrap();
    assert_eq!(conversation, back);
}

#[test]
fn conversation_reverse_requires_both_keys() {
    let mut map = Map::new();
    map.insert("conversationId", "g-42");
    let result = Conversation::from_script_map(&map);
    assert!(matches!(result, Err(ConvertError::Value(_))));
}

#[test]
fn bare_message_round_trips() {
    // every optional field absent
    let message = Message::compose(
        Conversation::new(ConversationType::Private, "u-2"),
        MessageContent::text("hello"),
    );
    let map = message.to_script_map().unwrap();
    let back = Message::from_script(&map, &registry()).unwrap();
    assert_eq!(message, back);
}

#[test]
fn full_message_round_trips() {
    let mut message = Message::compose(
        Conversation::new(ConversationType::Group, "g-1"),
        MessageContent::Image(ImageContent {
            url: Some("https://cdn.example/p.png".to_string()),
            width: 100,
            height: 80,
            ..Default::default()
        }),
    );
    message.message_id = "m-77".into();
    message.client_msg_no = 12;
    message.timestamp = 1700000000000;
    message.sender_user_id = "u-9".into();
    message.sender_user_name = Some("ada".to_string());
    message.direction = Some(MessageDirection::Receive);
    message.message_state = Some(MessageState::Sent);
    message.has_read = true;
    message.mention_info = Some(MessageMentionInfo {
        mention_type: MentionType::Someone,
        target_users: vec![UserInfo::bare("u-2")],
    });
    message.referred_message = Some(Box::new(Message::compose(
        message.conversation.clone(),
        MessageContent::text("earlier"),
    )));

    let map = message.to_script_map().unwrap();
    let back = Message::from_script(&map, &registry()).unwrap();
    assert_eq!(message, back);
}

#[test]
fn message_reverse_without_content_discriminator_errors() {
    let message = Message::compose(
        Conversation::new(ConversationType::Private, "u-2"),
        MessageContent::text("hello"),
    );
    let mut map = message.to_script_map().unwrap();
    let Some(Value::Map(mut content)) = map.remove("content") else {
        panic!("expected content map")
    };
    content.remove("contentType");
    map.insert("content", content);

    let err = Message::from_script(&map, &registry()).unwrap_err();
    assert!(matches!(err, ConvertError::MissingContentType));
}

#[test]
fn message_reverse_requires_conversation() {
    let message = Message::compose(
        Conversation::new(ConversationType::Private, "u-2"),
        MessageContent::text("hello"),
    );
    let mut map = message.to_script_map().unwrap();
    map.remove("conversation");
    let err = Message::from_script(&map, &registry()).unwrap_err();
    assert!(matches!(err, ConvertError::Value(_)));
}

#[test]
fn send_options_round_trip_and_defaults() {
    let options = SendMessageOptions::new()
        .referred_message_id("m-5")
        .build();
    let map = heddle_common::to_value(&options)
        .unwrap()
        .into_map()
        .unwrap();
    let back = SendMessageOptions::from_script_map(&map).unwrap();
    assert_eq!(options, back);

    // an empty map is a valid options map
    let defaults = SendMessageOptions::from_script_map(&Map::new()).unwrap();
    assert_eq!(defaults, SendMessageOptions::default());
}

#[test]
fn get_message_options_tolerate_missing_keys() {
    let mut map = Map::new();
    map.insert("count", 50);
    let options = GetMessageOptions::from_script_map(&map).unwrap();
    assert_eq!(options.count, Some(50));
    assert_eq!(options.start_time, None);
}

#[test]
fn moment_media_round_trips() {
    let mut map = Map::new();
    map.insert("type", "video");
    map.insert("url", "https://cdn.example/v.mp4");
    map.insert("snapshotUrl", "https://cdn.example/v.jpg");
    map.insert("width", 1280);
    map.insert("height", 720);
    map.insert("duration", 14);

    let media = MomentMedia::from_script_map(&map).unwrap();
    let back = media.to_script_map().unwrap();
    assert_eq!(map, back);
}

#[test]
fn moment_options_default_paging() {
    let options = GetMomentOptions::from_script_map(&Map::new()).unwrap();
    assert_eq!(options.count, 20);
    assert_eq!(options.timestamp, 0);
    assert_eq!(options.direction, PullDirection::Older);

    // comment paging additionally requires the moment id
    let result = GetMomentCommentOptions::from_script_map(&Map::new());
    assert!(matches!(result, Err(ConvertError::Value(_))));

    let mut map = Map::new();
    map.insert("momentId", "mo-3");
    let options = GetMomentCommentOptions::from_script_map(&map).unwrap();
    assert_eq!(options.moment_id, "mo-3");
    assert_eq!(options.count, 20);
}

#[test]
fn custom_poll_scenario() {
    // register, set payload, serialize, deserialize on a fresh instance
    let registry = registry();
    let content = MessageContent::Custom(heddle_model::CustomContent::new(
        "custom.poll",
        r#"{"q":"A?"}"#.as_bytes().to_vec(),
    ));

    let wire = content.to_wire_string().unwrap();
    let fresh = MessageContent::from_wire_string(&wire, "custom.poll", &registry).unwrap();
    let MessageContent::Custom(custom) = &fresh else {
        panic!("expected custom content")
    };
    assert_eq!(custom.content_type(), "custom.poll");
    assert_eq!(custom.payload().as_ref(), br#"{"q":"A?"}"#);
    assert_eq!(fresh, content);
}

#[test]
fn wire_round_trip_per_variant() {
    let registry = registry();
    let contents = vec![
        MessageContent::text("hi"),
        MessageContent::Voice(VoiceContent {
            url: Some("https://cdn.example/a.amr".to_string()),
            duration: 9,
            ..Default::default()
        }),
        MessageContent::Custom(heddle_model::CustomContent::new(
            "custom.poll",
            r#"{"q":"A?"}"#.as_bytes().to_vec(),
        )),
    ];
    for content in contents {
        let wire = content.to_wire_string().unwrap();
        let back =
            MessageContent::from_wire_string(&wire, content.content_type(), &registry).unwrap();
        assert_eq!(content, back);
    }
}

#[test]
fn unknown_discriminator_forward_keeps_raw_tag() {
    let registry = ContentRegistry::new();
    let content =
        MessageContent::from_wire_string(r#"{"kind":"sticker"}"#, "vendor.sticker", &registry)
            .unwrap();

    let map = content.to_map();
    assert_eq!(
        map.get("contentType").and_then(Value::as_str),
        Some("vendor.sticker")
    );
    assert_eq!(map.get("kind").and_then(Value::as_str), Some("sticker"));
}
