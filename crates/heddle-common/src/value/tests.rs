use super::*;
use smol_str::ToSmolStr;

#[test]
fn serialize_deserialize_null() {
    let value = Value::Null;

    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, "null");
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, parsed);
    assert!(parsed.is_null());
}

#[test]
fn serialize_deserialize_boolean() {
    let value = Value::Boolean(true);

    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, "true");
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, parsed);
}

#[test]
fn serialize_deserialize_integer() {
    let value = Value::Integer(42);

    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, "42");
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, parsed);
}

#[test]
fn doubles_stay_doubles() {
    let value = Value::Double(1.5);

    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, "1.5");
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, parsed);
}

#[test]
fn integers_do_not_become_doubles() {
    // The bridge distinguishes putInt from putDouble; an i64-representable
    // number must parse back as Integer.
    let parsed: Value = serde_json::from_str("7").unwrap();
    assert!(matches!(parsed, Value::Integer(7)));

    let parsed: Value = serde_json::from_str("7.0").unwrap();
    assert!(matches!(parsed, Value::Double(_)));
}

#[test]
fn serialize_deserialize_string() {
    let value = Value::String("hello world".into());

    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#""hello world""#);
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, parsed);
}

#[test]
fn serialize_deserialize_array() {
    let value = Value::Array(Array(vec![
        Value::Null,
        Value::Boolean(true),
        Value::Integer(42),
        Value::String("test".into()),
    ]));

    let json = serde_json::to_string(&value).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, parsed);

    if let Value::Array(Array(items)) = parsed {
        assert_eq!(items.len(), 4);
        assert!(matches!(items[0], Value::Null));
        assert!(matches!(items[1], Value::Boolean(true)));
        assert!(matches!(items[2], Value::Integer(42)));
        assert_eq!(items[3].as_str(), Some("test"));
    } else {
        panic!("expected array");
    }
}

#[test]
fn serialize_deserialize_map() {
    let mut map = Map::new();
    map.insert("name", "alice");
    map.insert("age", 30);
    map.insert("active", true);
    let value = Value::Map(map);

    let json = serde_json::to_string(&value).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, parsed);
}

#[test]
fn json_interop_round_trips() {
    let json: serde_json::Value = serde_json::json!({
        "user": {
            "name": "alice",
            "score": 12,
            "ratio": 0.5,
            "tags": ["a", "b"],
            "deleted": null,
        }
    });

    let value = Value::from(json.clone());
    let back = serde_json::Value::from(value.clone());
    assert_eq!(json, back);

    let Value::Map(top) = value else {
        panic!("expected map")
    };
    let Some(Value::Map(user)) = top.get("user") else {
        panic!("expected user map")
    };
    assert!(matches!(user.get("score"), Some(Value::Integer(12))));
    assert!(matches!(user.get("ratio"), Some(Value::Double(_))));
    assert!(matches!(user.get("deleted"), Some(Value::Null)));
}

#[test]
fn non_finite_doubles_degrade_to_json_null() {
    let back = serde_json::Value::from(Value::Double(f64::NAN));
    assert!(back.is_null());
}

#[test]
fn to_value_from_struct() {
    use serde::Serialize;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Probe {
        user_id: String,
        unread_count: i64,
        is_top: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        draft: Option<String>,
    }

    let probe = Probe {
        user_id: "u1".to_string(),
        unread_count: 3,
        is_top: false,
        draft: None,
    };

    let value = to_value(&probe).unwrap();
    let Value::Map(map) = value else {
        panic!("expected map")
    };
    assert_eq!(map.get("userId").and_then(Value::as_str), Some("u1"));
    assert_eq!(map.get("unreadCount").and_then(Value::as_i64), Some(3));
    assert_eq!(map.get("isTop").and_then(Value::as_bool), Some(false));
    assert!(!map.contains_key("draft"));
}

#[test]
fn from_value_missing_optional_defaults() {
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct WithOption {
        required: String,
        optional: Option<i64>,
    }

    let mut map = Map::new();
    map.insert("required", "value");
    let value = Value::Map(map);

    let result: WithOption = from_value(&value).unwrap();
    assert_eq!(result.required, "value");
    assert_eq!(result.optional, None);
}

#[test]
fn from_value_missing_required_errors() {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Strict {
        #[allow(dead_code)]
        required: String,
    }

    let value = Value::Map(Map::new());
    let result: Result<Strict, _> = from_value(&value);
    assert!(matches!(result, Err(ValueError::Serde(_))));
}

#[test]
fn try_from_reports_wrong_kind() {
    let err = i64::try_from(Value::String("nope".into())).unwrap_err();
    match err {
        ValueError::WrongType { expected, found } => {
            assert_eq!(expected, ValueKind::Integer);
            assert_eq!(found, ValueKind::String);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let none: Option<bool> = Option::<bool>::try_from(Value::Null).unwrap();
    assert_eq!(none, None);
}

#[test]
fn nested_map_access() {
    let mut inner = Map::new();
    inner.insert("msgId", "m-1");
    inner.insert("msgTime", 1700000000000i64);

    let mut outer = Map::new();
    outer.insert("mention", inner);

    let map_key = "mention".to_smolstr();
    assert!(outer.0.contains_key(&map_key));
    let Some(Value::Map(mention)) = outer.get("mention") else {
        panic!("expected mention map")
    };
    assert_eq!(mention.get("msgId").and_then(Value::as_str), Some("m-1"));
    assert_eq!(
        mention.get("msgTime").and_then(Value::as_i64),
        Some(1700000000000)
    );
}
