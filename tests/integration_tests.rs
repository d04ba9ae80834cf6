//! Integration tests for the public API
//!
//! Tests the full flow: store document → cursor → token → cursor on the next request

use bson::oid::ObjectId;
use bson::{doc, Bson, DateTime};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use solidafy_cursor::config::load_config_from_str;
use solidafy_cursor::{
    build_cursor, decode_cursor, encode_cursor, sanitize_limit, Cursor, Error, SortSpec,
};

const TOKEN: &str = "eyJjcmVhdGVkQXQiOnsiJGRhdGUiOiIyMDIwLTAzLTI3VDEyOjAwOjAwWiJ9LCJfaWQiOnsiJG9pZCI6IjVlN2UwNGFiMmEyYzFjYTk2MWI2MDM5ZiJ9fQ";

// ============================================================================
// Token Scenario
// ============================================================================

#[test]
fn test_known_cursor_encodes_to_known_token() {
    let created_at = Utc.with_ymd_and_hms(2020, 3, 27, 12, 0, 0).unwrap();
    let cursor = Cursor::from_document(doc! {
        "createdAt": DateTime::from_chrono(created_at),
        "_id": ObjectId::parse_str("5e7e04ab2a2c1ca961b6039f").unwrap(),
    });

    assert_eq!(encode_cursor(&cursor), TOKEN);
    assert_eq!(decode_cursor(TOKEN).unwrap(), cursor);
}

#[test]
fn test_decoded_values_are_typed() {
    let cursor = decode_cursor(TOKEN).unwrap();

    let created_at = cursor.get("createdAt").and_then(Bson::as_datetime).unwrap();
    assert_eq!(
        created_at.to_chrono(),
        Utc.with_ymd_and_hms(2020, 3, 27, 12, 0, 0).unwrap()
    );

    let id = cursor.get("_id").and_then(Bson::as_object_id).unwrap();
    assert_eq!(id.to_hex(), "5e7e04ab2a2c1ca961b6039f");
}

// ============================================================================
// Paging Flow
// ============================================================================

#[test]
fn test_page_to_next_request() {
    let config = load_config_from_str(
        "limits:\n  max: 50\ndefault_sort:\n  createdAt: -1\n  _id: -1\n",
    )
    .unwrap();

    let limit = config.limits.apply(Some(500));
    assert_eq!(limit, 50);

    let sort = config.sort_or_default();
    let last_on_page = doc! {
        "_id": ObjectId::parse_str("5e7e04ab2a2c1ca961b6039f").unwrap(),
        "title": "Hello",
        "body": "a long body that should not end up in the cursor",
        "createdAt": DateTime::from_millis(1_585_310_400_000),
    };

    let token = build_cursor(&last_on_page, &sort).to_string();
    let cursor: Cursor = token.parse().unwrap();

    assert_eq!(cursor.len(), sort.len());
    assert_eq!(cursor.keys().collect::<Vec<_>>(), sort.keys().collect::<Vec<_>>());
    assert_eq!(
        cursor.into_document(),
        doc! {
            "createdAt": DateTime::from_millis(1_585_310_400_000),
            "_id": ObjectId::parse_str("5e7e04ab2a2c1ca961b6039f").unwrap(),
        }
    );
}

#[test]
fn test_nested_sort_key_round_trip() {
    let document = doc! { "info": { "color": "blue", "size": 3 }, "_id": 1 };
    let sort: SortSpec = "-info.color,_id".parse().unwrap();

    let cursor = build_cursor(&document, &sort);
    assert_eq!(cursor.as_document(), &doc! { "info.color": "blue", "_id": 1 });
    assert_eq!(decode_cursor(&cursor.encode()).unwrap(), cursor);
}

#[test]
fn test_tampered_token_is_client_error() {
    let mut tampered = TOKEN.to_string();
    tampered.insert(10, '*');

    let err = decode_cursor(&tampered).unwrap_err();
    assert!(matches!(err, Error::InvalidCursor { .. }));
    assert!(err.is_client_error());
}

#[test]
fn test_limit_defaults() {
    assert_eq!(sanitize_limit(None), 20);
    assert_eq!(sanitize_limit(Some(0)), 1);
    assert_eq!(sanitize_limit(Some(-10)), 1);
    assert_eq!(sanitize_limit(Some(10)), 10);
}
