use mbdf_portal::api::helpers::{err_response, ok_json, with_request_id};
use mbdf_portal::api::parsing::{
    access_token, decode_room_id, get_header_value, match_forum_topics, request_method,
    request_path,
};
use serde_json::json;

#[test]
fn test_get_header_value_is_case_insensitive() {
    let headers = json!({ "x-request-id": "abc", "Content-Type": "application/json" });

    assert_eq!(get_header_value(&headers, "X-Request-Id"), Some("abc"));
    assert_eq!(get_header_value(&headers, "content-type"), Some("application/json"));
    assert_eq!(get_header_value(&headers, "Cookie"), None);
}

#[test]
fn test_access_token_prefers_bearer_header() {
    let headers = json!({
        "Authorization": "Bearer header-token",
        "Cookie": "sb-access-token=cookie-token"
    });

    assert_eq!(access_token(&headers).as_deref(), Some("header-token"));
}

#[test]
fn test_access_token_rejects_other_schemes() {
    assert_eq!(access_token(&json!({ "Authorization": "Basic dXNlcjpwYXNz" })), None);
    assert_eq!(access_token(&json!({ "Authorization": "Bearer   " })), None);
    assert_eq!(access_token(&json!({ "Cookie": "sb-access-token=" })), None);
    assert_eq!(access_token(&json!({})), None);
}

#[test]
fn test_match_forum_topics() {
    assert_eq!(match_forum_topics("/api/rooms/r1/forum/topics"), Some("r1"));
    assert_eq!(match_forum_topics("/api/rooms/r1/forum/topics/"), Some("r1"));
    assert_eq!(match_forum_topics("/api/rooms//forum/topics"), None);
    assert_eq!(match_forum_topics("/api/rooms/r1/forum"), None);
    assert_eq!(match_forum_topics("/prefix/api/rooms/r1/forum/topics"), None);
}

#[test]
fn test_decode_room_id() {
    assert_eq!(decode_room_id("abc-123").unwrap(), "abc-123");
    assert_eq!(decode_room_id("%C3%A7ay").unwrap(), "çay");
    assert!(decode_room_id("%20").is_err());
    assert!(decode_room_id("x%2Fy").is_err());
}

#[test]
fn test_request_path_and_method_fallbacks() {
    let http_api = json!({ "rawPath": "/a", "requestContext": { "http": { "method": "GET" } } });
    let rest_api = json!({ "path": "/b", "httpMethod": "DELETE" });

    assert_eq!(request_path(&http_api), Some("/a"));
    assert_eq!(request_method(&http_api), Some("GET"));
    assert_eq!(request_path(&rest_api), Some("/b"));
    assert_eq!(request_method(&rest_api), Some("DELETE"));
}

#[test]
fn test_response_builders() {
    let ok = ok_json(&json!({ "topics": [] }));
    assert_eq!(ok["statusCode"], 200);
    assert_eq!(ok["body"], "{\"topics\":[]}");

    let err = with_request_id(err_response(404, "Not found"), "req-1");
    assert_eq!(err["statusCode"], 404);
    assert_eq!(err["body"], "{\"error\":\"Not found\"}");
    assert_eq!(err["headers"]["X-Request-Id"], "req-1");
    assert_eq!(err["headers"]["Content-Type"], "application/json");
}
