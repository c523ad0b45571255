//! Gateway response builders.

use serde::Serialize;
use serde_json::{Value, json};

/// Returns a 200 OK response with `body` serialized as JSON.
///
/// Falls back to a 500 if `body` cannot be serialized.
#[must_use]
pub fn ok_json<T: Serialize>(body: &T) -> Value {
    match serde_json::to_string(body) {
        Ok(body) => json!({
            "statusCode": 200,
            "headers": { "Content-Type": "application/json" },
            "body": body
        }),
        Err(_) => err_response(500, "Internal server error"),
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "error": message }).to_string()
    })
}

/// Adds an `X-Request-Id` header to a gateway response.
#[must_use]
pub fn with_request_id(mut response: Value, request_id: &str) -> Value {
    if let Some(obj) = response.as_object_mut() {
        let headers = obj.entry("headers").or_insert_with(|| json!({}));
        if let Some(headers) = headers.as_object_mut() {
            headers.insert("X-Request-Id".to_string(), json!(request_id));
        }
    }
    response
}
