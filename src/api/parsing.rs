use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::PortalError;

const SESSION_COOKIE: &str = "sb-access-token";

static FORUM_TOPICS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/api/rooms/([^/]+)/forum/topics/?$").expect("static regex compile")
});

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Request path from either payload format the gateway emits.
pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Extracts the caller's access token: bearer header first, then the
/// session cookie.
pub fn access_token(headers: &Value) -> Option<String> {
    if let Some(auth) = get_header_value(headers, "Authorization") {
        let mut parts = auth.trim().splitn(2, ' ');
        if let (Some(scheme), Some(token)) = (parts.next(), parts.next())
            && scheme.eq_ignore_ascii_case("bearer")
            && !token.trim().is_empty()
        {
            return Some(token.trim().to_string());
        }
    }

    get_header_value(headers, "Cookie").and_then(|cookies| {
        cookies.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
        })
    })
}

/// Returns the raw (still percent-encoded) room segment if `path` is the
/// forum topics resource.
pub fn match_forum_topics(path: &str) -> Option<&str> {
    FORUM_TOPICS_RE
        .captures(path)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Percent-decodes a room id path segment.
///
/// # Errors
///
/// Returns `PortalError::Parse` for invalid encodings, empty ids and ids
/// that decode to something containing `/`.
pub fn decode_room_id(segment: &str) -> Result<String, PortalError> {
    let decoded = urlencoding::decode(segment)
        .map_err(|e| PortalError::Parse(format!("room id: {e}")))?;
    let decoded = decoded.trim();
    if decoded.is_empty() || decoded.contains('/') {
        return Err(PortalError::Parse(format!("room id: {segment:?}")));
    }
    Ok(decoded.to_string())
}
