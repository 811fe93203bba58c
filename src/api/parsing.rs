//! Event field access and request body validation.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::core::config::JsonPolicy;
use crate::core::models::{ChatRequest, Language};
use crate::errors::HandlerError;

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

/// HTTP method of a REST (`httpMethod`) or HTTP API v2
/// (`requestContext.http.method`) event. Defaults to `POST`.
#[must_use]
pub fn event_method(event: &Value) -> &str {
    v_str(event, &["httpMethod"])
        .or_else(|| v_str(event, &["requestContext", "http", "method"]))
        .unwrap_or("POST")
}

/// Raw request body; absent or `null` bodies come back empty.
///
/// Base64-encoded bodies are decoded; undecodable bytes are replaced rather
/// than rejected.
#[must_use]
pub fn extract_body(event: &Value) -> String {
    let Some(raw) = v_str(event, &["body"]) else {
        return String::new();
    };

    let encoded = event
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !encoded {
        return raw.to_string();
    }

    match STANDARD.decode(raw.trim()) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::warn!("Body flagged as base64 but failed to decode: {}", e);
            raw.to_string()
        }
    }
}

/// Validates a raw body into a [`ChatRequest`].
///
/// # Errors
///
/// `InvalidJson` for malformed bodies under [`JsonPolicy::Strict`],
/// `BodyParse` carrying the parser text under [`JsonPolicy::Lenient`], and
/// `MissingMessage` when `message` is absent, not a string, or empty.
pub fn parse_chat_request(raw_body: &str, policy: JsonPolicy) -> Result<ChatRequest, HandlerError> {
    let raw = if raw_body.trim().is_empty() {
        "{}"
    } else {
        raw_body
    };

    let parsed: Value = serde_json::from_str(raw).map_err(|e| malformed(policy, e.to_string()))?;

    let Some(obj) = parsed.as_object() else {
        return Err(malformed(policy, "request body must be a JSON object".to_string()));
    };

    let message = obj
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .ok_or(HandlerError::MissingMessage)?;

    Ok(ChatRequest {
        message: message.to_string(),
        language: Language::from_field(obj.get("language")),
    })
}

fn malformed(policy: JsonPolicy, detail: String) -> HandlerError {
    match policy {
        JsonPolicy::Strict => HandlerError::InvalidJson(detail),
        JsonPolicy::Lenient => HandlerError::BodyParse(detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_method_sources() {
        assert_eq!(event_method(&json!({ "httpMethod": "GET" })), "GET");
        assert_eq!(
            event_method(&json!({ "requestContext": { "http": { "method": "OPTIONS" } } })),
            "OPTIONS"
        );
        assert_eq!(event_method(&json!({})), "POST");
    }

    #[test]
    fn test_extract_body_variants() {
        assert_eq!(extract_body(&json!({})), "");
        assert_eq!(extract_body(&json!({ "body": null })), "");
        assert_eq!(extract_body(&json!({ "body": "{\"a\":1}" })), "{\"a\":1}");
        assert_eq!(
            extract_body(&json!({ "body": "eyJtZXNzYWdlIjoiaGkifQ==", "isBase64Encoded": true })),
            "{\"message\":\"hi\"}"
        );
    }

    #[test]
    fn test_blank_body_is_missing_message() {
        for body in ["", "   ", "\n"] {
            let err = parse_chat_request(body, JsonPolicy::Strict).unwrap_err();
            assert!(matches!(err, HandlerError::MissingMessage));
        }
    }

    #[test]
    fn test_empty_or_non_string_message() {
        for body in [r#"{"message": ""}"#, r#"{"message": 42}"#, r#"{"language": "en"}"#] {
            let err = parse_chat_request(body, JsonPolicy::Strict).unwrap_err();
            assert!(matches!(err, HandlerError::MissingMessage), "body: {body}");
        }
    }

    #[test]
    fn test_language_defaults_and_mapping() {
        let req = parse_chat_request(r#"{"message": "hi"}"#, JsonPolicy::Strict).unwrap();
        assert_eq!(req.language, Language::Ru);

        let req = parse_chat_request(r#"{"message": "hi", "language": "en"}"#, JsonPolicy::Strict)
            .unwrap();
        assert_eq!(req.language, Language::En);

        let req = parse_chat_request(r#"{"message": "hi", "language": "de"}"#, JsonPolicy::Strict)
            .unwrap();
        assert_eq!(req.language, Language::En);

        let req = parse_chat_request(r#"{"message": "hi", "language": null}"#, JsonPolicy::Strict)
            .unwrap();
        assert_eq!(req.language, Language::En);
    }

    #[test]
    fn test_malformed_json_policies() {
        let strict = parse_chat_request("{not json", JsonPolicy::Strict).unwrap_err();
        assert!(matches!(strict, HandlerError::InvalidJson(_)));
        assert_eq!(strict.status_code(), 400);

        let lenient = parse_chat_request("{not json", JsonPolicy::Lenient).unwrap_err();
        assert!(matches!(lenient, HandlerError::BodyParse(_)));
        assert_eq!(lenient.status_code(), 500);
    }

    #[test]
    fn test_non_object_json_is_malformed() {
        let err = parse_chat_request("[1, 2]", JsonPolicy::Strict).unwrap_err();
        assert!(matches!(err, HandlerError::InvalidJson(_)));
    }
}
