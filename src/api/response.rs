//! Response envelope builders.
//!
//! Every envelope carries `Access-Control-Allow-Origin: *`; JSON envelopes
//! also carry `Content-Type: application/json`.

use serde_json::{Value, json};
use std::collections::BTreeMap;

use crate::core::models::ResponseEnvelope;
use crate::errors::HandlerError;

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const MAX_AGE: &str = "Access-Control-Max-Age";
pub const CONTENT_TYPE: &str = "Content-Type";

fn headers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// 200 preflight answer with an empty body.
#[must_use]
pub fn options_response() -> ResponseEnvelope {
    ResponseEnvelope {
        status_code: 200,
        headers: headers(&[
            (ALLOW_ORIGIN, "*"),
            (ALLOW_METHODS, "POST, OPTIONS"),
            (ALLOW_HEADERS, "Content-Type"),
            (MAX_AGE, "86400"),
        ]),
        body: String::new(),
        is_base64_encoded: false,
    }
}

#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> ResponseEnvelope {
    ResponseEnvelope {
        status_code,
        headers: headers(&[(CONTENT_TYPE, "application/json"), (ALLOW_ORIGIN, "*")]),
        body: body.to_string(),
        is_base64_encoded: false,
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> ResponseEnvelope {
    json_response(status_code, &json!({ "error": message }))
}

#[must_use]
pub fn error_envelope(error: &HandlerError) -> ResponseEnvelope {
    err_response(error.status_code(), &error.public_message())
}

#[must_use]
pub fn ok_reply(text: &str, request_id: &str) -> ResponseEnvelope {
    json_response(200, &json!({ "response": text, "request_id": request_id }))
}
