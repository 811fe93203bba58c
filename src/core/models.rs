use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    /// Only an explicit `"ru"` (or no value at all) selects Russian.
    #[must_use]
    pub fn from_field(value: Option<&serde_json::Value>) -> Self {
        match value {
            None => Language::Ru,
            Some(v) if v.as_str() == Some("ru") => Language::Ru,
            Some(_) => Language::En,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    pub language: Language,
}

/// API Gateway proxy response shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}
