use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

use crate::core::models::Language;

pub const SYSTEM_PROMPT_RU: &str = "Ты профессиональный корпоративный AI-ассистент. \
    Отвечай кратко, по делу и профессионально. \
    Используй деловой стиль общения.";

pub const SYSTEM_PROMPT_EN: &str = "You are a professional corporate AI assistant. \
    Answer concisely, to the point and professionally. \
    Use business communication style.";

#[must_use]
pub fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::Ru => SYSTEM_PROMPT_RU,
        Language::En => SYSTEM_PROMPT_EN,
    }
}

/// System persona followed by the user's message.
#[must_use]
pub fn build_prompt(message: &str, language: Language) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(system_prompt(language).to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(message.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}
