use crate::core::models::Language;

/// Snippets shown in the final answer.
pub const MAX_SHOWN_SNIPPETS: usize = 3;

#[must_use]
pub fn compose_answer(snippets: &[String], url: &str, language: Language, terse: bool) -> String {
    if snippets.is_empty() {
        return fallback_answer(url, language, terse);
    }

    let body = snippets
        .iter()
        .take(MAX_SHOWN_SNIPPETS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n");

    match language {
        Language::Ru => format!("🔍 Вот что удалось найти:\n\n{body}\n\n📎 Подробнее: {url}"),
        Language::En => format!("🔍 Here is what I found:\n\n{body}\n\n📎 More info: {url}"),
    }
}

/// Link-only answer used when nothing could be extracted.
#[must_use]
pub fn fallback_answer(url: &str, language: Language, terse: bool) -> String {
    let link = match language {
        Language::Ru => format!("По вашему запросу найдено много результатов. Посмотрите здесь: {url}"),
        Language::En => format!("Many results were found for your query. Take a look here: {url}"),
    };

    if terse {
        return link;
    }

    let commentary = match language {
        Language::Ru => {
            "Попробуйте сформулировать вопрос конкретнее, и я постараюсь найти более точный ответ."
        }
        Language::En => {
            "Try asking a more specific question and I will look for a more precise answer."
        }
    };

    format!("{link}\n\n{commentary}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://yandex.ru/search/?text=rust";

    fn snippets(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("snippet {i}")).collect()
    }

    #[test]
    fn test_joins_at_most_three_snippets() {
        let text = compose_answer(&snippets(5), URL, Language::En, false);
        assert!(text.contains("snippet 1\n\nsnippet 2\n\nsnippet 3"));
        assert!(!text.contains("snippet 4"));
        assert!(text.starts_with("🔍 Here is what I found:"));
        assert!(text.ends_with(&format!("📎 More info: {URL}")));
    }

    #[test]
    fn test_russian_header_and_footer() {
        let text = compose_answer(&snippets(1), URL, Language::Ru, true);
        assert_eq!(
            text,
            format!("🔍 Вот что удалось найти:\n\nsnippet 1\n\n📎 Подробнее: {URL}")
        );
    }

    #[test]
    fn test_empty_snippets_fall_back_to_link() {
        let terse = compose_answer(&[], URL, Language::Ru, true);
        assert_eq!(
            terse,
            format!("По вашему запросу найдено много результатов. Посмотрите здесь: {URL}")
        );

        let verbose = compose_answer(&[], URL, Language::En, false);
        assert!(verbose.starts_with("Many results were found"));
        assert!(verbose.contains(URL));
        assert!(verbose.contains("more specific question"));
    }
}
