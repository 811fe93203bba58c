//! Best-effort snippet extraction from a search results page.
//!
//! Markup changes on the search engine side break this silently; callers treat
//! an empty result as "nothing found", never as an error.

use regex::Regex;
use std::sync::LazyLock;

/// Snippets shorter than this (in characters, after trimming) are dropped.
pub const MIN_SNIPPET_CHARS: usize = 20;

/// At most this many snippets are kept from one page.
pub const MAX_SNIPPETS: usize = 5;

pub trait SnippetExtractor: Send + Sync {
    /// Ordered snippets, each longer than [`MIN_SNIPPET_CHARS`], at most [`MAX_SNIPPETS`].
    fn extract(&self, html: &str) -> Vec<String>;
}

/// Matches `<div>` elements whose class attribute contains `text`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexSnippetExtractor;

static TEXT_DIV_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<div\b[^>]*\sclass\s*=\s*["'][^"']*text[^"']*["'][^>]*>(.*?)</div>"#)
        .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]*>").unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

impl SnippetExtractor for RegexSnippetExtractor {
    fn extract(&self, html: &str) -> Vec<String> {
        TEXT_DIV_RE
            .captures_iter(html)
            .filter_map(|caps| caps.get(1))
            .map(|m| clean_fragment(m.as_str()))
            .filter(|s| s.chars().count() > MIN_SNIPPET_CHARS)
            .take(MAX_SNIPPETS)
            .collect()
    }
}

/// Strips nested tags, decodes the common entities and collapses whitespace.
#[must_use]
pub fn clean_fragment(fragment: &str) -> String {
    let without_tags = TAG_RE.replace_all(fragment, " ");
    let decoded = decode_entities(&without_tags);
    WHITESPACE_RE.replace_all(&decoded, " ").trim().to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_text_divs_in_order() {
        let html = r#"
            <div class="serp-item">
              <div class="OrganicText text-container">Rust is a multi-paradigm systems programming language.</div>
              <div class="title">Ignored title block that is long enough</div>
              <DIV CLASS="Text">Second <b>snippet</b> with&nbsp;nested markup inside it.</DIV>
            </div>"#;

        let snippets = RegexSnippetExtractor.extract(html);
        assert_eq!(
            snippets,
            vec![
                "Rust is a multi-paradigm systems programming language.".to_string(),
                "Second snippet with nested markup inside it.".to_string(),
            ]
        );
    }

    #[test]
    fn test_drops_short_fragments() {
        let html = r#"<div class="text">too short</div><div class="text">exactly twenty chars</div>"#;
        assert!(RegexSnippetExtractor.extract(html).is_empty());

        let html = r#"<div class="text">twenty-one characters</div>"#;
        assert_eq!(RegexSnippetExtractor.extract(html).len(), 1);
    }

    #[test]
    fn test_caps_at_five() {
        let html: String = (0..8)
            .map(|i| format!(r#"<div class="text">Snippet number {i} with enough length</div>"#))
            .collect();
        let snippets = RegexSnippetExtractor.extract(&html);
        assert_eq!(snippets.len(), MAX_SNIPPETS);
        assert!(snippets[0].contains("number 0"));
        assert!(snippets[4].contains("number 4"));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 12 Cyrillic characters, 24 bytes.
        let html = r#"<div class="text">абвгдеёжзийк</div>"#;
        assert!(RegexSnippetExtractor.extract(html).is_empty());
    }

    #[test]
    fn test_clean_fragment() {
        assert_eq!(
            clean_fragment("  A &amp; B\n\t<i>are</i>   &quot;fine&quot; "),
            "A & B are \"fine\""
        );
    }

    #[test]
    fn test_ignores_class_like_data_attributes() {
        let html = r#"<div data-class="text" class="title">A title block that is long enough to keep</div>"#;
        assert!(RegexSnippetExtractor.extract(html).is_empty());

        let html = r#"<div data-class="title" class="text">A snippet block that is long enough to keep</div>"#;
        assert_eq!(RegexSnippetExtractor.extract(html).len(), 1);
    }

    #[test]
    fn test_no_matches_on_unrelated_markup() {
        let html = "<html><body><p>Nothing to see here, move along please.</p></body></html>";
        assert!(RegexSnippetExtractor.extract(html).is_empty());
    }
}
