use html2text::from_read;
use regex::Regex;
use std::sync::LazyLock;

static HTML_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^>]*>").expect("valid HTML tag pattern"));
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s]+").expect("valid URL pattern"));
static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Make text speakable: drop HTML markup and URLs, collapse whitespace
pub fn clean_text(text: &str) -> String {
    // A bare `<` in prose is not markup; only real tags go through html2text
    let plain_text = if HTML_TAG_PATTERN.is_match(text) {
        from_read(text.as_bytes(), usize::MAX)
    } else {
        text.to_string()
    };

    let without_urls = URL_PATTERN.replace_all(&plain_text, "");
    let normalized = WHITESPACE_PATTERN.replace_all(&without_urls, " ");

    normalized.trim().to_string()
}
