//! Feed Text Cleanup
//!
//! RSS descriptions carry HTML fragments; the snapshot stores plain text.

use regex::Regex;
use std::sync::OnceLock;

static TAG: OnceLock<Regex> = OnceLock::new();
static SPACES: OnceLock<Regex> = OnceLock::new();

fn tag_re() -> &'static Regex {
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"))
}

fn spaces_re() -> &'static Regex {
    SPACES.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// Unescape named and numeric HTML entities
pub fn unescape_html(raw: &str) -> String {
    html_escape::decode_html_entities(raw).into_owned()
}

/// Plain text of an HTML fragment with whitespace collapsed
pub fn clean_text(raw: &str) -> String {
    let without_tags = tag_re().replace_all(raw, " ");
    let unescaped = unescape_html(&without_tags);
    spaces_re().replace_all(unescaped.trim(), " ").into_owned()
}

/// First `limit` characters of `text`
pub fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_news_description() {
        let raw = r##"<a href="https://news.google.com/rss/articles/x" target="_blank">셀트리온, FDA 승인</a>&nbsp;&nbsp;<font color="#6f6f6f">연합뉴스</font>"##;
        assert_eq!(clean_text(raw), "셀트리온, FDA 승인 연합뉴스");
    }

    #[test]
    fn test_entities() {
        assert_eq!(unescape_html("A &amp; B &quot;C&quot; &#39;d&#39; &#x41;"), "A & B \"C\" 'd' A");
    }

    #[test]
    fn test_typographic_entities_in_headlines() {
        assert_eq!(
            clean_text("&lsquo;K-바이오&rsquo; &ldquo;FDA&rdquo; 승인 &ndash; 셀트리온"),
            "‘K-바이오’ “FDA” 승인 – 셀트리온"
        );
        assert_eq!(unescape_html("&middot;&hellip;&mdash;"), "·…—");
    }

    #[test]
    fn test_escaped_markup_is_text() {
        assert_eq!(clean_text("1 &lt; 2"), "1 < 2");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_chars("식품의약국", 3), "식품의");
        assert_eq!(truncate_chars("short", 280), "short");
    }
}
