//! Hashtag extraction and Weibo topic rewriting

use regex::Regex;
use std::sync::OnceLock;

static HASHTAG: OnceLock<Regex> = OnceLock::new();

/// `#` followed by one or more characters that are neither `#` nor
/// whitespace.
fn hashtag_pattern() -> &'static Regex {
    HASHTAG.get_or_init(|| Regex::new(r"#[^#\s]+").expect("hashtag pattern is valid"))
}

/// Extract the distinct hashtags of `text`, in first-occurrence order.
///
/// Matches are found left to right and never overlap; duplicates keep
/// their first position. Returns an empty vector when the text has no
/// hashtags.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for m in hashtag_pattern().find_iter(text) {
        if !tags.iter().any(|t| t == m.as_str()) {
            tags.push(m.as_str().to_string());
        }
    }
    tags
}

/// Rewrite Weibo topic markup `#topic#` to the cross-platform `#topic`.
///
/// Pairs are consumed left to right: each `#` that has a later closing `#`
/// with at least one character between them loses the closing `#`. An
/// unpaired `#` passes through unchanged, so `#a##b#` becomes `#a#b`.
pub fn convert_hashtags(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '#' {
            if let Some(topic_len) = chars[i + 1..].iter().position(|&c| c == '#') {
                if topic_len > 0 {
                    out.push('#');
                    out.extend(&chars[i + 1..i + 1 + topic_len]);
                    i += topic_len + 2;
                    continue;
                }
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}
