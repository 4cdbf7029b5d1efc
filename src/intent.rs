//! Keyword-based intent matching over normalized input.
//!
//! Matching is plain substring search: no tokenisation, no stemming. A
//! phrase such as `"con"` therefore also matches inside `"confused"`; the
//! content tables are expected to account for that.

use regex::Regex;
use std::sync::OnceLock;

use crate::lexicon::Lexicon;

fn punctuation_regex() -> &'static Regex {
    static PUNCTUATION_RE: OnceLock<Regex> = OnceLock::new();
    PUNCTUATION_RE.get_or_init(|| Regex::new(r"\p{P}").expect("punctuation regex must compile"))
}

/// Lowercase `text` and remove every Unicode punctuation character.
///
/// Whitespace is left untouched so multi-word phrases such as
/// `"public wifi"` still match as contiguous substrings.
pub fn normalize(text: &str) -> String {
    punctuation_regex()
        .replace_all(&text.to_lowercase(), "")
        .into_owned()
}

/// Every topic with at least one phrase contained in `normalized`.
///
/// Topics are returned in the lexicon's declaration order.
pub fn detect_topics<'a>(lexicon: &'a Lexicon, normalized: &str) -> Vec<&'a str> {
    lexicon
        .keyword_groups()
        .iter()
        .filter(|group| group.phrases.iter().any(|p| normalized.contains(p.as_str())))
        .map(|group| group.topic.as_str())
        .collect()
}

/// Reply of the first sentiment phrase (declaration order) found in `normalized`.
pub fn detect_sentiment<'a>(lexicon: &'a Lexicon, normalized: &str) -> Option<&'a str> {
    lexicon
        .sentiments()
        .iter()
        .find(|entry| normalized.contains(entry.phrase.as_str()))
        .map(|entry| entry.reply.as_str())
}
