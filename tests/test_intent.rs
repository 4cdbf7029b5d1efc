//! Tests for [`cyber_assistant::intent`]

use cyber_assistant::intent::{detect_sentiment, detect_topics, normalize};
use cyber_assistant::lexicon::Lexicon;

fn lexicon() -> Lexicon {
    Lexicon::builtin().expect("built-in lexicon is consistent")
}

/// Test 1: normalize() lowercases and strips punctuation.
#[test]
fn test_normalize_lowercases_and_strips_punctuation() {
    assert_eq!(normalize("What's a VPN?!"), "whats a vpn");
}

/// Test 2: Stripping punctuation never merges words separated by spaces.
#[test]
fn test_normalize_preserves_word_boundaries() {
    assert_eq!(normalize("public, wifi"), "public wifi");
    assert!(normalize("Is PUBLIC WiFi safe?").contains("public wifi"));
}

/// Test 3: Every keyword of every topic is detected inside a sentence.
#[test]
fn test_every_keyword_detects_its_topic() {
    let lexicon = lexicon();
    for group in lexicon.keyword_groups() {
        for phrase in &group.phrases {
            let input = normalize(&format!("Tell me about {}, please.", phrase.to_uppercase()));
            let topics = detect_topics(&lexicon, &input);
            assert!(
                topics.contains(&group.topic.as_str()),
                "phrase '{phrase}' should detect '{}', got {topics:?}",
                group.topic
            );
        }
    }
}

/// Test 4: Several topics in one line come back in declaration order.
#[test]
fn test_multiple_topics_in_declaration_order() {
    let lexicon = lexicon();
    let input = normalize("Is my password safe on public Wi-Fi?");
    assert_eq!(detect_topics(&lexicon, &input), vec!["password", "public wifi"]);
}

/// Test 5: Hyphenated keywords match after punctuation stripping.
#[test]
fn test_hyphenated_keyword_matches() {
    let lexicon = lexicon();
    let input = normalize("Should I turn on multi-factor login?");
    assert!(detect_topics(&lexicon, &input).contains(&"2fa"));
}

/// Test 6: Text with no keyword yields no topics.
#[test]
fn test_no_topics_for_unrelated_text() {
    let lexicon = lexicon();
    assert!(detect_topics(&lexicon, &normalize("qwerty")).is_empty());
}

/// Test 7: Matching is substring-based, so "hi" fires inside "this".
#[test]
fn test_substring_matching_is_not_word_bounded() {
    let lexicon = lexicon();
    assert_eq!(detect_topics(&lexicon, "this"), vec!["hello"]);
}

/// Test 8: The first sentiment phrase in declaration order wins.
#[test]
fn test_first_sentiment_wins() {
    let lexicon = lexicon();
    let worried = lexicon.sentiments()[0].reply.clone();
    let reply = detect_sentiment(&lexicon, "im scared and worried").unwrap();
    assert_eq!(reply, worried, "'worried' is declared before 'scared'");
}

/// Test 9: No sentiment phrase means no reply.
#[test]
fn test_no_sentiment() {
    let lexicon = lexicon();
    assert_eq!(detect_sentiment(&lexicon, "tell me about vpn"), None);
}
