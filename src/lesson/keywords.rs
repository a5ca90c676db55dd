//! Keyword derivation and text clipping for lesson content
//!
//! Keywords feed free-text answer scoring only; the structured quiz path
//! never looks at them.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::types::Lang;

/// Keywords kept per step
const MAX_KEYWORDS: usize = 10;

/// Minimum token length that counts as a keyword
const MIN_KEYWORD_LEN: usize = 5;

static STOP_WORDS_RU: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "когда", "чтобы", "который", "которая", "которые", "можно", "нужно", "после", "перед",
        "этого", "этот", "также", "здесь", "такой", "будет", "должен",
    ]
    .into_iter()
    .collect()
});

static STOP_WORDS_EN: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "which", "there", "their", "about", "after", "before", "should", "would", "could", "this",
        "that", "with", "from", "into", "your",
    ]
    .into_iter()
    .collect()
});

fn stop_words(lang: Lang) -> &'static HashSet<&'static str> {
    match lang {
        Lang::Ru => &STOP_WORDS_RU,
        Lang::En => &STOP_WORDS_EN,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('а'..='я').contains(&c) || c == 'ё'
}

/// Lower-case and tokenize, dropping punctuation
pub(crate) fn normalize_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Derive the free-text scoring keywords for one step: tokens of length >= 5
/// minus stop words, de-duplicated in order of appearance, capped at 10
pub(crate) fn collect_keywords(text: &str, lang: Lang) -> Vec<String> {
    let stop = stop_words(lang);
    let mut seen = HashSet::new();
    normalize_words(text)
        .into_iter()
        .filter(|word| word.chars().count() >= MIN_KEYWORD_LEN)
        .filter(|word| !stop.contains(word.as_str()))
        .filter(|word| seen.insert(word.clone()))
        .take(MAX_KEYWORDS)
        .collect()
}

/// Truncate teaching text to a character bound, marking the cut with "..."
pub(crate) fn clip(text: &str, max_chars: usize) -> String {
    let cleaned = text.trim();
    if cleaned.is_empty() {
        return String::new();
    }
    if cleaned.chars().count() <= max_chars {
        return cleaned.to_string();
    }
    let cut: String = cleaned.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}...", cut.trim_end())
}
