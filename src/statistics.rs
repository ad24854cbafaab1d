use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Raw character/word/sentence counts for one text sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStatistics {
    pub letter_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
}

fn sentence_terminators() -> &'static Regex {
    static TERMINATORS: OnceLock<Regex> = OnceLock::new();
    TERMINATORS.get_or_init(|| Regex::new(r"[.!?]+").expect("terminator pattern is valid"))
}

/// Count letters, words and sentences in `text`.
///
/// Only ASCII letters `[a-zA-Z]` are counted; accented and non-Latin
/// letters are ignored. A run of terminators such as `"?!"` or `"..."`
/// counts as a single sentence.
pub fn compute_statistics(text: &str) -> TextStatistics {
    TextStatistics {
        letter_count: count_letters(text),
        word_count: count_words(text),
        sentence_count: count_sentences(text),
    }
}

pub fn count_letters(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_alphabetic()).count()
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn count_sentences(text: &str) -> usize {
    sentence_terminators().find_iter(text).count()
}
