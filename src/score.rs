use crate::statistics::TextStatistics;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const LETTER_WEIGHT: f64 = 0.0588;
pub const SENTENCE_WEIGHT: f64 = 0.296;
pub const INDEX_OFFSET: f64 = 15.8;

/// Rounded Coleman-Liau grade, or `NotAvailable` when the index is not a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Grade {
    Value(i64),
    NotAvailable,
}

impl Grade {
    pub fn from_index(index: f64) -> Self {
        if index.is_finite() {
            Grade::Value(index.round() as i64)
        } else {
            Grade::NotAvailable
        }
    }

    pub fn value(&self) -> Option<i64> {
        match self {
            Grade::Value(grade) => Some(*grade),
            Grade::NotAvailable => None,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Value(grade) => write!(f, "{}", grade),
            Grade::NotAvailable => write!(f, "N/A"),
        }
    }
}

/// Non-finite values are written as `null` and read back as NaN.
mod finite_or_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScore {
    /// L: average letters per 100 words
    #[serde(with = "finite_or_null")]
    pub avg_letters_per_100_words: f64,
    /// S: average sentences per 100 words
    #[serde(with = "finite_or_null")]
    pub avg_sentences_per_100_words: f64,
    #[serde(with = "finite_or_null")]
    pub index: f64,
    pub grade: Grade,
}

/// Apply the Coleman-Liau formula to a set of counts.
///
/// With zero words both per-100-word averages are 0, so the index bottoms
/// out at `-15.8` instead of dividing by zero. The raw index is never clamped.
pub fn compute_score(stats: &TextStatistics) -> ReadabilityScore {
    let (letters_per_100, sentences_per_100) = if stats.word_count == 0 {
        (0.0, 0.0)
    } else {
        let words = stats.word_count as f64;
        (
            (stats.letter_count as f64 / words) * 100.0,
            (stats.sentence_count as f64 / words) * 100.0,
        )
    };

    let index = coleman_liau_index(letters_per_100, sentences_per_100);

    ReadabilityScore {
        avg_letters_per_100_words: letters_per_100,
        avg_sentences_per_100_words: sentences_per_100,
        index,
        grade: Grade::from_index(index),
    }
}

pub fn coleman_liau_index(letters_per_100: f64, sentences_per_100: f64) -> f64 {
    LETTER_WEIGHT * letters_per_100 - SENTENCE_WEIGHT * sentences_per_100 - INDEX_OFFSET
}
