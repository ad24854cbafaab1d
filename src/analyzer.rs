use crate::{
    grade_band::{classify_grade, GradeBand},
    score::{compute_score, ReadabilityScore},
    statistics::{compute_statistics, TextStatistics},
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Please enter some text.")]
    EmptyInput,
}

/// Everything the presentation layer needs to show one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    pub statistics: TextStatistics,
    pub score: ReadabilityScore,
    /// `None` only when the grade is not available.
    pub band: Option<GradeBand>,
}

impl ReadabilityReport {
    pub fn band_label(&self) -> &'static str {
        self.band.map(|band| band.label()).unwrap_or("N/A")
    }

    pub fn export_to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A named text to analyze as part of a batch, usually a file.
#[derive(Debug, Clone)]
pub struct TextSource {
    pub name: String,
    pub text: String,
}

impl TextSource {
    /// Drops a leading byte-order mark, which is not whitespace to `str::trim`.
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            text: strip_bom(text).to_string(),
        }
    }
}

pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}').unwrap_or(text)
}

#[derive(Debug)]
pub struct BatchEntry {
    pub name: String,
    pub result: Result<ReadabilityReport, AnalysisError>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ReadabilityAnalyzer;

impl ReadabilityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline, rejecting blank input first.
    pub fn analyze(&self, text: &str) -> Result<ReadabilityReport, AnalysisError> {
        if text.trim().is_empty() {
            debug!("rejected blank input");
            return Err(AnalysisError::EmptyInput);
        }
        Ok(self.evaluate(text))
    }

    /// Statistics, score and band for any text, blank or not.
    pub fn evaluate(&self, text: &str) -> ReadabilityReport {
        let statistics = compute_statistics(text);
        let score = compute_score(&statistics);
        let band = score.grade.value().map(classify_grade);

        debug!(
            letters = statistics.letter_count,
            words = statistics.word_count,
            sentences = statistics.sentence_count,
            index = score.index,
            grade = %score.grade,
            "analyzed text sample"
        );

        ReadabilityReport {
            statistics,
            score,
            band,
        }
    }

    /// Analyze several samples in parallel. Output order matches input order.
    pub fn analyze_batch(&self, sources: &[TextSource]) -> Vec<BatchEntry> {
        debug!(samples = sources.len(), "starting batch analysis");
        sources
            .par_iter()
            .map(|source| BatchEntry {
                name: source.name.clone(),
                result: self.analyze(&source.text),
            })
            .collect()
    }
}
