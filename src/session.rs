use crate::analyzer::{AnalysisError, ReadabilityAnalyzer, ReadabilityReport};
use tracing::debug;

/// Which screen the user is looking at.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Input,
    Result(ReadabilityReport),
}

/// Analyze/done cycle: entering text shows a result, `done` discards it.
#[derive(Debug)]
pub struct Session {
    analyzer: ReadabilityAnalyzer,
    view: View,
}

impl Session {
    pub fn new() -> Self {
        Self {
            analyzer: ReadabilityAnalyzer::new(),
            view: View::Input,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn current_report(&self) -> Option<&ReadabilityReport> {
        match &self.view {
            View::Result(report) => Some(report),
            View::Input => None,
        }
    }

    /// Blank text leaves the session where it was and returns `EmptyInput`.
    pub fn analyze(&mut self, text: &str) -> Result<ReadabilityReport, AnalysisError> {
        let report = self.analyzer.analyze(text)?;
        debug!("switching to result view");
        self.view = View::Result(report.clone());
        Ok(report)
    }

    pub fn done(&mut self) {
        debug!("discarding result, back to input view");
        self.view = View::Input;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
