pub mod statistics;
pub mod score;
pub mod grade_band;
pub mod analyzer;
pub mod theme;
pub mod config;
pub mod reporter;
pub mod session;

pub use statistics::{compute_statistics, TextStatistics};
pub use score::{compute_score, Grade, ReadabilityScore};
pub use grade_band::{classify_grade, GradeBand};
pub use analyzer::{AnalysisError, ReadabilityAnalyzer, ReadabilityReport, TextSource};
pub use theme::{Theme, ThemePreference};
pub use config::Config;
pub use reporter::{Renderer, Reporter};
pub use session::{Session, View};

pub type Result<T> = anyhow::Result<T>;
