use crate::{
    analyzer::ReadabilityReport,
    config::OutputFormat,
    theme::{Rgb, Theme},
};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

/// Turns a finished analysis into something a user can look at.
pub trait Renderer {
    fn render(&self, report: &ReadabilityReport) -> Result<String>;
}

/// Two decimal places, the precision every renderer shows averages and the index with.
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        "N/A".to_string()
    }
}

/// One report from a batch, tagged with the input it came from.
#[derive(Debug, Serialize)]
pub struct NamedReport<'a> {
    pub name: &'a str,
    pub report: &'a ReadabilityReport,
}

/// All batch reports as a single JSON array.
pub fn render_json_batch(reports: &[NamedReport<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// File stem for `name`, suffixed with `_2`, `_3`, ... when already taken.
fn unique_stem(name: &str, taken: &mut HashSet<String>) -> String {
    let base = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("readability");

    let mut stem = base.to_string();
    let mut counter = 1;
    while !taken.insert(stem.clone()) {
        counter += 1;
        stem = format!("{}_{}", base, counter);
    }
    stem
}

/// Label/value rows shared by the table renderers.
fn table_rows(report: &ReadabilityReport) -> Vec<(&'static str, String)> {
    let stats = &report.statistics;
    let score = &report.score;
    vec![
        ("Letters", stats.letter_count.to_string()),
        ("Words", stats.word_count.to_string()),
        ("Sentences", stats.sentence_count.to_string()),
        ("L (letters per 100 words)", format_decimal(score.avg_letters_per_100_words)),
        ("S (sentences per 100 words)", format_decimal(score.avg_sentences_per_100_words)),
        ("Coleman-Liau index", format_decimal(score.index)),
    ]
}

pub struct TerminalRenderer {
    theme: Theme,
    color: bool,
}

impl TerminalRenderer {
    pub fn new(theme: Theme, color: bool) -> Self {
        Self { theme, color }
    }

    fn paint(&self, text: &str, rgb: Rgb) -> String {
        if self.color {
            text.truecolor(rgb.0, rgb.1, rgb.2).to_string()
        } else {
            text.to_string()
        }
    }

    fn grade_box(&self, report: &ReadabilityReport) -> String {
        let content = format!(" Grade {}  {} ", report.score.grade, report.band_label());
        if !self.color {
            return format!("[{}]", content);
        }

        let palette = self.theme.palette();
        if self.theme.is_dark() {
            // no fill, outlined in the highlight color
            format!(
                "{}{}{}",
                self.paint("[", palette.highlight),
                content
                    .truecolor(palette.text.0, palette.text.1, palette.text.2)
                    .bold(),
                self.paint("]", palette.highlight)
            )
        } else {
            // solid accent box with white text
            content
                .truecolor(palette.highlight.0, palette.highlight.1, palette.highlight.2)
                .on_truecolor(palette.accent.0, palette.accent.1, palette.accent.2)
                .bold()
                .to_string()
        }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&self, report: &ReadabilityReport) -> Result<String> {
        let palette = self.theme.palette();
        let rows = table_rows(report);
        let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

        let mut output = String::new();
        let title = format!("Readability Report ({} mode)", self.theme);
        output.push_str(&self.paint(&title, palette.accent));
        output.push('\n');
        output.push_str(&self.paint(&"=".repeat(title.len()), palette.accent));
        output.push('\n');

        for (label, value) in &rows {
            let line = format!(
                "  {:<label_width$}  {:>value_width$}",
                label,
                value,
                label_width = label_width,
                value_width = value_width
            );
            output.push_str(&self.paint(&line, palette.text));
            output.push('\n');
        }

        output.push('\n');
        output.push_str("  ");
        output.push_str(&self.grade_box(report));
        output.push('\n');

        Ok(output)
    }
}

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, report: &ReadabilityReport) -> Result<String> {
        report.export_to_json()
    }
}

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, report: &ReadabilityReport) -> Result<String> {
        let mut md = String::new();
        md.push_str("# Readability Report\n\n");
        md.push_str("| Metric | Value |\n");
        md.push_str("|--------|-------|\n");
        for (label, value) in table_rows(report) {
            md.push_str(&format!("| {} | {} |\n", label, value));
        }
        md.push_str(&format!(
            "\n**Grade:** {} ({})\n",
            report.score.grade,
            report.band_label()
        ));
        Ok(md)
    }
}

/// Pick the renderer for an output format. The theme only affects terminal output.
pub fn renderer_for(format: OutputFormat, theme: Theme, color: bool) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalRenderer::new(theme, color)),
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Markdown => Box::new(MarkdownRenderer),
    }
}

pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    /// Write the JSON report and the Markdown summary into `output_dir`.
    pub fn export(&self, report: &ReadabilityReport, output_dir: &Path) -> Result<Vec<PathBuf>> {
        self.export_named(report, output_dir, "readability")
    }

    pub fn export_named(
        &self,
        report: &ReadabilityReport,
        output_dir: &Path,
        stem: &str,
    ) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(output_dir)?;
        let mut exported_files = Vec::new();

        // Export JSON report
        let json_path = output_dir.join(format!("{}_report.json", stem));
        fs::write(&json_path, JsonRenderer.render(report)?)?;
        exported_files.push(json_path);

        // Export Markdown summary
        let md_path = output_dir.join(format!("{}_summary.md", stem));
        fs::write(&md_path, MarkdownRenderer.render(report)?)?;
        exported_files.push(md_path);

        Ok(exported_files)
    }

    /// Export every report of a batch. Inputs sharing a file stem get distinct names.
    pub fn export_batch(
        &self,
        reports: &[NamedReport<'_>],
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        let mut taken = HashSet::new();
        let mut exported_files = Vec::with_capacity(reports.len() * 2);
        for named in reports {
            let stem = unique_stem(named.name, &mut taken);
            exported_files.extend(self.export_named(named.report, output_dir, &stem)?);
        }
        Ok(exported_files)
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::ReadabilityAnalyzer;
    use crate::score::{Grade, ReadabilityScore};
    use crate::statistics::TextStatistics;
    use tempfile::TempDir;

    fn hello_report() -> ReadabilityReport {
        ReadabilityAnalyzer::new().analyze("Hello world.").unwrap()
    }

    fn unavailable_report() -> ReadabilityReport {
        ReadabilityReport {
            statistics: TextStatistics {
                letter_count: 5,
                word_count: 1,
                sentence_count: 0,
            },
            score: ReadabilityScore {
                avg_letters_per_100_words: 500.0,
                avg_sentences_per_100_words: 0.0,
                index: f64::NAN,
                grade: Grade::NotAvailable,
            },
            band: None,
        }
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(500.0), "500.00");
        assert_eq!(format_decimal(-15.8), "-15.80");
        assert_eq!(format_decimal(1.0 / 3.0), "0.33");
    }

    #[test]
    fn test_plain_terminal_output() {
        let output = TerminalRenderer::new(Theme::Light, false)
            .render(&hello_report())
            .unwrap();

        assert!(output.contains("Readability Report (light mode)"));
        assert!(output.contains("Letters"));
        assert!(output.contains("500.00"));
        assert!(output.contains("50.00"));
        // 0.0588 * 500 - 0.296 * 50 - 15.8 = -1.2
        assert!(output.contains("-1.20"));
        assert!(output.contains("[ Grade -1  Before Grade 1 ]"));
    }

    #[test]
    fn test_colored_output_keeps_values() {
        let output = TerminalRenderer::new(Theme::Dark, true)
            .render(&hello_report())
            .unwrap();
        assert!(output.contains("dark mode"));
        assert!(output.contains("Before Grade 1"));
    }

    #[test]
    fn test_markdown_output() {
        let md = MarkdownRenderer.render(&hello_report()).unwrap();
        assert!(md.starts_with("# Readability Report"));
        assert!(md.contains("| Words | 2 |"));
        assert!(md.contains("| Coleman-Liau index | -1.20 |"));
        assert!(md.contains("**Grade:** -1 (Before Grade 1)"));
    }

    #[test]
    fn test_json_output_is_parseable() {
        let json = renderer_for(OutputFormat::Json, Theme::Light, true)
            .render(&hello_report())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["statistics"]["letter_count"], 10);
        assert_eq!(value["score"]["grade"], -1);
        assert_eq!(value["band"], "Before Grade 1");
    }

    #[test]
    fn test_export_writes_both_files() {
        let temp = TempDir::new().unwrap();
        let files = Reporter::new()
            .export(&hello_report(), temp.path())
            .unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.exists()));
        assert!(files[0].ends_with("readability_report.json"));
        assert!(files[1].ends_with("readability_summary.md"));
    }

    #[test]
    fn test_unavailable_grade_in_terminal_output() {
        let output = TerminalRenderer::new(Theme::Light, false)
            .render(&unavailable_report())
            .unwrap();
        assert!(output.contains("500.00"));
        assert!(output.contains("[ Grade N/A  N/A ]"));
        assert!(!output.contains("NaN"));
    }

    #[test]
    fn test_unavailable_grade_in_markdown_output() {
        let md = MarkdownRenderer.render(&unavailable_report()).unwrap();
        assert!(md.contains("| Coleman-Liau index | N/A |"));
        assert!(md.contains("**Grade:** N/A (N/A)"));
    }

    #[test]
    fn test_unavailable_grade_json_round_trip() {
        let json = JsonRenderer.render(&unavailable_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["score"]["index"].is_null());
        assert!(value["score"]["grade"].is_null());
        assert!(value["band"].is_null());

        let parsed: ReadabilityReport = serde_json::from_str(&json).unwrap();
        assert!(parsed.score.index.is_nan());
        assert_eq!(parsed.score.grade, Grade::NotAvailable);
        assert_eq!(parsed.band, None);
        assert_eq!(parsed.statistics, unavailable_report().statistics);
    }

    #[test]
    fn test_json_batch_is_one_array() {
        let first = hello_report();
        let second = ReadabilityAnalyzer::new()
            .analyze("Wait... really?! Yes.")
            .unwrap();
        let reports = vec![
            NamedReport { name: "a.txt", report: &first },
            NamedReport { name: "b.txt", report: &second },
        ];

        let json = render_json_batch(&reports).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], "a.txt");
        assert_eq!(items[1]["report"]["statistics"]["sentence_count"], 3);
    }

    #[test]
    fn test_unique_stems() {
        let mut taken = HashSet::new();
        assert_eq!(unique_stem("x/notes.txt", &mut taken), "notes");
        assert_eq!(unique_stem("y/notes.txt", &mut taken), "notes_2");
        assert_eq!(unique_stem("z/notes.md", &mut taken), "notes_3");
        assert_eq!(unique_stem("other.txt", &mut taken), "other");
    }

    #[test]
    fn test_export_batch_keeps_same_stem_inputs() {
        let temp = TempDir::new().unwrap();
        let report = hello_report();
        let reports = vec![
            NamedReport { name: "x/notes.txt", report: &report },
            NamedReport { name: "y/notes.txt", report: &report },
        ];

        let files = Reporter::new().export_batch(&reports, temp.path()).unwrap();
        assert_eq!(files.len(), 4);
        assert!(files.iter().all(|f| f.exists()));
        assert!(temp.path().join("notes_report.json").exists());
        assert!(temp.path().join("notes_2_report.json").exists());
        assert!(temp.path().join("notes_2_summary.md").exists());
    }
}
