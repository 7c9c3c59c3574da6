//! Terminal rendition of the results page

use colored::*;
use std::io::{self, Write};

use revsent_core::{ResultsView, TableCell, TableRow, SUBMIT_LABEL};

const GAUGE_WIDTH: usize = 20;

/// Terminal rendition of the page state.
///
/// The report is buffered while the results section is hidden and printed
/// when it is shown, so a cycle that fails midway prints nothing of it.
pub struct TerminalView<W: Write, E: Write> {
    out: W,
    err: E,
    report: Vec<String>,
    loading: bool,
    results: bool,
    submit_enabled: bool,
    submit_label: String,
    score: Option<f64>,
    gauge: Option<f64>,
}

impl TerminalView<io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> TerminalView<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self {
            out,
            err,
            report: Vec::new(),
            loading: false,
            results: false,
            submit_enabled: true,
            submit_label: SUBMIT_LABEL.to_string(),
            score: None,
            gauge: None,
        }
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn results_visible(&self) -> bool {
        self.results
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn errors(&self) -> &E {
        &self.err
    }

    fn line(&mut self, text: impl std::fmt::Display) {
        // Terminal output is best effort; a closed stdout must not abort the cycle.
        let _ = writeln!(self.out, "{}", text);
    }

    fn report_line(&mut self, text: impl std::fmt::Display) {
        self.report.push(text.to_string());
    }
}

impl<W: Write, E: Write> ResultsView for TerminalView<W, E> {
    fn set_loading_visible(&mut self, visible: bool) {
        if visible && !self.loading {
            self.line(format!("{} Analyzing reviews...", "⏳".yellow()));
            let _ = self.out.flush();
        }
        self.loading = visible;
    }

    fn set_results_visible(&mut self, visible: bool) {
        if visible && !self.results {
            for line in std::mem::take(&mut self.report) {
                self.line(line);
            }
            self.line("");
            self.line(format!("{} Analysis complete", "✅".green()));
        } else if !visible {
            self.report.clear();
        }
        self.results = visible;
    }

    fn set_submit_control(&mut self, enabled: bool, label: &str) {
        self.submit_enabled = enabled;
        self.submit_label = label.to_string();
    }

    fn set_summary(&mut self, text: &str) {
        self.score = None;
        self.gauge = None;
        self.report_line("");
        self.report_line("Overall Summary".bold());
        self.report_line(text);
    }

    fn set_score_value(&mut self, score: f64) {
        self.score = Some(score);
    }

    fn set_score_gauge(&mut self, percent: f64) {
        self.gauge = Some(percent);
    }

    fn set_sentiment_label(&mut self, text: &str, classes: &[String]) {
        let score = self.score.map(|s| s.to_string()).unwrap_or_default();
        let gauge = gauge_bar(self.gauge.unwrap_or(0.0), GAUGE_WIDTH);
        let label = colorize(text, classes.last().map(String::as_str));
        self.report_line(format!("Sentiment score: {} {} {}", score.bold(), gauge, label));
    }

    fn clear_table(&mut self) {
        self.report_line("");
        self.report_line(
            format!(
                "{:<8} {:<12} {:<8} {}",
                "Rating", "Sentiment", "Product", "Summary"
            )
            .bold(),
        );
        self.report_line("─".repeat(60).dimmed());
    }

    fn append_row(&mut self, row: &TableRow) {
        self.report_line(format_row(row));
    }

    fn notify(&mut self, message: &str) {
        let _ = writeln!(self.err, "{} {}", "❌".red(), format!("Error: {}", message).red());
    }
}

/// Filled/empty gauge cells for a score out of 100
pub fn gauge_bar(percent: f64, width: usize) -> String {
    let clamped = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn colorize(text: &str, class: Option<&str>) -> ColoredString {
    match class {
        Some(c) if c.contains("positive") => text.green(),
        Some(c) if c.contains("negative") => text.red(),
        Some(c) if c.contains("mixed") => text.yellow(),
        Some("product-related") => text.blue(),
        Some("non-product-related") => text.truecolor(0xfd, 0x7e, 0x14),
        Some(c) if c.contains("neutral") => text.dimmed(),
        _ => text.normal(),
    }
}

fn pad_cell(cell: &TableCell, width: usize) -> String {
    let padded = format!("{:<width$}", cell.text, width = width);
    colorize(&padded, cell.class.as_deref()).to_string()
}

/// One table line; the summary cell is printed verbatim and unpadded
pub fn format_row(row: &TableRow) -> String {
    format!(
        "{} {} {} {}",
        pad_cell(&row.rating, 8),
        pad_cell(&row.sentiment, 12),
        pad_cell(&row.relation, 8),
        row.summary.text
    )
}
