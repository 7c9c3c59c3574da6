//! The element surface the controller renders into

/// Stable identifiers of the page elements the controller binds to
pub mod ids {
    pub const FORM: &str = "analyzeForm";
    pub const LOADING: &str = "loadingSection";
    pub const RESULTS: &str = "resultsSection";
    pub const SUMMARY: &str = "overallSummary";
    pub const SCORE_GAUGE: &str = "sentimentScoreCircle";
    pub const SCORE_VALUE: &str = "sentimentScoreValue";
    pub const SENTIMENT_LABEL: &str = "sentimentLabel";
    pub const TABLE_BODY: &str = "reviewTableBody";
    pub const SUBMIT_BUTTON: &str = "analyzeBtn";
    pub const SENTIMENT_CHART: &str = "sentimentChart";
    pub const FOCUS_CHART: &str = "focusChart";
}

/// Submit control label while idle
pub const SUBMIT_LABEL: &str = "Analyze Reviews";
/// Submit control label while a request is in flight
pub const BUSY_LABEL: &str = "Analyzing...";

/// One table cell: plain text plus an optional style class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub text: String,
    pub class: Option<String>,
}

impl TableCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    pub fn styled(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: Some(class.into()),
        }
    }
}

/// One rendered review row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub rating: TableCell,
    pub sentiment: TableCell,
    pub relation: TableCell,
    pub summary: TableCell,
}

impl TableRow {
    pub fn cells(&self) -> [&TableCell; 4] {
        [&self.rating, &self.sentiment, &self.relation, &self.summary]
    }
}

/// Trait for the host surface (a browser page, a terminal, a test recorder)
///
/// All text is inserted as plain text; hosts must never interpret it as markup.
pub trait ResultsView {
    fn set_loading_visible(&mut self, visible: bool);

    fn set_results_visible(&mut self, visible: bool);

    /// Enable or disable the submit control and set its visible label
    fn set_submit_control(&mut self, enabled: bool, label: &str);

    fn set_summary(&mut self, text: &str);

    /// Numeric score display
    fn set_score_value(&mut self, score: f64);

    /// Gauge fill, as a percentage of 100
    fn set_score_gauge(&mut self, percent: f64);

    /// Replace the sentiment label text and its full class list
    fn set_sentiment_label(&mut self, text: &str, classes: &[String]);

    fn clear_table(&mut self);

    fn append_row(&mut self, row: &TableRow);

    /// Blocking, user-facing failure notification
    fn notify(&mut self, message: &str);
}
