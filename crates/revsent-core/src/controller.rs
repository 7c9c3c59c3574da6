//! Submit-and-render controller for the review analysis page

use tracing::{debug, info, warn};

use crate::style::{label_class, review_table_row, FALLBACK_SENTIMENT, SENTIMENT_LABEL_CLASS};
use crate::view::{ids, BUSY_LABEL, SUBMIT_LABEL};
use crate::{
    AnalysisRequest, AnalysisResult, AnalysisService, ChartHandle, ChartRenderer, PieChart,
    Result, ResultsView,
};

/// How a submission cycle ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Results were rendered and the results view is visible
    Rendered,
    /// The user was notified with `message`; the results view stays hidden
    Failed { message: String },
}

impl SubmitOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, SubmitOutcome::Rendered)
    }
}

/// Drives one analysis cycle per submission: request, render, cleanup.
///
/// Owns the two live chart handles so each cycle can destroy the previous
/// charts before drawing new ones on the same surfaces.
pub struct ReviewAnalysisController<S: AnalysisService, V: ResultsView, C: ChartRenderer> {
    service: S,
    view: V,
    charts: C,
    sentiment_chart: Option<ChartHandle>,
    focus_chart: Option<ChartHandle>,
}

impl<S: AnalysisService, V: ResultsView, C: ChartRenderer> ReviewAnalysisController<S, V, C> {
    /// Create a controller with no charts drawn yet
    pub fn new(service: S, view: V, charts: C) -> Self {
        Self {
            service,
            view,
            charts,
            sentiment_chart: None,
            focus_chart: None,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn charts(&self) -> &C {
        &self.charts
    }

    pub fn sentiment_chart(&self) -> Option<&ChartHandle> {
        self.sentiment_chart.as_ref()
    }

    pub fn focus_chart(&self) -> Option<&ChartHandle> {
        self.focus_chart.as_ref()
    }

    /// Handle a form submission.
    ///
    /// The submit control is disabled for the duration of the request and is
    /// re-enabled with its idle label exactly once, whichever branch ran.
    pub async fn handle_submit(&mut self, form: &AnalysisRequest) -> SubmitOutcome {
        self.view.set_loading_visible(true);
        self.view.set_results_visible(false);

        let product_url = form.product_url.as_str();
        self.view.set_submit_control(false, BUSY_LABEL);
        debug!(product_url, "submitting analysis request");

        let outcome = match self.submit(form).await {
            Ok(()) => {
                self.view.set_loading_visible(false);
                self.view.set_results_visible(true);
                SubmitOutcome::Rendered
            }
            Err(e) => {
                let message = e.to_string();
                warn!(error = %message, "analysis failed");
                self.view.notify(&message);
                self.view.set_loading_visible(false);
                SubmitOutcome::Failed { message }
            }
        };

        self.view.set_submit_control(true, SUBMIT_LABEL);
        outcome
    }

    async fn submit(&mut self, form: &AnalysisRequest) -> Result<()> {
        let result = self.service.analyze(form).await?;
        self.render_results(&result)
    }

    /// Render summary, score, table and both charts from an analysis result
    pub fn render_results(&mut self, result: &AnalysisResult) -> Result<()> {
        self.view.set_summary(&result.overall_summary);

        if let Some(score) = result.overall_sentiment_score {
            self.view.set_score_value(score);
            self.view.set_score_gauge(score);

            // An empty label counts as missing
            let sentiment = result.overall_sentiment.as_deref().filter(|s| !s.is_empty());
            let label = sentiment.unwrap_or(FALLBACK_SENTIMENT);
            let mut classes = vec![SENTIMENT_LABEL_CLASS.to_string()];
            if let Some(sentiment) = sentiment {
                classes.push(label_class(sentiment));
            }
            self.view.set_sentiment_label(label, &classes);
        }

        self.view.clear_table();
        for review in &result.detailed_analysis {
            self.view.append_row(&review_table_row(review));
        }

        let sentiment = PieChart::sentiment(&result.sentiment_distribution)?;
        self.sentiment_chart = Some(render_pie_chart(
            &mut self.charts,
            ids::SENTIMENT_CHART,
            &sentiment,
            self.sentiment_chart.take(),
        )?);

        let focus = PieChart::focus(result.product_related, result.non_product_related)?;
        self.focus_chart = Some(render_pie_chart(
            &mut self.charts,
            ids::FOCUS_CHART,
            &focus,
            self.focus_chart.take(),
        )?);

        info!(
            rows = result.detailed_analysis.len(),
            "rendered analysis results"
        );
        Ok(())
    }
}

/// Destroy `previous` if present, then draw `chart` on `surface_id`.
///
/// Returns the new handle for the caller to keep until the next cycle.
pub fn render_pie_chart<C: ChartRenderer>(
    renderer: &mut C,
    surface_id: &str,
    chart: &PieChart,
    previous: Option<ChartHandle>,
) -> Result<ChartHandle> {
    if let Some(handle) = previous {
        debug!(surface_id, chart_id = handle.id(), "destroying previous chart");
        renderer.destroy(handle);
    }

    renderer.create_pie(surface_id, chart)
}
