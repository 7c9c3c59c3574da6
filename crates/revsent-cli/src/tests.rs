//! Snapshot tests for the terminal host

use async_trait::async_trait;
use insta::assert_snapshot;

use crate::{TerminalCharts, TerminalView};
use revsent_core::{
    ids, AnalysisRequest, AnalysisResult, AnalysisService, Error, Result,
    ReviewAnalysisController, ReviewRow, SentimentDistribution, ServiceStatus, SUBMIT_LABEL,
};

enum Scripted {
    Ok(AnalysisResult),
    Rejected(&'static str),
}

#[async_trait]
impl AnalysisService for Scripted {
    async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisResult> {
        match self {
            Scripted::Ok(result) => Ok(result.clone()),
            Scripted::Rejected(message) => Err(Error::request(400, Some(message.to_string()))),
        }
    }

    async fn status(&self) -> Result<ServiceStatus> {
        Ok(ServiceStatus {
            status: "ok".to_string(),
        })
    }
}

type Controller =
    ReviewAnalysisController<Scripted, TerminalView<Vec<u8>, Vec<u8>>, TerminalCharts<Vec<u8>>>;

fn controller(service: Scripted) -> Controller {
    colored::control::set_override(false);
    ReviewAnalysisController::new(
        service,
        TerminalView::new(Vec::new(), Vec::new()),
        TerminalCharts::new(Vec::new()),
    )
}

fn kettle() -> AnalysisResult {
    AnalysisResult {
        overall_summary: "Solid kettle.".to_string(),
        overall_sentiment_score: Some(80.0),
        overall_sentiment: Some("Positive".to_string()),
        sentiment_distribution: SentimentDistribution {
            positive: 4,
            negative: 0,
            neutral: 1,
        },
        product_related: 5,
        non_product_related: 0,
        detailed_analysis: vec![ReviewRow {
            rating: 4.0,
            sentiment: "Positive".to_string(),
            product_related: true,
            summary: "Boils fast".to_string(),
        }],
    }
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim_end().to_string()
}

#[tokio::test]
async fn test_terminal_report_snapshot() {
    let mut controller = controller(Scripted::Ok(kettle()));
    let outcome = controller
        .handle_submit(&AnalysisRequest::new("https://www.amazon.com/dp/B0KETTLE"))
        .await;
    assert!(outcome.is_rendered());

    assert_snapshot!(text(controller.view().output()), @r###"
    ⏳ Analyzing reviews...

    Overall Summary
    Solid kettle.
    Sentiment score: 80 ████████████████░░░░ Positive

    Rating   Sentiment    Product  Summary
    ────────────────────────────────────────────────────────────
    4 ★      Positive     Yes      Boils fast

    ✅ Analysis complete
    "###);
    assert!(controller.view().errors().is_empty());
}

#[tokio::test]
async fn test_terminal_charts_are_drawn_once_per_surface() {
    let mut controller = controller(Scripted::Ok(kettle()));
    controller.handle_submit(&AnalysisRequest::new("first")).await;
    controller.handle_submit(&AnalysisRequest::new("second")).await;

    let charts = controller.charts();
    assert_eq!(charts.live_count(), 2);
    assert!(charts.live_chart(ids::SENTIMENT_CHART).is_some());
    assert!(charts.live_chart(ids::FOCUS_CHART).is_some());

    let drawn = text(charts.output());
    assert_eq!(drawn.matches("Sentiment Distribution").count(), 2);
    assert_eq!(drawn.matches("Review Focus").count(), 2);
    assert!(drawn.contains("80.0%"));
    assert!(drawn.contains("100.0%"));
}

#[tokio::test]
async fn test_terminal_failure_goes_to_error_stream() {
    let mut controller = controller(Scripted::Rejected("Invalid URL"));
    controller.handle_submit(&AnalysisRequest::new("ftp://nowhere")).await;

    let view = controller.view();
    assert_eq!(text(view.errors()), "❌ Error: Invalid URL");
    assert!(!view.is_loading());
    assert!(!view.results_visible());
    assert!(view.submit_enabled());
    assert_eq!(view.submit_label(), SUBMIT_LABEL);
    assert_eq!(text(view.output()), "⏳ Analyzing reviews...");
}
