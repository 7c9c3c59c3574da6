//! Request and response types exchanged with the analysis service

use serde::{Deserialize, Serialize};

/// Form data submitted for one analysis cycle.
///
/// The URL is opaque here: an empty or foreign URL is still sent, and the
/// server decides whether it is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub product_url: String,
}

impl AnalysisRequest {
    pub fn new(product_url: impl Into<String>) -> Self {
        Self {
            product_url: product_url.into(),
        }
    }
}

/// Review counts per sentiment class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentimentDistribution {
    #[serde(rename = "Positive")]
    pub positive: u64,
    #[serde(rename = "Negative")]
    pub negative: u64,
    #[serde(rename = "Neutral")]
    pub neutral: u64,
}

/// Per-review analysis row, in server order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRow {
    pub rating: f64,
    pub sentiment: String,
    pub product_related: bool,
    pub summary: String,
}

/// Successful response body of `POST /analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_summary: String,
    #[serde(default)]
    pub overall_sentiment_score: Option<f64>,
    #[serde(default)]
    pub overall_sentiment: Option<String>,
    pub sentiment_distribution: SentimentDistribution,
    pub product_related: u64,
    pub non_product_related: u64,
    pub detailed_analysis: Vec<ReviewRow>,
}

/// Failure response body; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Response body of `GET /status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
}

impl ServiceStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
