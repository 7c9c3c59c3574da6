//! Pie chart data and the chart renderer trait

use serde::{Deserialize, Serialize};

use crate::{Error, Result, SentimentDistribution};

pub const POSITIVE_COLOR: &str = "#28a745";
pub const NEGATIVE_COLOR: &str = "#dc3545";
pub const NEUTRAL_COLOR: &str = "#6c757d";
pub const PRODUCT_COLOR: &str = "#4285f4";
pub const NON_PRODUCT_COLOR: &str = "#fd7e14";

/// Where the chart legend is drawn relative to the pie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

/// Categorical data for a single pie chart.
///
/// Labels, values and colors are aligned positionally. Construction rejects
/// misaligned input and negative or non-finite values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    labels: Vec<String>,
    values: Vec<f64>,
    colors: Vec<String>,
    pub legend: LegendPosition,
    pub border_width: u32,
    pub responsive: bool,
}

impl PieChart {
    pub fn new<L, C>(labels: Vec<L>, values: Vec<f64>, colors: Vec<C>) -> Result<Self>
    where
        L: Into<String>,
        C: Into<String>,
    {
        if labels.len() != values.len() || labels.len() != colors.len() {
            return Err(Error::Chart(format!(
                "misaligned chart data: {} labels, {} values, {} colors",
                labels.len(),
                values.len(),
                colors.len()
            )));
        }

        if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(Error::Chart(format!(
                "chart values must be non-negative numbers, got {}",
                bad
            )));
        }

        Ok(Self {
            labels: labels.into_iter().map(Into::into).collect(),
            values,
            colors: colors.into_iter().map(Into::into).collect(),
            legend: LegendPosition::Bottom,
            border_width: 1,
            responsive: true,
        })
    }

    /// Sentiment distribution pie: Positive, Negative, Neutral
    pub fn sentiment(distribution: &SentimentDistribution) -> Result<Self> {
        Self::new(
            vec!["Positive", "Negative", "Neutral"],
            vec![
                distribution.positive as f64,
                distribution.negative as f64,
                distribution.neutral as f64,
            ],
            vec![POSITIVE_COLOR, NEGATIVE_COLOR, NEUTRAL_COLOR],
        )
    }

    /// Product focus pie: product related vs everything else
    pub fn focus(product_related: u64, non_product_related: u64) -> Result<Self> {
        Self::new(
            vec!["Product Related", "Non-Product Related"],
            vec![product_related as f64, non_product_related as f64],
            vec![PRODUCT_COLOR, NON_PRODUCT_COLOR],
        )
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Iterate `(label, value, color)` triples in dataset order
    pub fn slices(&self) -> impl Iterator<Item = (&str, f64, &str)> {
        self.labels
            .iter()
            .zip(&self.values)
            .zip(&self.colors)
            .map(|((label, value), color)| (label.as_str(), *value, color.as_str()))
    }
}

/// Handle to a live chart, returned by the renderer and passed back to destroy it
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ChartHandle {
    id: u64,
    surface_id: String,
}

impl ChartHandle {
    pub fn new(id: u64, surface_id: impl Into<String>) -> Self {
        Self {
            id,
            surface_id: surface_id.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }
}

/// Trait for pie chart backends
///
/// A drawing surface holds at most one live chart. Callers destroy the previous
/// handle before creating a new chart on the same surface.
pub trait ChartRenderer {
    /// Draw a pie chart on the named surface
    fn create_pie(&mut self, surface_id: &str, chart: &PieChart) -> Result<ChartHandle>;

    /// Release the resources held by a chart
    fn destroy(&mut self, handle: ChartHandle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_dataset_alignment() {
        let distribution = SentimentDistribution {
            positive: 3,
            negative: 1,
            neutral: 2,
        };
        let chart = PieChart::sentiment(&distribution).unwrap();

        assert_eq!(chart.labels(), ["Positive", "Negative", "Neutral"]);
        assert_eq!(chart.values(), [3.0, 1.0, 2.0]);
        assert_eq!(chart.colors(), [POSITIVE_COLOR, NEGATIVE_COLOR, NEUTRAL_COLOR]);
        assert_eq!(chart.legend, LegendPosition::Bottom);
        assert_eq!(chart.total(), 6.0);
    }

    #[test]
    fn test_focus_chart() {
        let chart = PieChart::focus(8, 2).unwrap();
        let slices: Vec<_> = chart.slices().collect();
        assert_eq!(
            slices,
            vec![
                ("Product Related", 8.0, PRODUCT_COLOR),
                ("Non-Product Related", 2.0, NON_PRODUCT_COLOR),
            ]
        );
    }

    #[test]
    fn test_rejects_misaligned_data() {
        let err = PieChart::new(vec!["a", "b"], vec![1.0], vec!["#000", "#fff"]).unwrap_err();
        assert!(matches!(err, Error::Chart(_)));
    }

    #[test]
    fn test_rejects_negative_and_nan() {
        assert!(PieChart::new(vec!["a"], vec![-1.0], vec!["#000"]).is_err());
        assert!(PieChart::new(vec!["a"], vec![f64::NAN], vec!["#000"]).is_err());
    }
}
