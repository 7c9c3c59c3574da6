//! Pie charts drawn as colored stacked bars with a legend

use colored::*;
use std::collections::HashMap;
use std::io::{self, Write};
use tracing::debug;

use revsent_core::{ids, ChartHandle, ChartRenderer, Error, LegendPosition, PieChart, Result};

const BAR_WIDTH: usize = 40;

/// Terminal chart backend.
///
/// Each surface id holds at most one live chart; creating a second one without
/// destroying the first is an error.
pub struct TerminalCharts<W: Write> {
    out: W,
    next_id: u64,
    live: HashMap<String, u64>,
}

impl TerminalCharts<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalCharts<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            next_id: 0,
            live: HashMap::new(),
        }
    }

    /// Number of charts currently alive across all surfaces
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn live_chart(&self, surface_id: &str) -> Option<u64> {
        self.live.get(surface_id).copied()
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    fn draw(&mut self, surface_id: &str, chart: &PieChart) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", chart_title(surface_id).bold())?;

        let legend = legend_lines(chart);
        if chart.legend == LegendPosition::Top {
            for line in &legend {
                writeln!(self.out, "{}", line)?;
            }
        }

        writeln!(self.out, "{}", stacked_bar(chart, BAR_WIDTH))?;

        if chart.legend != LegendPosition::Top {
            for line in &legend {
                writeln!(self.out, "{}", line)?;
            }
        }

        self.out.flush()
    }
}

impl<W: Write> ChartRenderer for TerminalCharts<W> {
    fn create_pie(&mut self, surface_id: &str, chart: &PieChart) -> Result<ChartHandle> {
        if let Some(id) = self.live.get(surface_id) {
            return Err(Error::Chart(format!(
                "surface '{}' still holds chart {}",
                surface_id, id
            )));
        }

        self.draw(surface_id, chart)?;

        self.next_id += 1;
        self.live.insert(surface_id.to_string(), self.next_id);
        debug!(surface_id, chart_id = self.next_id, "chart created");
        Ok(ChartHandle::new(self.next_id, surface_id))
    }

    fn destroy(&mut self, handle: ChartHandle) {
        if self.live.get(handle.surface_id()) == Some(&handle.id()) {
            self.live.remove(handle.surface_id());
            debug!(surface_id = handle.surface_id(), chart_id = handle.id(), "chart destroyed");
        }
    }
}

fn chart_title(surface_id: &str) -> &str {
    match surface_id {
        ids::SENTIMENT_CHART => "Sentiment Distribution",
        ids::FOCUS_CHART => "Review Focus",
        other => other,
    }
}

/// Parse `#rrggbb` into its components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| -> Option<u8> {
        u8::from_str_radix(digits.get(range)?, 16).ok()
    };
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn paint(text: &str, hex: &str) -> ColoredString {
    match parse_hex_color(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

fn percent(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

/// One bar of `width` cells split among the slices in proportion to their values.
///
/// Segment ends are rounded cumulatively so the segments always fill the bar exactly.
pub fn stacked_bar(chart: &PieChart, width: usize) -> String {
    let total = chart.total();
    if total <= 0.0 {
        return "░".repeat(width).dimmed().to_string();
    }

    let mut bar = String::new();
    let mut cumulative = 0.0;
    let mut drawn = 0;
    for (_, value, color) in chart.slices() {
        cumulative += value;
        let end = ((cumulative / total) * width as f64).round() as usize;
        let cells = end.saturating_sub(drawn);
        drawn += cells;
        bar.push_str(&paint(&"█".repeat(cells), color).to_string());
    }
    bar
}

fn legend_lines(chart: &PieChart) -> Vec<String> {
    let total = chart.total();
    chart
        .slices()
        .map(|(label, value, color)| {
            format!(
                "  {} {:<20} {:>6} {:>6.1}%",
                paint("■", color),
                label,
                value,
                percent(value, total)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charts() -> TerminalCharts<Vec<u8>> {
        colored::control::set_override(false);
        TerminalCharts::new(Vec::new())
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#28a745"), Some((0x28, 0xa7, 0x45)));
        assert_eq!(parse_hex_color("28a745"), None);
        assert_eq!(parse_hex_color("#fff"), None);
    }

    #[test]
    fn test_stacked_bar_fills_width() {
        colored::control::set_override(false);
        let chart =
            PieChart::new(vec!["a", "b", "c"], vec![1.0, 1.0, 1.0], vec!["#000000"; 3]).unwrap();
        assert_eq!(stacked_bar(&chart, 10).chars().count(), 10);

        let empty = PieChart::focus(0, 0).unwrap();
        assert_eq!(stacked_bar(&empty, 10), "░".repeat(10));
    }

    #[test]
    fn test_second_chart_on_live_surface_is_rejected() {
        let mut charts = charts();
        let chart = PieChart::focus(3, 1).unwrap();

        let handle = charts.create_pie(ids::FOCUS_CHART, &chart).unwrap();
        assert!(charts.create_pie(ids::FOCUS_CHART, &chart).is_err());

        charts.destroy(handle);
        assert_eq!(charts.live_count(), 0);
        assert!(charts.create_pie(ids::FOCUS_CHART, &chart).is_ok());
        assert_eq!(charts.live_count(), 1);
    }

    #[test]
    fn test_stale_handle_does_not_remove_newer_chart() {
        let mut charts = charts();
        let chart = PieChart::focus(3, 1).unwrap();

        let first = charts.create_pie(ids::FOCUS_CHART, &chart).unwrap();
        let stale = ChartHandle::new(first.id(), ids::FOCUS_CHART);
        charts.destroy(first);
        let second = charts.create_pie(ids::FOCUS_CHART, &chart).unwrap();

        charts.destroy(stale);
        assert_eq!(charts.live_chart(ids::FOCUS_CHART), Some(second.id()));
    }
}
