//! Comparison chart: grouped Accuracy / F1-score bars per strategy.
//!
//! Presentational only. Metrics are computed and printed before anything
//! here runs, and a failed write is reported to the caller as `Chart`.

use std::fmt::Write as _;
use std::path::Path;

use crate::errors::AppError;
use crate::sentiment::metrics::{accuracy, macro_f1};
use crate::sentiment::models::{Label, Prediction, Strategy};

pub const CHART_TITLE: &str = "Zero-Shot vs Five-Shot Performance";

const WIDTH: f64 = 700.0;
const HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
/// Bar width as a fraction of the slot given to one strategy.
const BAR_WIDTH: f64 = 0.35;
const ACCURACY_COLOR: &str = "#1f77b4";
const F1_COLOR: &str = "#ff7f0e";
const TEXT_BAR_CELLS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyScores {
    pub strategy: Strategy,
    pub accuracy: f64,
    pub f1: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub groups: Vec<StrategyScores>,
}

impl ChartData {
    pub fn from_predictions(
        gold: &[Label],
        zero_shot: &[Prediction],
        five_shot: &[Prediction],
    ) -> Result<Self, AppError> {
        let mut groups = Vec::with_capacity(2);
        for (strategy, predictions) in [
            (Strategy::ZeroShot, zero_shot),
            (Strategy::FiveShot, five_shot),
        ] {
            groups.push(StrategyScores {
                strategy,
                accuracy: accuracy(gold, predictions)?,
                f1: macro_f1(gold, predictions)?,
            });
        }
        Ok(Self { groups })
    }
}

/// Renders the chart as a standalone SVG document.
pub fn render_svg(data: &ChartData) -> String {
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_h;
    let slot = plot_w / data.groups.len().max(1) as f64;
    let bar_w = slot * BAR_WIDTH;
    let y_of = |v: f64| baseline - v.clamp(0.0, 1.0) * plot_h;

    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="30" text-anchor="middle" font-size="16">{}</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        escape(CHART_TITLE)
    );

    for step in 0..=5 {
        let v = step as f64 * 0.2;
        let y = y_of(v);
        let _ = writeln!(
            svg,
            r##"<line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#dddddd"/>"##,
            MARGIN_LEFT + plot_w
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11">{v:.1}</text>"#,
            MARGIN_LEFT - 6.0,
            y + 4.0
        );
    }
    let _ = writeln!(
        svg,
        r#"<text x="20" y="{:.1}" text-anchor="middle" font-size="13" transform="rotate(-90 20 {:.1})">Score</text>"#,
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0
    );

    for (i, group) in data.groups.iter().enumerate() {
        let center = MARGIN_LEFT + slot * (i as f64 + 0.5);
        for (offset, value, color) in [
            (-bar_w, group.accuracy, ACCURACY_COLOR),
            (0.0, group.f1, F1_COLOR),
        ] {
            let x = center + offset;
            let y = y_of(value);
            let _ = writeln!(
                svg,
                r#"<rect x="{x:.1}" y="{y:.1}" width="{bar_w:.1}" height="{:.1}" fill="{color}"/>"#,
                baseline - y
            );
            let _ = writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11">{value:.2}</text>"#,
                x + bar_w / 2.0,
                y - 3.0
            );
        }
        let _ = writeln!(
            svg,
            r#"<text x="{center:.1}" y="{:.1}" text-anchor="middle" font-size="12">{}</text>"#,
            baseline + 20.0,
            escape(group.strategy.as_str())
        );
    }

    let _ = writeln!(
        svg,
        r#"<line x1="{MARGIN_LEFT}" y1="{baseline:.1}" x2="{:.1}" y2="{baseline:.1}" stroke="black"/>"#,
        MARGIN_LEFT + plot_w
    );

    let legend_x = MARGIN_LEFT + plot_w - 110.0;
    for (row, (name, color)) in [("Accuracy", ACCURACY_COLOR), ("F1-score", F1_COLOR)]
        .iter()
        .enumerate()
    {
        let y = MARGIN_TOP + 10.0 + row as f64 * 18.0;
        let _ = writeln!(
            svg,
            r#"<rect x="{legend_x:.1}" y="{y:.1}" width="12" height="12" fill="{color}"/>"#
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" font-size="12">{name}</text>"#,
            legend_x + 18.0,
            y + 10.0
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Compact terminal rendering of the same chart.
pub fn render_text(data: &ChartData) -> String {
    let mut out = format!("{CHART_TITLE}\n");
    for group in &data.groups {
        for (i, (metric, value)) in [("Accuracy", group.accuracy), ("F1-score", group.f1)]
            .into_iter()
            .enumerate()
        {
            let name = if i == 0 { group.strategy.as_str() } else { "" };
            let filled = (value.clamp(0.0, 1.0) * TEXT_BAR_CELLS as f64).round() as usize;
            let _ = writeln!(
                out,
                "{name:<10} {metric:<9} {}{} {value:.2}",
                "█".repeat(filled),
                "░".repeat(TEXT_BAR_CELLS - filled)
            );
        }
    }
    out
}

pub fn write_svg(path: &Path, data: &ChartData) -> Result<(), AppError> {
    std::fs::write(path, render_svg(data))
        .map_err(|e| AppError::Chart(format!("cannot write {}: {e}", path.display())))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
