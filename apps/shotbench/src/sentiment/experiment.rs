//! Sentiment experiment: wires the driver, the report printout and the chart.
//!
//! Flow: run both strategies over TEST_DATA → evaluate → print reports →
//! export JSON → render chart. Export and chart run last and can only log a
//! warning.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::Completer;
use crate::pacing::Pacer;
use crate::sentiment::chart::{render_text, write_svg, ChartData};
use crate::sentiment::dataset::TEST_DATA;
use crate::sentiment::driver::{DriverSettings, EvaluationDriver, StrategyReport};
use crate::sentiment::prompts::PromptBuilder;

#[derive(Debug, Clone)]
pub struct ExperimentOptions {
    /// `None` skips chart rendering entirely.
    pub chart_path: Option<PathBuf>,
    /// `None` skips the JSON report export.
    pub report_path: Option<PathBuf>,
}

impl ExperimentOptions {
    pub fn from_config(config: &Config, no_chart: bool, report_path: Option<PathBuf>) -> Self {
        Self {
            chart_path: (!no_chart).then(|| config.chart_path.clone()),
            report_path,
        }
    }
}

#[derive(Debug, Serialize)]
struct ReportExport<'a> {
    model: &'a str,
    test_items: usize,
    strategies: &'a [StrategyReport],
}

pub async fn run_experiment(
    config: &Config,
    completer: &dyn Completer,
    pacer: &dyn Pacer,
    options: &ExperimentOptions,
) -> Result<Vec<StrategyReport>, AppError> {
    println!("\n=== Running Sentiment Classification Experiment ===\n");

    let driver = EvaluationDriver::new(
        completer,
        pacer,
        PromptBuilder::default(),
        DriverSettings::from(config),
    );
    let run = driver.run(&TEST_DATA).await;
    let reports = run.evaluate()?;

    for report in &reports {
        print_report(report);
    }

    if let Some(path) = &options.report_path {
        match write_report_json(path, &config.model, &reports) {
            Ok(()) => info!("Reports written to {}", path.display()),
            Err(e) => warn!("Skipping report export: {e}"),
        }
    }

    if let Some(path) = &options.chart_path {
        match ChartData::from_predictions(&run.gold, &run.zero_shot, &run.five_shot) {
            Ok(data) => {
                println!("\n{}", render_text(&data));
                match write_svg(path, &data) {
                    Ok(()) => info!("Chart written to {}", path.display()),
                    Err(e) => warn!("Skipping chart: {e}"),
                }
            }
            Err(e) => warn!("Skipping chart: {e}"),
        }
    }

    Ok(reports)
}

/// Writes both strategy reports, with the model name, as pretty-printed JSON.
pub fn write_report_json(
    path: &Path,
    model: &str,
    reports: &[StrategyReport],
) -> Result<(), AppError> {
    let export = ReportExport {
        model,
        test_items: reports.first().map_or(0, |r| r.report.total),
        strategies: reports,
    };
    let json =
        serde_json::to_string_pretty(&export).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)
        .map_err(|e| AppError::Export(format!("cannot write {}: {e}", path.display())))
}

fn print_report(report: &StrategyReport) {
    println!("\n--- {} Results ---", report.strategy);
    println!("{}", report.report);
    println!("Confusion matrix:\n{}", report.confusion);
    if report.failures > 0 {
        println!("Failed invocations: {}", report.failures);
    }
}
