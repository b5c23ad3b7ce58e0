//! Evaluation driver: runs every test item through both prompting strategies.
//!
//! Strictly sequential: an item's zero-shot call completes before its
//! five-shot call starts, and each item finishes before the next begins.
//! A failed call is recorded as a `Prediction::Failed` for that item and the
//! run continues, so both prediction sequences always match the test set.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{Completer, LlmError};
use crate::pacing::Pacer;
use crate::sentiment::metrics::{
    classification_report, confusion_matrix, ClassificationReport, ConfusionMatrix,
};
use crate::sentiment::models::{Label, LabeledExample, Prediction, Strategy};
use crate::sentiment::normalizer::classify_reply;
use crate::sentiment::prompts::PromptBuilder;

/// Per-call generation parameters for label queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverSettings {
    pub max_output_tokens: u32,
    pub temperature: f64,
}

impl From<&Config> for DriverSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_output_tokens: config.label_max_tokens,
            temperature: config.temperature,
        }
    }
}

/// Predictions of one full pass, parallel to the test set.
#[derive(Debug, Clone, Default)]
pub struct ExperimentRun {
    pub gold: Vec<Label>,
    pub zero_shot: Vec<Prediction>,
    pub five_shot: Vec<Prediction>,
}

impl ExperimentRun {
    pub fn predictions(&self, strategy: Strategy) -> &[Prediction] {
        match strategy {
            Strategy::ZeroShot => &self.zero_shot,
            Strategy::FiveShot => &self.five_shot,
        }
    }

    fn push(&mut self, strategy: Strategy, prediction: Prediction) {
        match strategy {
            Strategy::ZeroShot => self.zero_shot.push(prediction),
            Strategy::FiveShot => self.five_shot.push(prediction),
        }
    }

    /// Scores both strategies. Fails with `AlignmentError` if a prediction
    /// sequence does not have one entry per gold label.
    pub fn evaluate(&self) -> Result<Vec<StrategyReport>, AppError> {
        Strategy::ALL
            .iter()
            .map(|&strategy| -> Result<StrategyReport, AppError> {
                let predictions = self.predictions(strategy);
                Ok(StrategyReport {
                    strategy,
                    report: classification_report(&self.gold, predictions)?,
                    confusion: confusion_matrix(&self.gold, predictions)?,
                    failures: predictions.iter().filter(|p| p.is_failure()).count(),
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub report: ClassificationReport,
    pub confusion: ConfusionMatrix,
    /// Items whose invocation failed under this strategy.
    pub failures: usize,
}

pub struct EvaluationDriver<'a> {
    completer: &'a dyn Completer,
    pacer: &'a dyn Pacer,
    prompts: PromptBuilder<'a>,
    settings: DriverSettings,
}

impl<'a> EvaluationDriver<'a> {
    pub fn new(
        completer: &'a dyn Completer,
        pacer: &'a dyn Pacer,
        prompts: PromptBuilder<'a>,
        settings: DriverSettings,
    ) -> Self {
        Self {
            completer,
            pacer,
            prompts,
            settings,
        }
    }

    pub async fn run(&self, test_set: &[LabeledExample]) -> ExperimentRun {
        info!(items = test_set.len(), "Starting sentiment comparison run");

        let mut run = ExperimentRun::default();
        for example in test_set {
            run.gold.push(example.label);
            for strategy in Strategy::ALL {
                let reply = self.query(strategy, example.text).await;
                run.push(strategy, record(strategy, example.text, reply));
            }
        }

        info!("Sentiment comparison run complete");
        run
    }

    async fn query(&self, strategy: Strategy, sentence: &str) -> Result<String, LlmError> {
        let prompt = self.prompts.build(strategy, sentence);
        debug!(%strategy, prompt_len = prompt.len(), "Querying model");
        let reply = self
            .completer
            .complete(
                &prompt,
                self.settings.max_output_tokens,
                self.settings.temperature,
            )
            .await;
        self.pacer.pause().await;
        reply
    }
}

/// Prints the progress line for one reply and turns it into a prediction.
fn record(strategy: Strategy, sentence: &str, reply: Result<String, LlmError>) -> Prediction {
    println!("{}", progress_line(strategy, sentence, &reply));
    match reply {
        Ok(raw) => classify_reply(&raw),
        Err(e) => {
            warn!(%strategy, "Invocation failed for {sentence:?}: {e}");
            Prediction::Failed(e.to_string())
        }
    }
}

/// `[<strategy> RAW] <sentence> -> <reply>`, or `ERROR` with the failure message.
fn progress_line(strategy: Strategy, sentence: &str, reply: &Result<String, LlmError>) -> String {
    match reply {
        Ok(raw) => format!("[{strategy} RAW] {sentence} -> {raw}"),
        Err(e) => format!("[{strategy} ERROR] {sentence} -> {e}"),
    }
}
