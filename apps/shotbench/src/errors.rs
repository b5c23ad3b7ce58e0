use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
///
/// `Config` and `Alignment` abort a run. `Invocation` is recorded per item by
/// the drivers and only surfaces here when a caller chooses to propagate it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invocation error: {0}")]
    Invocation(#[from] LlmError),

    #[error("Alignment error: {predictions} predictions for {gold} gold labels")]
    Alignment { predictions: usize, gold: usize },

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("Report export error: {0}")]
    Export(String),
}
