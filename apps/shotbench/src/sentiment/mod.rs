// Sentiment labeling: zero-shot vs five-shot prompting over a fixed test set.
// Implements: prompt building, reply normalization, evaluation, chart output.
// All model calls go through llm_client::Completer.

pub mod chart;
pub mod dataset;
pub mod driver;
pub mod experiment;
pub mod metrics;
pub mod models;
pub mod normalizer;
pub mod prompts;
