use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// Class name recorded for an item whose invocation failed.
pub const ERROR_CLASS: &str = "<error>";

/// The three sentiment classes a reply can be normalized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

impl Label {
    /// Row and column order of the confusion matrix.
    pub const CONFUSION_ORDER: [Label; 3] = [Label::Positive, Label::Neutral, Label::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "Positive",
            Label::Negative => "Negative",
            Label::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentence paired with its gold label. Used for exemplars and the test set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledExample {
    pub text: &'static str,
    pub label: Label,
}

impl LabeledExample {
    pub const fn new(text: &'static str, label: Label) -> Self {
        Self { text, label }
    }
}

/// Prompting strategy under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Strategy {
    ZeroShot,
    FiveShot,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::ZeroShot, Strategy::FiveShot];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::ZeroShot => "Zero-Shot",
            Strategy::FiveShot => "Five-Shot",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one item under one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction {
    /// The reply normalized to a canonical label.
    Recognized(Label),
    /// No label could be read; carries the reply exactly as received.
    Unrecognized(String),
    /// The external call failed; carries the error message.
    Failed(String),
}

impl Prediction {
    /// Name this prediction is scored under. Unrecognized replies become
    /// their own class, failures share the `<error>` sentinel. A reply that
    /// reads exactly like the sentinel is quoted so the two stay apart.
    pub fn class_name(&self) -> Cow<'_, str> {
        match self {
            Prediction::Recognized(label) => Cow::Borrowed(label.as_str()),
            Prediction::Unrecognized(raw) if raw == ERROR_CLASS => Cow::Owned(format!("{raw:?}")),
            Prediction::Unrecognized(raw) => Cow::Borrowed(raw.as_str()),
            Prediction::Failed(_) => Cow::Borrowed(ERROR_CLASS),
        }
    }

    pub fn label(&self) -> Option<Label> {
        match self {
            Prediction::Recognized(label) => Some(*label),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Prediction::Failed(_))
    }
}
