//! Response normalizer: maps a free-text model reply to a canonical label.
//!
//! Rules, first match wins, on the trimmed lower-cased reply:
//! 1. contains "positive" → Positive
//! 2. contains "negative" → Negative
//! 3. contains "neutral"  → Neutral
//! 4. equals "pos" | "p" | "+" → Positive
//! 5. equals "neg" | "n" | "-" → Negative
//!
//! A reply mentioning both "positive" and "negative" resolves to Positive.
//! Earlier reported results depend on that order; keep it.

use crate::sentiment::models::{Label, Prediction};

const POSITIVE_ABBREVIATIONS: &[&str] = &["pos", "p", "+"];
const NEGATIVE_ABBREVIATIONS: &[&str] = &["neg", "n", "-"];

/// Returns the canonical label for `raw`, or `None` when nothing matches.
pub fn normalize(raw: &str) -> Option<Label> {
    let s = raw.trim().to_lowercase();

    if s.contains("positive") {
        Some(Label::Positive)
    } else if s.contains("negative") {
        Some(Label::Negative)
    } else if s.contains("neutral") {
        Some(Label::Neutral)
    } else if POSITIVE_ABBREVIATIONS.contains(&s.as_str()) {
        Some(Label::Positive)
    } else if NEGATIVE_ABBREVIATIONS.contains(&s.as_str()) {
        Some(Label::Negative)
    } else {
        None
    }
}

/// Tags the reply: a recognized label, or the untouched original text.
pub fn classify_reply(raw: &str) -> Prediction {
    match normalize(raw) {
        Some(label) => Prediction::Recognized(label),
        None => Prediction::Unrecognized(raw.to_string()),
    }
}
