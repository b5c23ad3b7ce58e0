//! Scoring of prediction sequences against gold labels.
//!
//! Class universe for precision/recall/F1 is the sorted union of gold label
//! names and predicted class names, so unrecognized replies and failures are
//! classes of their own that never match a gold label. Zero-division yields 0.
//! The confusion matrix is restricted to `Label::CONFUSION_ORDER`.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::errors::AppError;
use crate::sentiment::models::{Label, Prediction};

const REPORT_DIGITS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassMetrics {
    pub class: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Averages {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationReport {
    pub per_class: Vec<ClassMetrics>,
    pub accuracy: f64,
    pub macro_avg: Averages,
    pub weighted_avg: Averages,
    pub total: usize,
}

/// Rows are gold labels, columns predictions, both in `labels` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    pub labels: [Label; 3],
    pub counts: [[usize; 3]; 3],
}

/// Fails with `AlignmentError` unless there is exactly one prediction per gold label.
pub fn ensure_aligned(gold: &[Label], predictions: &[Prediction]) -> Result<(), AppError> {
    if gold.len() != predictions.len() {
        return Err(AppError::Alignment {
            predictions: predictions.len(),
            gold: gold.len(),
        });
    }
    Ok(())
}

/// Fraction of items whose prediction equals the gold label. 0.0 for an empty set.
pub fn accuracy(gold: &[Label], predictions: &[Prediction]) -> Result<f64, AppError> {
    ensure_aligned(gold, predictions)?;
    if gold.is_empty() {
        return Ok(0.0);
    }
    let correct = gold
        .iter()
        .zip(predictions)
        .filter(|(g, p)| p.label() == Some(**g))
        .count();
    Ok(correct as f64 / gold.len() as f64)
}

/// Unweighted mean of per-class F1 over the class universe.
pub fn macro_f1(gold: &[Label], predictions: &[Prediction]) -> Result<f64, AppError> {
    Ok(classification_report(gold, predictions)?.macro_avg.f1)
}

pub fn classification_report(
    gold: &[Label],
    predictions: &[Prediction],
) -> Result<ClassificationReport, AppError> {
    ensure_aligned(gold, predictions)?;

    let predicted: Vec<String> = predictions
        .iter()
        .map(|p| p.class_name().into_owned())
        .collect();

    let universe: BTreeSet<&str> = gold
        .iter()
        .map(|g| g.as_str())
        .chain(predicted.iter().map(|p| p.as_str()))
        .collect();

    let per_class: Vec<ClassMetrics> = universe
        .iter()
        .map(|&class| {
            let support = gold.iter().filter(|g| g.as_str() == class).count();
            let predicted_count = predicted.iter().filter(|p| p.as_str() == class).count();
            let true_positives = gold
                .iter()
                .zip(&predicted)
                .filter(|(g, p)| g.as_str() == class && p.as_str() == class)
                .count();

            let precision = ratio(true_positives, predicted_count);
            let recall = ratio(true_positives, support);
            ClassMetrics {
                class: class.to_string(),
                precision,
                recall,
                f1: harmonic_mean(precision, recall),
                support,
            }
        })
        .collect();

    let macro_avg = average(&per_class, |_| 1.0);
    let total = gold.len();
    let weighted_avg = average(&per_class, |m| m.support as f64);

    Ok(ClassificationReport {
        accuracy: accuracy(gold, predictions)?,
        per_class,
        macro_avg,
        weighted_avg,
        total,
    })
}

pub fn confusion_matrix(
    gold: &[Label],
    predictions: &[Prediction],
) -> Result<ConfusionMatrix, AppError> {
    ensure_aligned(gold, predictions)?;

    let labels = Label::CONFUSION_ORDER;
    let index_of = |label: Label| labels.iter().position(|&l| l == label);
    let mut counts = [[0usize; 3]; 3];

    for (g, p) in gold.iter().zip(predictions) {
        if let (Some(row), Some(col)) = (index_of(*g), p.label().and_then(index_of)) {
            counts[row][col] += 1;
        }
    }

    Ok(ConfusionMatrix { labels, counts })
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn harmonic_mean(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    }
}

fn average<W>(rows: &[ClassMetrics], weight: W) -> Averages
where
    W: Fn(&ClassMetrics) -> f64,
{
    let total_weight: f64 = rows.iter().map(&weight).sum();
    if total_weight == 0.0 {
        return Averages {
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
        };
    }
    let weighted = |field: fn(&ClassMetrics) -> f64| {
        rows.iter().map(|m| weight(m) * field(m)).sum::<f64>() / total_weight
    };
    Averages {
        precision: weighted(|m: &ClassMetrics| m.precision),
        recall: weighted(|m: &ClassMetrics| m.recall),
        f1: weighted(|m: &ClassMetrics| m.f1),
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .per_class
            .iter()
            .map(|m| m.class.chars().count())
            .chain(std::iter::once("weighted avg".len()))
            .max()
            .unwrap_or(0);
        let d = REPORT_DIGITS;

        writeln!(
            f,
            "{:>width$}  {:>9} {:>9} {:>9} {:>9}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for m in &self.per_class {
            writeln!(
                f,
                "{:>width$}  {:>9.d$} {:>9.d$} {:>9.d$} {:>9}",
                m.class, m.precision, m.recall, m.f1, m.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>width$}  {:>9} {:>9} {:>9.d$} {:>9}",
            "accuracy", "", "", self.accuracy, self.total
        )?;
        for (name, avg) in [
            ("macro avg", &self.macro_avg),
            ("weighted avg", &self.weighted_avg),
        ] {
            writeln!(
                f,
                "{:>width$}  {:>9.d$} {:>9.d$} {:>9.d$} {:>9}",
                name, avg.precision, avg.recall, avg.f1, self.total
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>11}", "gold \\ pred")?;
        for label in &self.labels {
            write!(f, " {:>9}", label.as_str())?;
        }
        writeln!(f)?;
        for (label, row) in self.labels.iter().zip(&self.counts) {
            write!(f, "{:>11}", label.as_str())?;
            for count in row {
                write!(f, " {count:>9}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::models::Label::{Negative, Neutral, Positive};

    fn recognized(labels: &[Label]) -> Vec<Prediction> {
        labels.iter().map(|&l| Prediction::Recognized(l)).collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_perfect_predictions_score_one() {
        let gold = [Positive, Negative, Neutral];
        let preds = recognized(&[Positive, Negative, Neutral]);
        assert_eq!(accuracy(&gold, &preds).unwrap(), 1.0);
        assert_eq!(macro_f1(&gold, &preds).unwrap(), 1.0);
    }

    #[test]
    fn test_fully_mismatched_predictions_score_zero() {
        let gold = [Positive, Negative, Neutral];
        let preds = recognized(&[Negative, Neutral, Positive]);
        assert_eq!(accuracy(&gold, &preds).unwrap(), 0.0);
        assert_eq!(macro_f1(&gold, &preds).unwrap(), 0.0);
    }

    #[test]
    fn test_swapped_pair_keeps_matching_third_item() {
        // Only the first two are swapped; Neutral still matches.
        let gold = [Positive, Negative, Neutral];
        let preds = recognized(&[Negative, Positive, Neutral]);
        assert!(approx(accuracy(&gold, &preds).unwrap(), 1.0 / 3.0));
    }

    #[test]
    fn test_unrecognized_reply_is_its_own_class() {
        let gold = [Positive, Negative, Neutral, Positive];
        let preds = vec![
            Prediction::Recognized(Positive),
            Prediction::Unrecognized("maybe".into()),
            Prediction::Recognized(Neutral),
            Prediction::Recognized(Negative),
        ];
        let report = classification_report(&gold, &preds).unwrap();

        let classes: Vec<&str> = report.per_class.iter().map(|m| m.class.as_str()).collect();
        assert_eq!(classes, ["Negative", "Neutral", "Positive", "maybe"]);
        assert!(approx(report.accuracy, 0.5));

        let positive = &report.per_class[2];
        assert!(approx(positive.precision, 1.0));
        assert!(approx(positive.recall, 0.5));
        assert!(approx(positive.f1, 2.0 / 3.0));
        assert_eq!(positive.support, 2);

        let maybe = &report.per_class[3];
        assert_eq!((maybe.precision, maybe.recall, maybe.f1, maybe.support), (0.0, 0.0, 0.0, 0));

        // (0 + 1 + 2/3 + 0) / 4
        assert!(approx(report.macro_avg.f1, (1.0 + 2.0 / 3.0) / 4.0));
        // supports 1, 1, 2, 0 over 4 items
        assert!(approx(report.weighted_avg.f1, (1.0 + 2.0 * 2.0 / 3.0) / 4.0));
    }

    #[test]
    fn test_failures_share_error_sentinel_class() {
        let gold = [Positive, Negative, Neutral];
        let preds = vec![
            Prediction::Failed("timeout".into()),
            Prediction::Failed("HTTP 500".into()),
            Prediction::Recognized(Neutral),
        ];
        let report = classification_report(&gold, &preds).unwrap();
        let error_rows: Vec<_> = report
            .per_class
            .iter()
            .filter(|m| m.class == crate::sentiment::models::ERROR_CLASS)
            .collect();
        assert_eq!(error_rows.len(), 1);
        assert_eq!(error_rows[0].support, 0);
        assert!(approx(report.accuracy, 1.0 / 3.0));
    }

    #[test]
    fn test_report_over_raw_replies_and_failures_together() {
        let gold = [Positive, Negative, Neutral];
        let preds = vec![
            Prediction::Unrecognized("Mostly fine".into()),
            Prediction::Failed("timeout".into()),
            Prediction::Recognized(Neutral),
        ];
        let report = classification_report(&gold, &preds).unwrap();
        let classes: Vec<&str> = report.per_class.iter().map(|m| m.class.as_str()).collect();
        assert_eq!(
            classes,
            ["<error>", "Mostly fine", "Negative", "Neutral", "Positive"]
        );
        assert!(approx(macro_f1(&gold, &preds).unwrap(), 1.0 / 5.0));
    }

    #[test]
    fn test_literal_sentinel_reply_not_merged_with_failures() {
        let gold = [Positive, Negative];
        let preds = vec![
            Prediction::Unrecognized("<error>".into()),
            Prediction::Failed("timeout".into()),
        ];
        let report = classification_report(&gold, &preds).unwrap();
        let classes: Vec<&str> = report.per_class.iter().map(|m| m.class.as_str()).collect();
        assert_eq!(classes, ["\"<error>\"", "<error>", "Negative", "Positive"]);
    }

    #[test]
    fn test_length_mismatch_is_alignment_error() {
        let gold = [Positive, Negative];
        let preds = recognized(&[Positive]);
        let err = accuracy(&gold, &preds).unwrap_err();
        assert!(matches!(err, AppError::Alignment { predictions: 1, gold: 2 }));
        assert!(classification_report(&gold, &preds).is_err());
        assert!(confusion_matrix(&gold, &preds).is_err());
    }

    #[test]
    fn test_empty_sets_score_zero() {
        assert_eq!(accuracy(&[], &[]).unwrap(), 0.0);
        assert_eq!(macro_f1(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_confusion_matrix_rows_gold_columns_predicted() {
        let gold = [Positive, Negative, Neutral, Positive, Negative];
        let preds = vec![
            Prediction::Recognized(Positive),
            Prediction::Unrecognized("dunno".into()),
            Prediction::Recognized(Neutral),
            Prediction::Recognized(Negative),
            Prediction::Recognized(Negative),
        ];
        let cm = confusion_matrix(&gold, &preds).unwrap();
        assert_eq!(cm.labels, [Positive, Neutral, Negative]);
        assert_eq!(cm.counts, [[1, 0, 1], [0, 1, 0], [0, 0, 1]]);
    }

    #[test]
    fn test_report_rendering() {
        let gold = [Positive, Negative, Neutral, Positive];
        let preds = vec![
            Prediction::Recognized(Positive),
            Prediction::Unrecognized("maybe".into()),
            Prediction::Recognized(Neutral),
            Prediction::Recognized(Negative),
        ];
        let text = classification_report(&gold, &preds).unwrap().to_string();
        let positive_row = format!(
            "Positive{}1.00{}0.50{}0.67{}2",
            " ".repeat(7),
            " ".repeat(6),
            " ".repeat(6),
            " ".repeat(9)
        );
        assert!(text.contains(&positive_row), "report was:\n{text}");
        assert!(text.contains("accuracy"));
        assert!(text.contains("macro avg"));
        assert!(text.contains("weighted avg"));
        assert!(text.lines().next().unwrap().contains("precision"));
    }

    #[test]
    fn test_confusion_matrix_rendering_lists_labels_in_order() {
        let cm = confusion_matrix(&[Positive], &recognized(&[Positive])).unwrap();
        let text = cm.to_string();
        let header = text.lines().next().unwrap();
        let p = header.find("Positive").unwrap();
        let neu = header.find("Neutral").unwrap();
        let neg = header.find("Negative").unwrap();
        assert!(p < neu && neu < neg);
    }
}
