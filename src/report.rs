//! Evaluation reporting over the loaded bundle
//!
//! Read-only diagnostics: the classifier's intrinsic feature-importance
//! ranking, and held-out metrics when the training step stored its test
//! labels in the bundle. Neither feeds back into prediction.

use crate::bundle::{HoldoutLabels, ModelBundle};

/// Number of top symptoms shown by default, as in the reference report.
pub const DEFAULT_TOP_K: usize = 10;

/// One ranked entry of the importance report.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedFeature {
    pub name: String,
    pub score: f64,
}

/// Held-out classification metrics, macro-averaged over the full label
/// space of the encoder.
#[derive(Debug, Clone)]
pub struct HoldoutMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// confusion[t][p] = count of samples with true label t predicted as p.
    pub confusion: Vec<Vec<usize>>,
    pub samples: usize,
}

/// The full evaluation report for one loaded bundle.
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub top_features: Vec<RankedFeature>,
    /// None when the bundle carries no held-out labels.
    pub metrics: Option<HoldoutMetrics>,
}

impl EvaluationReport {
    /// Build the report from a loaded bundle.
    pub fn build(bundle: &ModelBundle, top_k: usize) -> Self {
        EvaluationReport {
            top_features: rank_features(bundle, top_k),
            metrics: bundle
                .holdout
                .as_ref()
                .map(|holdout| compute_metrics(holdout, bundle.encoder.n_classes())),
        }
    }
}

/// Rank features by the classifier's intrinsic importance, descending,
/// truncated to `top_k` (never more than the feature count).
pub fn rank_features(bundle: &ModelBundle, top_k: usize) -> Vec<RankedFeature> {
    let importances = bundle.model.feature_importances();
    let mut ranked: Vec<RankedFeature> = bundle
        .feature_names
        .iter()
        .zip(importances)
        .map(|(name, score)| RankedFeature {
            name: name.clone(),
            score,
        })
        .collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(top_k);
    ranked
}

/// Compute accuracy, macro precision/recall/F1, and the confusion matrix.
///
/// Classes never seen in the holdout contribute zero to the macro
/// averages, matching the zero-division convention of the reference
/// metric implementation.
fn compute_metrics(holdout: &HoldoutLabels, n_classes: usize) -> HoldoutMetrics {
    let samples = holdout.y_true.len();
    let mut confusion = vec![vec![0usize; n_classes]; n_classes];
    for (&t, &p) in holdout.y_true.iter().zip(&holdout.y_pred) {
        confusion[t][p] += 1;
    }

    let correct: usize = (0..n_classes).map(|c| confusion[c][c]).sum();
    let accuracy = correct as f64 / samples as f64;

    let mut precision_sum = 0.0;
    let mut recall_sum = 0.0;
    let mut f1_sum = 0.0;
    for c in 0..n_classes {
        let tp = confusion[c][c];
        let predicted: usize = (0..n_classes).map(|t| confusion[t][c]).sum();
        let actual: usize = confusion[c].iter().sum();

        let precision = if predicted > 0 {
            tp as f64 / predicted as f64
        } else {
            0.0
        };
        let recall = if actual > 0 {
            tp as f64 / actual as f64
        } else {
            0.0
        };
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        precision_sum += precision;
        recall_sum += recall;
        f1_sum += f1;
    }

    HoldoutMetrics {
        accuracy,
        precision: precision_sum / n_classes as f64,
        recall: recall_sum / n_classes as f64,
        f1: f1_sum / n_classes as f64,
        confusion,
        samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LabelEncoder, LinearClassifier, StandardScaler};

    fn bundle_with(weights: Vec<Vec<f64>>, holdout: Option<HoldoutLabels>) -> ModelBundle {
        let n_features = weights[0].len();
        let n_classes = weights.len();
        ModelBundle {
            model: LinearClassifier {
                biases: vec![0.0; n_classes],
                weights,
            },
            encoder: LabelEncoder {
                classes: (0..n_classes).map(|i| format!("disease_{}", i)).collect(),
            },
            scaler: StandardScaler {
                mean: vec![0.0; n_features],
                scale: vec![1.0; n_features],
            },
            feature_names: (0..n_features).map(|i| format!("symptom_{}", i)).collect(),
            holdout,
        }
    }

    #[test]
    fn test_ranking_descending_and_truncated() {
        // symptom_1 carries the largest mean |weight|
        let bundle = bundle_with(vec![vec![0.5, 3.0, 1.0], vec![-0.5, -3.0, 1.0]], None);
        let ranked = rank_features(&bundle, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "symptom_1");
        assert!(ranked[0].score >= ranked[1].score);
    }

    #[test]
    fn test_ranking_k_capped_at_feature_count() {
        let bundle = bundle_with(vec![vec![1.0, 2.0]], None);
        let ranked = rank_features(&bundle, DEFAULT_TOP_K);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_report_without_holdout_has_no_metrics() {
        let bundle = bundle_with(vec![vec![1.0]], None);
        let report = EvaluationReport::build(&bundle, DEFAULT_TOP_K);
        assert!(report.metrics.is_none());
    }

    #[test]
    fn test_perfect_holdout_metrics() {
        let holdout = HoldoutLabels {
            y_true: vec![0, 1, 0, 1],
            y_pred: vec![0, 1, 0, 1],
        };
        let bundle = bundle_with(vec![vec![1.0], vec![-1.0]], Some(holdout));
        let report = EvaluationReport::build(&bundle, DEFAULT_TOP_K);
        let metrics = report.metrics.unwrap();
        assert_eq!(metrics.accuracy, 1.0);
        assert_eq!(metrics.precision, 1.0);
        assert_eq!(metrics.recall, 1.0);
        assert_eq!(metrics.f1, 1.0);
        assert_eq!(metrics.samples, 4);
    }

    #[test]
    fn test_confusion_matrix_counts() {
        let holdout = HoldoutLabels {
            y_true: vec![0, 0, 1, 1, 1],
            y_pred: vec![0, 1, 1, 1, 0],
        };
        let bundle = bundle_with(vec![vec![1.0], vec![-1.0]], Some(holdout));
        let metrics = EvaluationReport::build(&bundle, DEFAULT_TOP_K)
            .metrics
            .unwrap();
        assert_eq!(metrics.confusion[0][0], 1);
        assert_eq!(metrics.confusion[0][1], 1);
        assert_eq!(metrics.confusion[1][0], 1);
        assert_eq!(metrics.confusion[1][1], 2);
        assert!((metrics.accuracy - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_macro_average_with_unseen_class() {
        // Class 2 never appears; it drags the macro averages down
        let holdout = HoldoutLabels {
            y_true: vec![0, 1],
            y_pred: vec![0, 1],
        };
        let bundle = bundle_with(vec![vec![1.0], vec![-1.0], vec![0.5]], Some(holdout));
        let metrics = EvaluationReport::build(&bundle, DEFAULT_TOP_K)
            .metrics
            .unwrap();
        assert_eq!(metrics.accuracy, 1.0);
        assert!((metrics.precision - 2.0 / 3.0).abs() < 1e-12);
        assert!((metrics.recall - 2.0 / 3.0).abs() < 1e-12);
    }
}
