//! Multinomial linear classifier loaded from the bundle
//!
//! One weight row and one bias per class; the decision function is the
//! argmax of `w_c · x + b_c` over classes. The per-feature importance
//! accessor is the mean absolute weight across classes.

use serde::{Deserialize, Serialize};

use crate::errors::{AssistantError, Result};

/// Serializable classifier weights — loaded from the bundle at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    /// Weight matrix: one row per class, row length = feature count.
    pub weights: Vec<Vec<f64>>,
    /// Bias (intercept) term per class.
    pub biases: Vec<f64>,
}

impl LinearClassifier {
    /// Number of classes this classifier decides between.
    pub fn n_classes(&self) -> usize {
        self.weights.len()
    }

    /// Number of input features each weight row expects.
    pub fn n_features(&self) -> usize {
        self.weights.first().map(Vec::len).unwrap_or(0)
    }

    /// Validate that the weight matrix is structurally sound.
    pub fn validate(&self) -> Result<()> {
        if self.weights.is_empty() {
            return Err(AssistantError::BundleInconsistent(
                "classifier has no classes".to_string(),
            ));
        }
        if self.biases.len() != self.weights.len() {
            return Err(AssistantError::BundleInconsistent(format!(
                "classifier has {} weight rows but {} biases",
                self.weights.len(),
                self.biases.len()
            )));
        }
        let n_features = self.n_features();
        if n_features == 0 {
            return Err(AssistantError::BundleInconsistent(
                "classifier weight rows are empty".to_string(),
            ));
        }
        for (class, row) in self.weights.iter().enumerate() {
            if row.len() != n_features {
                return Err(AssistantError::BundleInconsistent(format!(
                    "weight row {} has length {}, expected {}",
                    class,
                    row.len(),
                    n_features
                )));
            }
            if let Some(w) = row.iter().find(|w| !w.is_finite()) {
                return Err(AssistantError::BundleInconsistent(format!(
                    "non-finite weight {} in class row {}",
                    w, class
                )));
            }
        }
        if let Some(b) = self.biases.iter().find(|b| !b.is_finite()) {
            return Err(AssistantError::BundleInconsistent(format!(
                "non-finite bias {}",
                b
            )));
        }
        Ok(())
    }

    /// Predict the encoded class label for a single scaled sample.
    ///
    /// Returns the argmax class index; ties resolve to the lowest index,
    /// matching the stability of the fitted decision function.
    pub fn predict(&self, x: &[f64]) -> Result<usize> {
        if x.len() != self.n_features() {
            return Err(AssistantError::ShapeMismatch {
                expected: self.n_features(),
                got: x.len(),
            });
        }

        let mut best: Option<(usize, f64)> = None;
        for (class, (row, bias)) in self.weights.iter().zip(&self.biases).enumerate() {
            let score = dot(row, x) + bias;
            if !score.is_finite() {
                return Err(AssistantError::NonFiniteScore { label: class });
            }
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((class, score)),
            }
        }

        // validate() rejects empty weight matrices, so best is always set
        best.map(|(class, _)| class)
            .ok_or_else(|| AssistantError::BundleInconsistent("classifier has no classes".to_string()))
    }

    /// Intrinsic per-feature importance: mean absolute weight across classes.
    pub fn feature_importances(&self) -> Vec<f64> {
        let n_features = self.n_features();
        let n_classes = self.n_classes();
        let mut importances = vec![0.0f64; n_features];
        for row in &self.weights {
            for (i, w) in row.iter().enumerate() {
                importances[i] += w.abs();
            }
        }
        for imp in &mut importances {
            *imp /= n_classes as f64;
        }
        importances
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(ai, bi)| ai * bi).sum()
}
