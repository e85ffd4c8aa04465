//! Model bundle loader
//!
//! Deserializes the single JSON artifact produced by the offline training
//! step: classifier, label encoder, scaler, and the ordered feature name
//! list, plus optional held-out labels for the evaluation report. Loaded
//! exactly once at startup; a missing or corrupt bundle is an operator
//! error and the process must not serve requests.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::{AssistantError, Result};
use crate::model::{LabelEncoder, LinearClassifier, StandardScaler};

/// Default bundle path, next to the working directory as in the reference
/// training pipeline.
pub const DEFAULT_BUNDLE_PATH: &str = "medical_model.json";

/// Optional held-out evaluation labels stored by the training step.
///
/// Both vectors hold encoded labels; equal non-zero lengths are enforced
/// at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldoutLabels {
    pub y_true: Vec<usize>,
    pub y_pred: Vec<usize>,
}

/// The deserialized model bundle. Read-only after loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelBundle {
    pub model: LinearClassifier,
    pub encoder: LabelEncoder,
    pub scaler: StandardScaler,
    pub feature_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holdout: Option<HoldoutLabels>,
}

impl ModelBundle {
    /// Load and validate a bundle from a JSON file.
    ///
    /// Returns an `Arc` so the single loaded instance can be shared by
    /// every downstream consumer without re-reading the artifact.
    pub fn load(path: &Path) -> Result<Arc<Self>> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents).map(Arc::new)
    }

    /// Parse and validate a bundle from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let bundle: Self = serde_json::from_str(json)?;
        bundle.validate()?;
        Ok(bundle)
    }

    /// Number of symptom features the bundle was fitted on.
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Cross-field consistency checks. All four objects must agree on the
    /// feature count and label space they were fitted with.
    pub fn validate(&self) -> Result<()> {
        self.model.validate()?;
        self.encoder.validate()?;
        self.scaler.validate()?;

        if self.feature_names.is_empty() {
            return Err(AssistantError::BundleInconsistent(
                "feature name list is empty".to_string(),
            ));
        }
        let n = self.feature_names.len();
        if self.model.n_features() != n {
            return Err(AssistantError::BundleInconsistent(format!(
                "classifier expects {} features but the bundle names {}",
                self.model.n_features(),
                n
            )));
        }
        if self.scaler.n_features() != n {
            return Err(AssistantError::BundleInconsistent(format!(
                "scaler was fitted on {} features but the bundle names {}",
                self.scaler.n_features(),
                n
            )));
        }
        if self.model.n_classes() != self.encoder.n_classes() {
            return Err(AssistantError::BundleInconsistent(format!(
                "classifier decides {} classes but the encoder holds {}",
                self.model.n_classes(),
                self.encoder.n_classes()
            )));
        }

        if let Some(holdout) = &self.holdout {
            if holdout.y_true.is_empty() {
                return Err(AssistantError::BundleInconsistent(
                    "holdout labels are present but empty".to_string(),
                ));
            }
            if holdout.y_true.len() != holdout.y_pred.len() {
                return Err(AssistantError::BundleInconsistent(format!(
                    "holdout has {} true labels but {} predictions",
                    holdout.y_true.len(),
                    holdout.y_pred.len()
                )));
            }
            let n_classes = self.encoder.n_classes();
            if let Some(bad) = holdout
                .y_true
                .iter()
                .chain(&holdout.y_pred)
                .find(|&&label| label >= n_classes)
            {
                return Err(AssistantError::BundleInconsistent(format!(
                    "holdout label {} outside the {}-class label space",
                    bad, n_classes
                )));
            }
        }

        Ok(())
    }
}
