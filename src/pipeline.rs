//! Prediction pipeline: symptom selection to disease + referral
//!
//! Stateless per request. Holds the once-loaded bundle behind an `Arc`
//! and runs the fixed chain: one-hot vector → scale → classify → decode
//! → specialist lookup. Empty selections are rejected here, at the
//! caller-facing boundary, before the vector builder runs.

use std::sync::Arc;

use crate::bundle::ModelBundle;
use crate::errors::{AssistantError, Result};
use crate::referral;

/// Result of one prediction request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub disease: String,
    pub specialist: String,
}

/// The inference engine. One instance per process, shared read-only.
#[derive(Debug, Clone)]
pub struct Predictor {
    bundle: Arc<ModelBundle>,
}

impl Predictor {
    /// Create a predictor over an already-loaded bundle.
    pub fn new(bundle: Arc<ModelBundle>) -> Self {
        Self { bundle }
    }

    /// The bundle this predictor serves from.
    pub fn bundle(&self) -> &ModelBundle {
        &self.bundle
    }

    /// Ordered symptom names the model was fitted on.
    pub fn feature_names(&self) -> &[String] {
        &self.bundle.feature_names
    }

    /// Split a selection into names the model knows and names it does not.
    ///
    /// Unknown names are ignored by the pipeline; the presentation layer
    /// may still surface them to the user.
    pub fn partition_known<'a>(&self, selected: &'a [String]) -> (Vec<&'a str>, Vec<&'a str>) {
        selected
            .iter()
            .map(String::as_str)
            .partition(|s| self.bundle.feature_names.iter().any(|f| f == s))
    }

    /// Run one prediction for a non-empty symptom selection.
    ///
    /// The whole chain either yields a complete (disease, specialist) pair
    /// or a single error; no partial results.
    pub fn predict(&self, selected: &[String]) -> Result<Prediction> {
        if selected.is_empty() {
            return Err(AssistantError::EmptySelection);
        }

        let x = build_vector(&self.bundle.feature_names, selected);
        let scaled = self.bundle.scaler.transform(&x)?;
        let label = self.bundle.model.predict(&scaled)?;
        let disease = self.bundle.encoder.inverse_transform(label)?;

        Ok(Prediction {
            disease: disease.to_string(),
            specialist: referral::specialist_for(disease).to_string(),
        })
    }
}

/// Build the one-hot feature vector for a selection.
///
/// Position i is 1.0 iff `feature_names[i]` appears in `selected` (exact,
/// case-sensitive match). Names absent from the feature list contribute
/// nothing. The output length always equals the feature list length.
pub fn build_vector(feature_names: &[String], selected: &[String]) -> Vec<f64> {
    feature_names
        .iter()
        .map(|name| {
            if selected.iter().any(|s| s == name) {
                1.0
            } else {
                0.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::{HoldoutLabels, ModelBundle};
    use crate::model::{LabelEncoder, LinearClassifier, StandardScaler};
    use quickcheck_macros::quickcheck;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    /// Two-feature bundle from the end-to-end scenario: the classifier
    /// deterministically separates {"Fungal infection", "Migraine"}.
    fn scenario_bundle() -> Arc<ModelBundle> {
        Arc::new(ModelBundle {
            model: LinearClassifier {
                weights: vec![vec![2.0, -1.0], vec![-1.0, 2.0]],
                biases: vec![0.0, 0.0],
            },
            encoder: LabelEncoder {
                classes: strings(&["Fungal infection", "Migraine"]),
            },
            scaler: StandardScaler {
                mean: vec![0.5, 0.5],
                scale: vec![0.5, 0.5],
            },
            feature_names: strings(&["itching", "headache"]),
            holdout: Some(HoldoutLabels {
                y_true: vec![0, 1, 1],
                y_pred: vec![0, 1, 1],
            }),
        })
    }

    #[test]
    fn test_build_vector_one_hot() {
        let features = strings(&["itching", "headache", "nausea"]);
        let x = build_vector(&features, &strings(&["headache"]));
        assert_eq!(x, vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_build_vector_selection_order_irrelevant() {
        let features = strings(&["a", "b", "c"]);
        let forward = build_vector(&features, &strings(&["a", "c"]));
        let backward = build_vector(&features, &strings(&["c", "a"]));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_build_vector_ignores_unknown_names() {
        let features = strings(&["itching", "headache"]);
        let with_unknown = build_vector(&features, &strings(&["headache", "Headache", "chills"]));
        let without = build_vector(&features, &strings(&["headache"]));
        assert_eq!(with_unknown, without);
    }

    #[quickcheck]
    fn prop_vector_length_matches_feature_list(features: Vec<String>, selected: Vec<String>) -> bool {
        build_vector(&features, &selected).len() == features.len()
    }

    #[quickcheck]
    fn prop_vector_entries_binary_and_exact(features: Vec<String>, selected: Vec<String>) -> bool {
        let x = build_vector(&features, &selected);
        features.iter().zip(&x).all(|(name, &v)| {
            let expected = if selected.contains(name) { 1.0 } else { 0.0 };
            v == expected
        })
    }

    #[test]
    fn test_predict_end_to_end_migraine() {
        let predictor = Predictor::new(scenario_bundle());
        let result = predictor.predict(&strings(&["headache"])).unwrap();
        assert_eq!(result.disease, "Migraine");
        assert_eq!(result.specialist, "Neurologist");
    }

    #[test]
    fn test_predict_end_to_end_fungal_infection() {
        let predictor = Predictor::new(scenario_bundle());
        let result = predictor.predict(&strings(&["itching"])).unwrap();
        assert_eq!(result.disease, "Fungal infection");
        assert_eq!(result.specialist, "Dermatologist (Skin Specialist)");
    }

    #[test]
    fn test_predict_deterministic() {
        let predictor = Predictor::new(scenario_bundle());
        let selection = strings(&["headache"]);
        let first = predictor.predict(&selection).unwrap();
        for _ in 0..5 {
            assert_eq!(predictor.predict(&selection).unwrap(), first);
        }
    }

    #[test]
    fn test_predict_rejects_empty_selection() {
        let predictor = Predictor::new(scenario_bundle());
        let err = predictor.predict(&[]).unwrap_err();
        assert!(matches!(err, AssistantError::EmptySelection));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_predict_unknown_symptoms_do_not_fail() {
        let predictor = Predictor::new(scenario_bundle());
        let result = predictor
            .predict(&strings(&["headache", "no_such_symptom"]))
            .unwrap();
        assert_eq!(result.disease, "Migraine");
    }

    #[test]
    fn test_partition_known() {
        let predictor = Predictor::new(scenario_bundle());
        let selection = strings(&["headache", "chills"]);
        let (known, unknown) = predictor.partition_known(&selection);
        assert_eq!(known, vec!["headache"]);
        assert_eq!(unknown, vec!["chills"]);
    }
}
