//! Label codec between encoded class indices and disease names
//!
//! The class list order is fixed at training time; index i decodes to
//! `classes[i]`. Prediction only decodes, but the encode direction is
//! kept for held-out metric evaluation.

use serde::{Deserialize, Serialize};

use crate::errors::{AssistantError, Result};

/// Serializable label encoder — loaded from the bundle at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    /// Ordered class names; position = encoded label.
    pub classes: Vec<String>,
}

impl LabelEncoder {
    /// Number of classes in the label space.
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Validate that the label space is usable.
    pub fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            return Err(AssistantError::BundleInconsistent(
                "label encoder has no classes".to_string(),
            ));
        }
        Ok(())
    }

    /// Decode an encoded label back to its disease name.
    pub fn inverse_transform(&self, label: usize) -> Result<&str> {
        self.classes
            .get(label)
            .map(String::as_str)
            .ok_or(AssistantError::UnknownLabel {
                label,
                classes: self.classes.len(),
            })
    }

    /// Encode a disease name to its label, if known.
    pub fn transform(&self, name: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> LabelEncoder {
        LabelEncoder {
            classes: vec!["Fungal infection".to_string(), "Migraine".to_string()],
        }
    }

    #[test]
    fn test_inverse_transform() {
        let enc = encoder();
        assert_eq!(enc.inverse_transform(0).unwrap(), "Fungal infection");
        assert_eq!(enc.inverse_transform(1).unwrap(), "Migraine");
    }

    #[test]
    fn test_inverse_transform_out_of_range() {
        let enc = encoder();
        let err = enc.inverse_transform(2).unwrap_err();
        assert!(matches!(
            err,
            AssistantError::UnknownLabel { label: 2, classes: 2 }
        ));
    }

    #[test]
    fn test_transform_round_trip() {
        let enc = encoder();
        let label = enc.transform("Migraine").unwrap();
        assert_eq!(enc.inverse_transform(label).unwrap(), "Migraine");
    }

    #[test]
    fn test_transform_unknown_name() {
        assert!(encoder().transform("Dengue").is_none());
    }

    #[test]
    fn test_validate_rejects_empty() {
        let enc = LabelEncoder { classes: vec![] };
        assert!(enc.validate().is_err());
    }
}
