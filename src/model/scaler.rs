//! Pre-fitted standard scaler
//!
//! Applies the affine transform `(x - mean) / scale` learned at training
//! time. Pure function of its input; the fitted parameters never change.

use serde::{Deserialize, Serialize};

use crate::errors::{AssistantError, Result};

/// Serializable scaler parameters — loaded from the bundle at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-feature mean subtracted before scaling.
    pub mean: Vec<f64>,
    /// Per-feature divisor. Zero-variance features carry scale 1.0 in the
    /// fitted artifact; a zero here is a corrupt bundle.
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Number of features the transform expects.
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Validate that the fitted parameters are structurally sound.
    pub fn validate(&self) -> Result<()> {
        if self.mean.is_empty() {
            return Err(AssistantError::BundleInconsistent(
                "scaler has no features".to_string(),
            ));
        }
        if self.scale.len() != self.mean.len() {
            return Err(AssistantError::BundleInconsistent(format!(
                "scaler mean has {} entries but scale has {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        for (i, (m, s)) in self.mean.iter().zip(&self.scale).enumerate() {
            if !m.is_finite() || !s.is_finite() {
                return Err(AssistantError::BundleInconsistent(format!(
                    "non-finite scaler parameter at feature {}",
                    i
                )));
            }
            if *s == 0.0 {
                return Err(AssistantError::BundleInconsistent(format!(
                    "zero scale at feature {}",
                    i
                )));
            }
        }
        Ok(())
    }

    /// Transform a single raw feature vector into scaled space.
    pub fn transform(&self, x: &[f64]) -> Result<Vec<f64>> {
        if x.len() != self.mean.len() {
            return Err(AssistantError::ShapeMismatch {
                expected: self.mean.len(),
                got: x.len(),
            });
        }
        Ok(x.iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(xi, (m, s))| (xi - m) / s)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_affine() {
        let scaler = StandardScaler {
            mean: vec![0.5, 1.0],
            scale: vec![0.5, 2.0],
        };
        let scaled = scaler.transform(&[1.0, 0.0]).unwrap();
        assert!((scaled[0] - 1.0).abs() < 1e-12);
        assert!((scaled[1] + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_pure() {
        let scaler = StandardScaler {
            mean: vec![0.25],
            scale: vec![0.4],
        };
        let a = scaler.transform(&[1.0]).unwrap();
        let b = scaler.transform(&[1.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_transform_preserves_length() {
        let scaler = StandardScaler {
            mean: vec![0.0; 7],
            scale: vec![1.0; 7],
        };
        assert_eq!(scaler.transform(&[1.0; 7]).unwrap().len(), 7);
    }

    #[test]
    fn test_transform_shape_mismatch() {
        let scaler = StandardScaler {
            mean: vec![0.0, 0.0],
            scale: vec![1.0, 1.0],
        };
        assert!(scaler.transform(&[1.0]).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_scale() {
        let scaler = StandardScaler {
            mean: vec![0.0],
            scale: vec![0.0],
        };
        assert!(scaler.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_length_mismatch() {
        let scaler = StandardScaler {
            mean: vec![0.0, 0.0],
            scale: vec![1.0],
        };
        assert!(scaler.validate().is_err());
    }
}
