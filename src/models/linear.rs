//! Linear model: a bias term plus one weight per feature.

use serde::{Deserialize, Serialize};

/// Linear regression parameters.
///
/// `theta[0]` is the bias; `theta[1..]` are the feature weights. Parameters
/// are zero-initialized at creation and mutated in place only by the trainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    theta: Vec<f64>,
}

impl LinearModel {
    /// Create a zero-initialized model for `feature_count` features.
    pub fn new(feature_count: usize) -> Self {
        Self {
            theta: vec![0.0; feature_count + 1],
        }
    }

    /// Total parameter count (bias + feature weights).
    pub fn parameter_count(&self) -> usize {
        self.theta.len()
    }

    pub fn parameters(&self) -> &[f64] {
        &self.theta
    }

    pub fn parameters_mut(&mut self) -> &mut [f64] {
        &mut self.theta
    }

    /// Predict `y` for one feature vector.
    ///
    /// `features` should hold one value per feature weight; extra entries on
    /// either side are ignored.
    pub fn predict(&self, features: &[f64]) -> f64 {
        let mut y = self.theta[0];
        for (w, x) in self.theta[1..].iter().zip(features) {
            y += w * x;
        }
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_model_is_zero_initialized() {
        let m = LinearModel::new(3);
        assert_eq!(m.parameter_count(), 4);
        assert!(m.parameters().iter().all(|&w| w == 0.0));
    }

    #[test]
    fn predict_is_bias_plus_weighted_features() {
        let mut m = LinearModel::new(2);
        m.parameters_mut().copy_from_slice(&[1.0, 2.0, -0.5]);
        let y = m.predict(&[3.0, 4.0]);
        assert!((y - (1.0 + 2.0 * 3.0 - 0.5 * 4.0)).abs() < 1e-12);
    }
}
