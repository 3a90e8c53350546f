//! Full-batch gradient descent for ordinary least squares.
//!
//! The update per iteration, with `m` rows and step size `alpha`:
//!
//! ```text
//! grad[0]   = Σ_i (ŷ_i - y_i)
//! grad[j+1] = Σ_i (ŷ_i - y_i) * x_ij
//! theta[j] -= (alpha / m) * grad[j]
//! ```
//!
//! Every iteration visits every row in ascending index order, so identical
//! inputs always produce identical outputs. There is no convergence check
//! and no divergence detection: with an excessive step size the parameters
//! may become NaN/Inf and the call still returns `Ok`.

use crate::domain::Dataset;
use crate::error::TrainError;
use crate::models::LinearModel;

/// Train `model` on `data` for exactly `iterations` full-batch passes.
///
/// The last column of `data` is the target; all preceding columns are
/// features. The model must therefore carry `data.cols()` parameters
/// (one weight per feature plus the bias). Preconditions are validated
/// before any computation; on error the model is left unmodified.
pub fn train(
    model: &mut LinearModel,
    data: &Dataset,
    learning_rate: f64,
    iterations: u32,
) -> Result<(), TrainError> {
    if data.rows() == 0 {
        return Err(TrainError::InvalidParameters("dataset has no rows"));
    }
    if data.cols() < 2 {
        return Err(TrainError::InvalidParameters(
            "dataset needs at least one feature column and a target column",
        ));
    }
    if !(learning_rate > 0.0) {
        return Err(TrainError::InvalidParameters("learning rate must be > 0"));
    }
    if iterations == 0 {
        return Err(TrainError::InvalidParameters("iteration count must be > 0"));
    }
    if model.parameter_count() != data.cols() {
        return Err(TrainError::InvalidParameters(
            "model parameter count does not match dataset feature count",
        ));
    }

    let m = data.rows() as f64;
    let n_features = data.cols() - 1;
    let mut gradients = vec![0.0; model.parameter_count()];

    for _ in 0..iterations {
        gradients.fill(0.0);

        for row in data.iter_rows() {
            let (features, target) = row.split_at(n_features);
            let error = model.predict(features) - target[0];
            gradients[0] += error;
            for (g, x) in gradients[1..].iter_mut().zip(features) {
                *g += error * x;
            }
        }

        let scale = learning_rate / m;
        for (theta, g) in model.parameters_mut().iter_mut().zip(&gradients) {
            *theta -= scale * g;
        }
    }

    Ok(())
}
