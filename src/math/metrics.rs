//! Regression error metrics.

/// Mean squared error between predictions and targets.
///
/// Pairs are matched positionally; the slices should have equal length.
/// Returns `0.0` for empty input.
pub fn mean_squared_error(predictions: &[f64], targets: &[f64]) -> f64 {
    debug_assert_eq!(predictions.len(), targets.len());
    if predictions.is_empty() {
        return 0.0;
    }
    let sum: f64 = predictions
        .iter()
        .zip(targets)
        .map(|(p, t)| (p - t) * (p - t))
        .sum();
    sum / predictions.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mse_of_identical_vectors_is_zero() {
        assert_eq!(mean_squared_error(&[1.0, 2.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn mse_averages_squared_differences() {
        // Differences: 1 and 3 -> (1 + 9) / 2 = 5
        let mse = mean_squared_error(&[2.0, 5.0], &[1.0, 2.0]);
        assert!((mse - 5.0).abs() < 1e-12);
    }

    #[test]
    fn mse_of_empty_input_is_zero() {
        assert_eq!(mean_squared_error(&[], &[]), 0.0);
    }
}
