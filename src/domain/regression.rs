//! Ordinary least squares cost model.

use nalgebra::{DMatrix, DVector};

use super::{entities::AttributeVector, error::ModelError};

/// Relative cutoff below which singular values are treated as zero.
const RANK_TOLERANCE: f64 = 1e-10;

#[derive(Clone, Debug, PartialEq)]
pub struct CostRegressor {
    intercept: f64,
    coefficients: [f64; AttributeVector::LEN],
}

impl CostRegressor {
    /// Fits `cost ~ intercept + Σ wᵢ·xᵢ`. Rank-deficient designs get the
    /// minimum-norm solution.
    pub fn fit(samples: &[AttributeVector], targets: &[f64]) -> Result<Self, ModelError> {
        if samples.len() != targets.len() {
            return Err(ModelError::LengthMismatch {
                samples: samples.len(),
                targets: targets.len(),
            });
        }
        if samples.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }

        let columns = AttributeVector::LEN + 1;
        let design = DMatrix::from_fn(samples.len(), columns, |row, col| {
            if col == 0 {
                1.0
            } else {
                samples[row].get(col - 1)
            }
        });
        let targets = DVector::from_column_slice(targets);

        let svd = design.svd(true, true);
        let eps = svd.singular_values.max() * RANK_TOLERANCE;
        let solution = svd
            .solve(&targets, eps)
            .map_err(|err| ModelError::Solve(err.to_string()))?;

        let mut coefficients = [0.0; AttributeVector::LEN];
        for (idx, slot) in coefficients.iter_mut().enumerate() {
            *slot = solution[idx + 1];
        }

        Ok(Self {
            intercept: solution[0],
            coefficients,
        })
    }

    pub fn predict_cost(&self, attributes: &AttributeVector) -> f64 {
        self.coefficients
            .iter()
            .zip(attributes.values())
            .fold(self.intercept, |acc, (weight, value)| acc + weight * value)
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> &[f64; AttributeVector::LEN] {
        &self.coefficients
    }

    /// Coefficient of determination on a held-out set. `None` when the set
    /// is empty or its targets are constant.
    pub fn r_squared(&self, samples: &[AttributeVector], targets: &[f64]) -> Option<f64> {
        if samples.is_empty() || samples.len() != targets.len() {
            return None;
        }
        let mean = targets.iter().sum::<f64>() / targets.len() as f64;
        let total: f64 = targets.iter().map(|y| (y - mean).powi(2)).sum();
        if total == 0.0 {
            return None;
        }
        let residual: f64 = samples
            .iter()
            .zip(targets)
            .map(|(x, y)| (y - self.predict_cost(x)).powi(2))
            .sum();
        Some(1.0 - residual / total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(values: [f64; 6]) -> AttributeVector {
        AttributeVector::new(values).unwrap()
    }

    #[test]
    fn recovers_exact_linear_relationship() {
        let weights = [2.0, -1.0, 0.5, 3.0, 0.0, 1.5];
        let samples: Vec<_> = (0..20)
            .map(|i| {
                let t = i as f64;
                vector([
                    t,
                    (t * 1.3).sin() * 10.0,
                    t * t * 0.1,
                    (t * 0.7).cos() * 4.0,
                    (i % 3) as f64,
                    (t * 0.2).exp(),
                ])
            })
            .collect();
        let targets: Vec<_> = samples
            .iter()
            .map(|x| {
                7.0 + weights
                    .iter()
                    .zip(x.values())
                    .map(|(w, v)| w * v)
                    .sum::<f64>()
            })
            .collect();

        let model = CostRegressor::fit(&samples, &targets).unwrap();
        assert!((model.intercept() - 7.0).abs() < 1e-6);
        for (fitted, expected) in model.coefficients().iter().zip(weights) {
            assert!((fitted - expected).abs() < 1e-6, "{fitted} vs {expected}");
        }
        let r2 = model.r_squared(&samples, &targets).unwrap();
        assert!((r2 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rank_deficient_design_still_predicts_training_mean() {
        let samples = vec![vector([1.0; 6]), vector([1.0; 6]), vector([1.0; 6])];
        let targets = vec![10.0, 20.0, 30.0];
        let model = CostRegressor::fit(&samples, &targets).unwrap();
        let prediction = model.predict_cost(&samples[0]);
        assert!((prediction - 20.0).abs() < 1e-6);
    }

    #[test]
    fn empty_training_set_is_rejected() {
        assert!(matches!(
            CostRegressor::fit(&[], &[]),
            Err(ModelError::EmptyTrainingSet)
        ));
    }

    #[test]
    fn mismatched_targets_are_reported_as_such() {
        let samples = vec![vector([1.0; 6]), vector([2.0; 6])];
        assert!(matches!(
            CostRegressor::fit(&samples, &[10.0]),
            Err(ModelError::LengthMismatch {
                samples: 2,
                targets: 1
            })
        ));
    }

    #[test]
    fn prediction_is_deterministic() {
        let samples: Vec<_> = (0..8)
            .map(|i| vector([i as f64, 1.0, 2.0, (i * i) as f64, 0.5, 3.0]))
            .collect();
        let targets: Vec<_> = (0..8).map(|i| 100.0 + i as f64 * 3.0).collect();
        let model = CostRegressor::fit(&samples, &targets).unwrap();
        let query = vector([3.5, 1.0, 2.0, 12.0, 0.5, 3.0]);
        assert_eq!(model.predict_cost(&query), model.predict_cost(&query));
    }
}
