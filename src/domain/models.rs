//! One-time fit of the cost regressor and eco classifier.

use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{
    entities::{AttributeVector, Material},
    error::{CoreError, ModelError},
    forest::{EcoClassifier, ForestParams},
    regression::CostRegressor,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelSettings {
    pub split_seed: u64,
    pub test_fraction: f64,
    pub forest_trees: usize,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            split_seed: 42,
            test_fraction: 0.2,
            forest_trees: 100,
        }
    }
}

/// Row indices of a shuffled train/test partition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainTestSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

impl TrainTestSplit {
    /// Test size is `ceil(len * test_fraction)`, capped so at least one row
    /// remains for training.
    pub fn new(len: usize, test_fraction: f64, seed: u64) -> Self {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        let fraction = test_fraction.clamp(0.0, 1.0);
        let test_len = ((len as f64) * fraction).ceil() as usize;
        let test_len = test_len.min(len.saturating_sub(1));

        let train = order.split_off(test_len);
        Self { train, test: order }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModelReport {
    pub train_rows: usize,
    pub test_rows: usize,
    pub cost_r_squared: Option<f64>,
    pub eco_accuracy: Option<f64>,
}

/// Both predictors, fitted once at startup and shared read-only afterwards.
#[derive(Clone, Debug)]
pub struct FittedModels {
    pub cost: CostRegressor,
    pub eco: EcoClassifier,
    pub report: ModelReport,
}

impl FittedModels {
    pub fn fit(materials: &[Material], settings: &ModelSettings) -> Result<Self, ModelError> {
        if materials.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }

        let attributes = materials
            .iter()
            .map(Material::attributes)
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(bad) = materials.iter().find(|m| !m.cost.is_finite()) {
            return Err(CoreError::MalformedInput(format!(
                "material {}: cost is not a finite number",
                bad.name
            ))
            .into());
        }
        let split =
            TrainTestSplit::new(materials.len(), settings.test_fraction, settings.split_seed);

        let gather = |rows: &[usize]| -> (Vec<AttributeVector>, Vec<f64>, Vec<bool>) {
            let x = rows.iter().map(|&idx| attributes[idx]).collect();
            let cost = rows.iter().map(|&idx| materials[idx].cost).collect();
            let eco = rows.iter().map(|&idx| materials[idx].eco_friendly).collect();
            (x, cost, eco)
        };
        let (train_x, train_cost, train_eco) = gather(&split.train);
        let (test_x, test_cost, test_eco) = gather(&split.test);

        let cost = CostRegressor::fit(&train_x, &train_cost)?;
        let eco = EcoClassifier::fit(
            &train_x,
            &train_eco,
            &ForestParams {
                trees: settings.forest_trees,
                seed: settings.split_seed,
                ..ForestParams::default()
            },
        )?;

        let report = ModelReport {
            train_rows: split.train.len(),
            test_rows: split.test.len(),
            cost_r_squared: cost.r_squared(&test_x, &test_cost),
            eco_accuracy: eco.accuracy(&test_x, &test_eco),
        };

        tracing::info!(
            train = report.train_rows,
            test = report.test_rows,
            r2 = ?report.cost_r_squared,
            accuracy = ?report.eco_accuracy,
            "fitted material models"
        );

        Ok(Self { cost, eco, report })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn material(name: &str, base: f64, cost: f64, eco_friendly: bool) -> Material {
        Material {
            name: name.to_string(),
            co2_emissions: 300.0 - base * 10.0,
            recyclability: base / 10.0,
            energy_efficiency: (base * 0.7).sin().abs(),
            availability: (base % 4.0) + 1.0,
            durability: base * 0.5 + 2.0,
            aesthetic_value: (base * 1.3).cos() + 2.0,
            cost,
            eco_friendly,
        }
    }

    #[test]
    fn split_is_reproducible_and_disjoint() {
        let first = TrainTestSplit::new(50, 0.2, 42);
        let second = TrainTestSplit::new(50, 0.2, 42);
        assert_eq!(first, second);
        assert_eq!(first.test.len(), 10);
        assert_eq!(first.train.len(), 40);

        let train: HashSet<_> = first.train.iter().copied().collect();
        assert!(first.test.iter().all(|idx| !train.contains(idx)));
        assert_eq!(train.len() + first.test.len(), 50);
    }

    #[test]
    fn split_rounds_test_size_up_and_keeps_a_training_row() {
        assert_eq!(TrainTestSplit::new(7, 0.2, 1).test.len(), 2);
        let tiny = TrainTestSplit::new(1, 0.2, 1);
        assert_eq!(tiny.train.len(), 1);
        assert!(tiny.test.is_empty());
    }

    #[test]
    fn fit_reports_split_sizes() {
        let materials: Vec<_> = (0..20)
            .map(|i| material(&format!("m{i}"), i as f64, 50.0 + i as f64 * 4.0, i % 2 == 0))
            .collect();
        let settings = ModelSettings {
            forest_trees: 15,
            ..ModelSettings::default()
        };
        let models = FittedModels::fit(&materials, &settings).unwrap();
        assert_eq!(models.report.train_rows, 16);
        assert_eq!(models.report.test_rows, 4);
        assert_eq!(models.eco.tree_count(), 15);
    }

    #[test]
    fn non_finite_cost_is_rejected() {
        let mut materials: Vec<_> = (0..10)
            .map(|i| material(&format!("m{i}"), i as f64, 20.0 + i as f64, i % 2 == 0))
            .collect();
        materials[3].cost = f64::NAN;
        let err = FittedModels::fit(&materials, &ModelSettings::default()).unwrap_err();
        match err {
            ModelError::Input(CoreError::MalformedInput(detail)) => assert!(detail.contains("m3")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_materials_cannot_be_fitted() {
        assert!(matches!(
            FittedModels::fit(&[], &ModelSettings::default()),
            Err(ModelError::EmptyTrainingSet)
        ));
    }
}
