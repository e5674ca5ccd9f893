use std::rc::Rc;

use super::{
    entities::{EnvironmentalRecord, Material},
    error::CoreError,
    models::FittedModels,
};

/// Upper bound on the recommended material list.
pub const RECOMMENDATION_LIMIT: usize = 5;

/// Eco-friendly materials, cheapest first. The filter uses the static
/// `eco_friendly` flag from the table, never a model prediction. Rows
/// without a finite cost are left out.
pub fn recommend_materials(materials: &[Material]) -> Vec<Material> {
    let mut eco: Vec<&Material> = materials
        .iter()
        .filter(|m| m.eco_friendly && m.cost.is_finite())
        .collect();
    eco.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    eco.into_iter()
        .take(RECOMMENDATION_LIMIT)
        .cloned()
        .collect()
}

#[derive(Clone)]
pub struct RecommendationEngine {
    models: Rc<FittedModels>,
}

impl RecommendationEngine {
    pub fn new(models: Rc<FittedModels>) -> Self {
        Self { models }
    }

    pub fn models(&self) -> &FittedModels {
        &self.models
    }

    pub fn predict_construction_cost(&self, env: &EnvironmentalRecord) -> Result<f64, CoreError> {
        let attributes = env.attributes()?;
        Ok(self.models.cost.predict_cost(&attributes))
    }

    /// Classifier verdict for the neighbourhood around `env`.
    pub fn assess_neighbourhood(&self, env: &EnvironmentalRecord) -> Result<bool, CoreError> {
        let attributes = env.attributes()?;
        Ok(self.models.eco.predict_eco(&attributes))
    }

    /// Runs the classifier on `env` and then returns the static
    /// recommendation list; the verdict only reaches the log.
    pub fn recommend_for(
        &self,
        env: &EnvironmentalRecord,
        materials: &[Material],
    ) -> Result<Vec<Material>, CoreError> {
        let verdict = self.assess_neighbourhood(env)?;
        tracing::debug!(
            eco_friendly = verdict,
            "neighbourhood classifier verdict (not used for ranking)"
        );
        Ok(recommend_materials(materials))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{entities::Rating, models::ModelSettings};

    fn material(name: &str, cost: f64, eco_friendly: bool) -> Material {
        Material {
            name: name.to_string(),
            co2_emissions: 200.0 - cost,
            recyclability: (cost * 0.37).sin().abs(),
            energy_efficiency: (cost * 0.11).cos().abs(),
            availability: cost % 7.0,
            durability: cost / 10.0,
            aesthetic_value: (cost % 3.0) + 1.0,
            cost,
            eco_friendly,
        }
    }

    fn env() -> EnvironmentalRecord {
        EnvironmentalRecord {
            latitude: 26.91,
            longitude: 75.79,
            co2_emissions: 150.0,
            traffic_congestion: Rating::Average,
            water_availability: Rating::Good,
            waste_management: Rating::Poor,
            population_estimate: 1400,
            recyclability: Some(0.6),
            energy_efficiency: Some(0.4),
            availability: Some(3.0),
            durability: Some(4.0),
            aesthetic_value: Some(2.0),
        }
    }

    fn example_table() -> Vec<Material> {
        let mut table: Vec<_> = [10.0, 40.0, 15.0, 5.0, 30.0, 20.0]
            .iter()
            .enumerate()
            .map(|(i, cost)| material(&format!("eco-{i}"), *cost, true))
            .collect();
        table.push(material("cheap-a", 1.0, false));
        table.push(material("cheap-b", 2.0, false));
        table
    }

    fn engine(materials: &[Material]) -> RecommendationEngine {
        let settings = ModelSettings {
            forest_trees: 10,
            ..ModelSettings::default()
        };
        RecommendationEngine::new(Rc::new(FittedModels::fit(materials, &settings).unwrap()))
    }

    #[test]
    fn cheapest_eco_rows_win_over_cheaper_non_eco_rows() {
        let costs: Vec<f64> = recommend_materials(&example_table())
            .iter()
            .map(|m| m.cost)
            .collect();
        assert_eq!(costs, vec![5.0, 10.0, 15.0, 20.0, 30.0]);
    }

    #[test]
    fn output_is_bounded_eco_and_sorted() {
        let table: Vec<_> = (0..30)
            .map(|i| material(&format!("m{i}"), ((i * 37) % 101) as f64, i % 3 != 0))
            .collect();
        let picked = recommend_materials(&table);
        assert!(picked.len() <= RECOMMENDATION_LIMIT);
        assert!(picked.iter().all(|m| m.eco_friendly));
        assert!(picked.windows(2).all(|pair| pair[0].cost <= pair[1].cost));
    }

    #[test]
    fn fewer_qualifying_rows_return_fewer_entries() {
        let table = vec![
            material("a", 3.0, true),
            material("b", 1.0, false),
            material("c", 2.0, true),
        ];
        let names: Vec<_> = recommend_materials(&table)
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["c", "a"]);
        assert!(recommend_materials(&[material("x", 1.0, false)]).is_empty());
    }

    #[test]
    fn rows_without_a_finite_cost_are_skipped() {
        let mut table = example_table();
        table.push(material("unpriced", f64::NAN, true));
        let picked = recommend_materials(&table);
        assert!(picked.iter().all(|m| m.name != "unpriced"));
        assert!(picked.iter().all(|m| m.cost.is_finite()));

        let only_unpriced = vec![material("unpriced", f64::NAN, true)];
        assert!(recommend_materials(&only_unpriced).is_empty());
    }

    #[test]
    fn recommending_twice_is_identical() {
        let table = example_table();
        assert_eq!(recommend_materials(&table), recommend_materials(&table));
    }

    #[test]
    fn cost_prediction_is_deterministic() {
        let table = example_table();
        let engine = engine(&table);
        let first = engine.predict_construction_cost(&env()).unwrap();
        let second = engine.predict_construction_cost(&env()).unwrap();
        assert_eq!(first, second);
        assert!(first.is_finite());
    }

    #[test]
    fn cost_prediction_rejects_incomplete_records() {
        let engine = engine(&example_table());
        let mut record = env();
        record.durability = None;
        assert!(matches!(
            engine.predict_construction_cost(&record),
            Err(CoreError::MalformedInput(_))
        ));
    }

    /// The classifier verdict is computed but has no say in the list: the
    /// same static table comes back whatever the model predicts.
    #[test]
    fn classifier_verdict_does_not_change_recommendations() {
        let table = example_table();
        let engine = engine(&table);
        let expected = recommend_materials(&table);

        let mut polluted = env();
        polluted.co2_emissions = 10_000.0;
        let mut clean = env();
        clean.co2_emissions = -10_000.0;

        for record in [env(), polluted, clean] {
            let _verdict = engine.assess_neighbourhood(&record).unwrap();
            assert_eq!(engine.recommend_for(&record, &table).unwrap(), expected);
        }
    }
}
