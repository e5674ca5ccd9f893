//! Location → environment → recommendation flow for the Building Placement
//! page.
//!
//! The flow owns the current selection and the last displayed results. It
//! never caches derived values: every request resolves the environment
//! again and recomputes from the fitted models.

use super::{
    entities::{EnvironmentalRecord, Material, SelectedLocation},
    error::CoreError,
    recommendation::RecommendationEngine,
    resolver::{resolve, Resolved},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementStage {
    NoSelection,
    LocationSelected,
    EnvironmentResolved,
}

/// Latest outputs shown to the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionResult {
    pub predicted_cost: Option<f64>,
    pub recommended_materials: Option<Vec<Material>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlacementFlow {
    selection: Option<SelectedLocation>,
    resolved_index: Option<usize>,
    result: PredictionResult,
}

impl PlacementFlow {
    pub fn stage(&self) -> PlacementStage {
        match (self.selection, self.resolved_index) {
            (None, _) => PlacementStage::NoSelection,
            (Some(_), None) => PlacementStage::LocationSelected,
            (Some(_), Some(_)) => PlacementStage::EnvironmentResolved,
        }
    }

    pub fn selection(&self) -> Option<SelectedLocation> {
        self.selection
    }

    pub fn result(&self) -> &PredictionResult {
        &self.result
    }

    /// Replaces any previous selection and drops its results.
    pub fn select(&mut self, location: SelectedLocation) {
        tracing::debug!(%location, "location selected");
        self.selection = Some(location);
        self.resolved_index = None;
        self.result = PredictionResult::default();
    }

    pub fn resolve<'a>(
        &mut self,
        records: &'a [EnvironmentalRecord],
    ) -> Result<Resolved<'a>, CoreError> {
        let selection = self.selection.ok_or(CoreError::NoSelection)?;
        let resolved = resolve(&selection, records)?;
        self.resolved_index = Some(resolved.index);
        Ok(resolved)
    }

    pub fn predict_cost(
        &mut self,
        records: &[EnvironmentalRecord],
        engine: &RecommendationEngine,
    ) -> Result<f64, CoreError> {
        let resolved = self.resolve(records)?;
        let cost = engine.predict_construction_cost(resolved.record)?;
        tracing::debug!(cost, record = resolved.index, "predicted construction cost");
        self.result.predicted_cost = Some(cost);
        Ok(cost)
    }

    pub fn recommend(
        &mut self,
        records: &[EnvironmentalRecord],
        materials: &[Material],
        engine: &RecommendationEngine,
    ) -> Result<Vec<Material>, CoreError> {
        let resolved = self.resolve(records)?;
        let picked = engine.recommend_for(resolved.record, materials)?;
        tracing::debug!(count = picked.len(), record = resolved.index, "recommended materials");
        self.result.recommended_materials = Some(picked.clone());
        Ok(picked)
    }
}
