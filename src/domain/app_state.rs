use serde::{Deserialize, Serialize};

use super::{entities::InfraFilter, placement::PlacementFlow};

/// Mutable UI state. The tables and models live outside, read-only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    /// Category shown on the infrastructure map.
    pub infra_filter: InfraFilter,
    /// Current selection and the last results computed for it.
    pub placement: PlacementFlow,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.infra_filter = persisted.infra_filter;
    }

    /// The selection is deliberately left out: it lasts one process.
    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            infra_filter: self.infra_filter,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub infra_filter: InfraFilter,
}
