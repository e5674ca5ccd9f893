//! Planning domain: tables, predictors and the placement flow.

pub mod app_state;
pub mod entities;
pub mod error;
pub mod forest;
pub mod models;
pub mod placement;
pub mod recommendation;
pub mod regression;
pub mod resolver;
pub mod status;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState};
#[allow(unused_imports)]
pub use entities::{
    AttributeVector, Datasets, EnvironmentalRecord, GeospatialPoint, InfraFilter, LandUse,
    Material, Rating, SelectedLocation, ATTRIBUTE_NAMES,
};
#[allow(unused_imports)]
pub use error::{CoreError, ModelError};
#[allow(unused_imports)]
pub use models::{FittedModels, ModelReport, ModelSettings};
#[allow(unused_imports)]
pub use placement::{PlacementFlow, PlacementStage, PredictionResult};
#[allow(unused_imports)]
pub use recommendation::{recommend_materials, RecommendationEngine, RECOMMENDATION_LIMIT};
#[allow(unused_imports)]
pub use resolver::{resolve, Resolved};
#[allow(unused_imports)]
pub use status::{metric_statuses, MetricStatus, Tone};
