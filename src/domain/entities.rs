use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::CoreError;

/// Functional classification of a mapped point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandUse {
    Park,
    Residential,
    Commercial,
    School,
    Library,
    GovernmentOffice,
    Hospital,
    Utility,
}

impl LandUse {
    /// Display order used by the infrastructure selector.
    pub const ALL: [LandUse; 8] = [
        LandUse::Park,
        LandUse::Commercial,
        LandUse::Residential,
        LandUse::School,
        LandUse::Library,
        LandUse::GovernmentOffice,
        LandUse::Hospital,
        LandUse::Utility,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LandUse::Park => "Park",
            LandUse::Residential => "Residential",
            LandUse::Commercial => "Commercial",
            LandUse::School => "School",
            LandUse::Library => "Library",
            LandUse::GovernmentOffice => "Government Office",
            LandUse::Hospital => "Hospital",
            LandUse::Utility => "Utility",
        }
    }

    /// Accepts the CSV spelling ("Government Office") as well as the
    /// compact variant name ("GovernmentOffice").
    pub fn parse(raw: &str) -> Option<Self> {
        let compact: String = raw.split_whitespace().collect();
        LandUse::ALL
            .into_iter()
            .find(|category| format!("{category:?}").eq_ignore_ascii_case(&compact))
    }
}

impl fmt::Display for LandUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeospatialPoint {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub land_use: LandUse,
}

/// Qualitative rating used for traffic, water and waste columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rating {
    Good,
    Average,
    Poor,
}

impl Rating {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "good" => Some(Rating::Good),
            "average" => Some(Rating::Average),
            "poor" => Some(Rating::Poor),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Good => "Good",
            Rating::Average => "Average",
            Rating::Poor => "Poor",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnvironmentalRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub co2_emissions: f64,
    pub traffic_congestion: Rating,
    pub water_availability: Rating,
    pub waste_management: Rating,
    pub population_estimate: i64,
    /// Remaining model attributes. The environment table may omit them;
    /// projection fails for such rows.
    pub recyclability: Option<f64>,
    pub energy_efficiency: Option<f64>,
    pub availability: Option<f64>,
    pub durability: Option<f64>,
    pub aesthetic_value: Option<f64>,
}

impl EnvironmentalRecord {
    pub fn attributes(&self) -> Result<AttributeVector, CoreError> {
        let field = |name: &'static str, value: Option<f64>| {
            value.ok_or_else(|| {
                CoreError::MalformedInput(format!(
                    "environmental record at ({}, {}) has no {name}",
                    self.latitude, self.longitude
                ))
            })
        };

        AttributeVector::new([
            self.co2_emissions,
            field("recyclability", self.recyclability)?,
            field("energy efficiency", self.energy_efficiency)?,
            field("availability", self.availability)?,
            field("durability", self.durability)?,
            field("aesthetic value", self.aesthetic_value)?,
        ])
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub co2_emissions: f64,
    pub recyclability: f64,
    pub energy_efficiency: f64,
    pub availability: f64,
    pub durability: f64,
    pub aesthetic_value: f64,
    pub cost: f64,
    pub eco_friendly: bool,
}

impl Material {
    pub fn attributes(&self) -> Result<AttributeVector, CoreError> {
        AttributeVector::new([
            self.co2_emissions,
            self.recyclability,
            self.energy_efficiency,
            self.availability,
            self.durability,
            self.aesthetic_value,
        ])
        .map_err(|err| match err {
            CoreError::MalformedInput(detail) => {
                CoreError::MalformedInput(format!("material {}: {detail}", self.name))
            }
            other => other,
        })
    }
}

/// Names of the model features, in `AttributeVector` order.
pub const ATTRIBUTE_NAMES: [&str; 6] = [
    "CO2 Emissions",
    "Recyclability",
    "Energy Efficiency",
    "Availability",
    "Durability",
    "Aesthetic Value",
];

/// The six numeric features both predictors consume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttributeVector([f64; 6]);

impl AttributeVector {
    pub const LEN: usize = 6;

    pub fn new(values: [f64; 6]) -> Result<Self, CoreError> {
        if let Some(position) = values.iter().position(|value| !value.is_finite()) {
            return Err(CoreError::MalformedInput(format!(
                "{} is not a finite number",
                ATTRIBUTE_NAMES[position]
            )));
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64; 6] {
        &self.0
    }

    pub fn get(&self, feature: usize) -> f64 {
        self.0[feature]
    }
}

/// The three read-only tables loaded at startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Datasets {
    pub points: Vec<GeospatialPoint>,
    pub environment: Vec<EnvironmentalRecord>,
    pub materials: Vec<Material>,
}

impl Datasets {
    pub fn points_matching(&self, filter: InfraFilter) -> Vec<&GeospatialPoint> {
        self.points
            .iter()
            .filter(|point| filter.matches(point.land_use))
            .collect()
    }
}

/// Infrastructure selector state: everything or one land-use category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfraFilter {
    #[default]
    All,
    Only(LandUse),
}

impl InfraFilter {
    pub fn matches(&self, land_use: LandUse) -> bool {
        match self {
            InfraFilter::All => true,
            InfraFilter::Only(wanted) => *wanted == land_use,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InfraFilter::All => "All",
            InfraFilter::Only(land_use) => land_use.name(),
        }
    }

    pub fn options() -> Vec<InfraFilter> {
        std::iter::once(InfraFilter::All)
            .chain(LandUse::ALL.into_iter().map(InfraFilter::Only))
            .collect()
    }
}

/// A coordinate picked on the map. Transient: never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectedLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl SelectedLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for SelectedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lat {:.5}, lng {:.5}", self.latitude, self.longitude)
    }
}
