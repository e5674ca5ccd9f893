//! CSV loading for the three planning tables.
//!
//! Each file is read from the configured data directory when present there,
//! otherwise from the copy embedded in the binary.

use std::{
    borrow::Cow,
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, Trim};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

use crate::{
    domain::{Datasets, EnvironmentalRecord, GeospatialPoint, LandUse, Material, Rating},
    util::assets,
};

pub const GEOSPATIAL_FILE: &str = "synthetic_geospatial_data.csv";
pub const ENVIRONMENT_FILE: &str = "synthetic_environmental_data.csv";
pub const MATERIALS_FILE: &str = "construction_materials_data.csv";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{table}: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
    #[error("{table} row {row}: {detail}")]
    InvalidValue {
        table: &'static str,
        row: usize,
        detail: String,
    },
    #[error("no data directory copy or embedded copy of {0}")]
    Missing(&'static str),
}

#[derive(Debug, Deserialize)]
struct PointRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[serde(rename = "Land Use")]
    land_use: String,
}

#[derive(Debug, Deserialize)]
struct EnvironmentRow {
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[serde(rename = "CO2_Emissions")]
    co2_emissions: f64,
    #[serde(rename = "Traffic_Congestion")]
    traffic_congestion: String,
    #[serde(rename = "Water_Availability")]
    water_availability: String,
    #[serde(rename = "Waste_Management")]
    waste_management: String,
    #[serde(rename = "Population_Estimates")]
    population_estimates: f64,
    #[serde(rename = "Recyclability", default)]
    recyclability: Option<f64>,
    #[serde(rename = "Energy_Efficiency", default)]
    energy_efficiency: Option<f64>,
    #[serde(rename = "Availability", default)]
    availability: Option<f64>,
    #[serde(rename = "Durability", default)]
    durability: Option<f64>,
    #[serde(rename = "Aesthetic_Value", default)]
    aesthetic_value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct MaterialRow {
    #[serde(rename = "Material")]
    name: String,
    #[serde(rename = "CO2_Emissions")]
    co2_emissions: f64,
    #[serde(rename = "Recyclability")]
    recyclability: f64,
    #[serde(rename = "Energy_Efficiency")]
    energy_efficiency: f64,
    #[serde(rename = "Availability")]
    availability: f64,
    #[serde(rename = "Durability")]
    durability: f64,
    #[serde(rename = "Aesthetic_Value")]
    aesthetic_value: f64,
    #[serde(rename = "Cost")]
    cost: f64,
    #[serde(rename = "Eco_Friendly")]
    eco_friendly: String,
}

pub fn load_datasets(data_dir: Option<&Path>) -> Result<Datasets, DatasetError> {
    let points = parse_points(&table_bytes(data_dir, GEOSPATIAL_FILE)?[..])?;
    let environment = parse_environment(&table_bytes(data_dir, ENVIRONMENT_FILE)?[..])?;
    let materials = parse_materials(&table_bytes(data_dir, MATERIALS_FILE)?[..])?;

    tracing::info!(
        points = points.len(),
        environment = environment.len(),
        materials = materials.len(),
        "loaded planning tables"
    );

    Ok(Datasets {
        points,
        environment,
        materials,
    })
}

fn table_bytes(
    data_dir: Option<&Path>,
    file: &'static str,
) -> Result<Cow<'static, [u8]>, DatasetError> {
    if let Some(dir) = data_dir {
        let path = dir.join(file);
        if path.is_file() {
            tracing::info!(path = %path.display(), "reading table from data directory");
            return fs::read(&path)
                .map(Cow::Owned)
                .map_err(|source| DatasetError::Io { path, source });
        }
    }

    tracing::debug!(file, "using embedded table");
    assets::dataset(file).ok_or(DatasetError::Missing(file))
}

fn read_rows<T, R>(table: &'static str, reader: R) -> Result<Vec<(usize, T)>, DatasetError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    csv.deserialize::<T>()
        .enumerate()
        // Row numbers are 1-based and skip the header line.
        .map(|(idx, row)| {
            row.map(|value| (idx + 2, value))
                .map_err(|source| DatasetError::Csv { table, source })
        })
        .collect()
}

/// serde reads "NaN" and "inf" as valid floats; the tables must not.
fn finite(
    table: &'static str,
    row: usize,
    column: &str,
    value: f64,
) -> Result<f64, DatasetError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DatasetError::InvalidValue {
            table,
            row,
            detail: format!("{column} must be a finite number, got {value}"),
        })
    }
}

pub fn parse_points<R: Read>(reader: R) -> Result<Vec<GeospatialPoint>, DatasetError> {
    const TABLE: &str = "geospatial";
    read_rows::<PointRow, _>(TABLE, reader)?
        .into_iter()
        .map(|(row, raw)| {
            let land_use = LandUse::parse(&raw.land_use).ok_or_else(|| DatasetError::InvalidValue {
                table: TABLE,
                row,
                detail: format!("unknown land use {:?}", raw.land_use),
            })?;
            Ok(GeospatialPoint {
                id: raw.id,
                latitude: finite(TABLE, row, "Latitude", raw.latitude)?,
                longitude: finite(TABLE, row, "Longitude", raw.longitude)?,
                land_use,
            })
        })
        .collect()
}

pub fn parse_environment<R: Read>(reader: R) -> Result<Vec<EnvironmentalRecord>, DatasetError> {
    const TABLE: &str = "environment";
    read_rows::<EnvironmentRow, _>(TABLE, reader)?
        .into_iter()
        .map(|(row, raw)| {
            let rating = |column: &str, value: &str| {
                Rating::parse(value).ok_or_else(|| DatasetError::InvalidValue {
                    table: TABLE,
                    row,
                    detail: format!("{column} must be Good, Average or Poor, got {value:?}"),
                })
            };
            let population =
                finite(TABLE, row, "Population_Estimates", raw.population_estimates)?;
            Ok(EnvironmentalRecord {
                latitude: finite(TABLE, row, "Latitude", raw.latitude)?,
                longitude: finite(TABLE, row, "Longitude", raw.longitude)?,
                co2_emissions: finite(TABLE, row, "CO2_Emissions", raw.co2_emissions)?,
                traffic_congestion: rating("Traffic_Congestion", &raw.traffic_congestion)?,
                water_availability: rating("Water_Availability", &raw.water_availability)?,
                waste_management: rating("Waste_Management", &raw.waste_management)?,
                // Truncation keeps the integer bucket thresholds equivalent
                // to comparing the raw value.
                population_estimate: population.trunc() as i64,
                recyclability: raw.recyclability,
                energy_efficiency: raw.energy_efficiency,
                availability: raw.availability,
                durability: raw.durability,
                aesthetic_value: raw.aesthetic_value,
            })
        })
        .collect()
}

pub fn parse_materials<R: Read>(reader: R) -> Result<Vec<Material>, DatasetError> {
    const TABLE: &str = "materials";
    read_rows::<MaterialRow, _>(TABLE, reader)?
        .into_iter()
        .map(|(row, raw)| {
            let eco_friendly = match raw.eco_friendly.to_ascii_lowercase().as_str() {
                "1" | "true" => true,
                "0" | "false" => false,
                other => {
                    return Err(DatasetError::InvalidValue {
                        table: TABLE,
                        row,
                        detail: format!("Eco_Friendly must be 0 or 1, got {other:?}"),
                    })
                }
            };
            Ok(Material {
                co2_emissions: finite(TABLE, row, "CO2_Emissions", raw.co2_emissions)?,
                recyclability: finite(TABLE, row, "Recyclability", raw.recyclability)?,
                energy_efficiency: finite(
                    TABLE,
                    row,
                    "Energy_Efficiency",
                    raw.energy_efficiency,
                )?,
                availability: finite(TABLE, row, "Availability", raw.availability)?,
                durability: finite(TABLE, row, "Durability", raw.durability)?,
                aesthetic_value: finite(TABLE, row, "Aesthetic_Value", raw.aesthetic_value)?,
                cost: finite(TABLE, row, "Cost", raw.cost)?,
                name: raw.name,
                eco_friendly,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FittedModels, ModelSettings};

    #[test]
    fn parses_points_with_spaced_categories() {
        let csv = "ID,Latitude,Longitude,Land Use\n1,26.91,75.78,Park\n2,26.93,75.80,Government Office\n";
        let points = parse_points(csv.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].land_use, LandUse::GovernmentOffice);
        assert_eq!(points[0].id, "1");
    }

    #[test]
    fn unknown_land_use_names_the_row() {
        let csv = "ID,Latitude,Longitude,Land Use\n1,26.91,75.78,Park\n2,26.93,75.80,Stadium\n";
        let err = parse_points(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidValue { row: 3, .. }), "{err}");
    }

    #[test]
    fn environment_attributes_are_optional_columns() {
        let csv = "Latitude,Longitude,CO2_Emissions,Traffic_Congestion,Water_Availability,Waste_Management,Population_Estimates\n\
                   26.90,75.78,180.5,poor,Good,average,1250\n";
        let records = parse_environment(csv.as_bytes()).unwrap();
        assert_eq!(records[0].traffic_congestion, Rating::Poor);
        assert_eq!(records[0].waste_management, Rating::Average);
        assert_eq!(records[0].population_estimate, 1250);
        assert_eq!(records[0].recyclability, None);
        assert!(records[0].attributes().is_err());
    }

    #[test]
    fn environment_with_full_attributes_projects() {
        let csv = "Latitude,Longitude,CO2_Emissions,Traffic_Congestion,Water_Availability,Waste_Management,Population_Estimates,Recyclability,Energy_Efficiency,Availability,Durability,Aesthetic_Value\n\
                   26.90,75.78,180.5,Good,Good,Good,900,0.6,0.7,3,8,6\n\
                   26.95,75.81,90,Average,Poor,Good,1700,,0.7,3,8,6\n";
        let records = parse_environment(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].attributes().is_ok());
        assert_eq!(records[1].recyclability, None);
    }

    #[test]
    fn materials_accept_numeric_and_textual_flags() {
        let csv = "Material,CO2_Emissions,Recyclability,Energy_Efficiency,Availability,Durability,Aesthetic_Value,Cost,Eco_Friendly\n\
                   Bamboo,20,0.9,0.8,7,6,8,12.5,1\n\
                   Steel,300,0.7,0.4,9,10,6,40,false\n";
        let materials = parse_materials(csv.as_bytes()).unwrap();
        assert!(materials[0].eco_friendly);
        assert!(!materials[1].eco_friendly);
        assert_eq!(materials[0].cost, 12.5);
    }

    #[test]
    fn bad_eco_flag_is_rejected() {
        let csv = "Material,CO2_Emissions,Recyclability,Energy_Efficiency,Availability,Durability,Aesthetic_Value,Cost,Eco_Friendly\n\
                   Bamboo,20,0.9,0.8,7,6,8,12.5,maybe\n";
        assert!(matches!(
            parse_materials(csv.as_bytes()),
            Err(DatasetError::InvalidValue { table: "materials", .. })
        ));
    }

    #[test]
    fn non_numeric_cell_is_a_csv_error() {
        let csv = "ID,Latitude,Longitude,Land Use\n1,north,75.78,Park\n";
        assert!(matches!(
            parse_points(csv.as_bytes()),
            Err(DatasetError::Csv { table: "geospatial", .. })
        ));
    }

    #[test]
    fn nan_coordinates_are_rejected_with_their_row() {
        let csv = "Latitude,Longitude,CO2_Emissions,Traffic_Congestion,Water_Availability,Waste_Management,Population_Estimates\n\
                   26.91,75.79,150,Good,Good,Good,1000\n\
                   NaN,75.78,150,Good,Good,Good,1000\n";
        let err = parse_environment(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidValue { row: 3, .. }), "{err}");

        let csv = "ID,Latitude,Longitude,Land Use\n1,26.91,inf,Park\n";
        assert!(matches!(
            parse_points(csv.as_bytes()),
            Err(DatasetError::InvalidValue { table: "geospatial", row: 2, .. })
        ));
    }

    #[test]
    fn population_is_truncated_not_rounded() {
        let csv = "Latitude,Longitude,CO2_Emissions,Traffic_Congestion,Water_Availability,Waste_Management,Population_Estimates\n\
                   26.91,75.79,150,Good,Good,Good,1099.6\n";
        let records = parse_environment(csv.as_bytes()).unwrap();
        assert_eq!(records[0].population_estimate, 1099);
        assert_eq!(
            crate::domain::status::population_level(records[0].population_estimate),
            crate::domain::status::Level::Low
        );
    }

    #[test]
    fn nan_cost_is_rejected() {
        let csv = "Material,CO2_Emissions,Recyclability,Energy_Efficiency,Availability,Durability,Aesthetic_Value,Cost,Eco_Friendly\n\
                   Bamboo,20,0.9,0.8,7,6,8,12.5,1\n\
                   Cork,25,0.8,0.7,5,5,7,NaN,1\n";
        let err = parse_materials(csv.as_bytes()).unwrap_err();
        assert!(
            matches!(err, DatasetError::InvalidValue { table: "materials", row: 3, .. }),
            "{err}"
        );
        assert!(err.to_string().contains("Cost"));
    }

    #[test]
    fn embedded_tables_load_and_fit() {
        let data = load_datasets(None).unwrap();
        assert!(!data.points.is_empty());
        assert!(!data.environment.is_empty());
        assert!(data.materials.len() >= 10);
        assert!(data.environment.iter().all(|r| r.attributes().is_ok()));

        let models = FittedModels::fit(&data.materials, &ModelSettings::default()).unwrap();
        assert_eq!(
            models.report.train_rows + models.report.test_rows,
            data.materials.len()
        );
        assert!(models.report.cost_r_squared.is_some_and(f64::is_finite));
    }

    #[test]
    fn data_directory_copy_takes_precedence() {
        let dir = std::env::temp_dir().join(format!("planning-data-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(GEOSPATIAL_FILE),
            "ID,Latitude,Longitude,Land Use\nonly,1.0,2.0,Utility\n",
        )
        .unwrap();

        let data = load_datasets(Some(&dir)).unwrap();
        assert_eq!(data.points.len(), 1);
        assert_eq!(data.points[0].land_use, LandUse::Utility);
        // Missing files fall back to the embedded copies.
        assert!(!data.materials.is_empty());

        fs::remove_dir_all(&dir).unwrap();
    }
}
