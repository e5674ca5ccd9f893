//! Nearest-environment lookup for a selected coordinate.

use super::{
    entities::{EnvironmentalRecord, SelectedLocation},
    error::CoreError,
};

/// The record closest to a selection, with its table index and distance
/// in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolved<'a> {
    pub record: &'a EnvironmentalRecord,
    pub index: usize,
    pub distance: f64,
}

pub fn planar_distance(selected: &SelectedLocation, record: &EnvironmentalRecord) -> f64 {
    let d_lat = record.latitude - selected.latitude;
    let d_lon = record.longitude - selected.longitude;
    (d_lat * d_lat + d_lon * d_lon).sqrt()
}

/// Linear scan over `records`; ties keep the earliest row. Records whose
/// distance is not finite are skipped.
pub fn resolve<'a>(
    selected: &SelectedLocation,
    records: &'a [EnvironmentalRecord],
) -> Result<Resolved<'a>, CoreError> {
    let mut best: Option<Resolved<'a>> = None;

    for (index, record) in records.iter().enumerate() {
        let distance = planar_distance(selected, record);
        if !distance.is_finite() {
            continue;
        }
        let closer = best
            .as_ref()
            .map(|current| distance < current.distance)
            .unwrap_or(true);
        if closer {
            best = Some(Resolved {
                record,
                index,
                distance,
            });
        }
    }

    best.ok_or(CoreError::EmptyDataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Rating;

    fn record(latitude: f64, longitude: f64) -> EnvironmentalRecord {
        EnvironmentalRecord {
            latitude,
            longitude,
            co2_emissions: 120.0,
            traffic_congestion: Rating::Average,
            water_availability: Rating::Good,
            waste_management: Rating::Good,
            population_estimate: 1000,
            recyclability: Some(0.4),
            energy_efficiency: Some(0.6),
            availability: Some(0.7),
            durability: Some(0.8),
            aesthetic_value: Some(0.5),
        }
    }

    #[test]
    fn picks_the_closer_of_two_records() {
        let records = vec![record(26.90, 75.78), record(27.00, 75.90)];
        let resolved = resolve(&SelectedLocation::new(26.91, 75.79), &records).unwrap();
        assert_eq!(resolved.index, 0);
        assert_eq!(resolved.record, &records[0]);
    }

    #[test]
    fn singleton_always_wins() {
        let records = vec![record(10.0, 10.0)];
        for (lat, lon) in [(-80.0, 170.0), (10.0, 10.0), (0.0, 0.0)] {
            let resolved = resolve(&SelectedLocation::new(lat, lon), &records).unwrap();
            assert_eq!(resolved.index, 0);
        }
    }

    #[test]
    fn empty_table_is_an_error() {
        let err = resolve(&SelectedLocation::new(26.9, 75.8), &[]).unwrap_err();
        assert_eq!(err, CoreError::EmptyDataset);
    }

    #[test]
    fn ties_keep_table_order() {
        let records = vec![record(1.0, 0.0), record(-1.0, 0.0), record(0.0, 1.0)];
        let resolved = resolve(&SelectedLocation::new(0.0, 0.0), &records).unwrap();
        assert_eq!(resolved.index, 0);
    }

    #[test]
    fn non_finite_rows_never_win() {
        let records = vec![
            record(f64::NAN, 75.78),
            record(26.91, 75.79),
            record(26.90, f64::INFINITY),
        ];
        let resolved = resolve(&SelectedLocation::new(26.91, 75.79), &records).unwrap();
        assert_eq!(resolved.index, 1);
        assert_eq!(resolved.distance, 0.0);

        let unusable = vec![record(f64::NAN, f64::NAN)];
        let err = resolve(&SelectedLocation::new(26.91, 75.79), &unusable).unwrap_err();
        assert_eq!(err, CoreError::EmptyDataset);
    }

    #[test]
    fn result_is_never_farther_than_any_member() {
        let records: Vec<_> = (0..40)
            .map(|i| {
                let t = i as f64;
                record(26.8 + (t * 0.37).sin() * 0.1, 75.7 + (t * 0.91).cos() * 0.1)
            })
            .collect();
        let queries = [(26.85, 75.75), (26.95, 75.65), (26.7, 75.9), (27.2, 75.7)];
        for (lat, lon) in queries {
            let query = SelectedLocation::new(lat, lon);
            let resolved = resolve(&query, &records).unwrap();
            assert!(records.iter().any(|r| r == resolved.record));
            for other in &records {
                assert!(resolved.distance <= planar_distance(&query, other));
            }
        }
    }
}
