//! Display buckets for the environmental metric cards.

use super::entities::{EnvironmentalRecord, Rating};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    Moderate,
    High,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Moderate => "Moderate",
            Level::High => "High",
        }
    }
}

pub fn co2_level(co2_emissions: f64) -> Level {
    if co2_emissions > 200.0 {
        Level::High
    } else if co2_emissions > 100.0 {
        Level::Moderate
    } else {
        Level::Low
    }
}

pub fn population_level(population: i64) -> Level {
    if population < 1100 {
        Level::Low
    } else if population < 1600 {
        Level::Moderate
    } else {
        Level::High
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricKind {
    Co2,
    Traffic,
    Water,
    Waste,
    Population,
}

impl MetricKind {
    pub fn title(&self) -> &'static str {
        match self {
            MetricKind::Co2 => "CO2 Emissions",
            MetricKind::Traffic => "Traffic Congestion",
            MetricKind::Water => "Water Availability",
            MetricKind::Waste => "Waste Management",
            MetricKind::Population => "Population Estimates",
        }
    }
}

/// Whether a bucket is good or bad news; drives card colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MetricStatus {
    pub kind: MetricKind,
    pub label: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
}

fn rating_status(kind: MetricKind, rating: Rating) -> MetricStatus {
    let icon = match (kind, rating) {
        (MetricKind::Traffic, Rating::Good) => "⬇️",
        (MetricKind::Traffic, Rating::Average) => "⚠️",
        (MetricKind::Traffic, Rating::Poor) => "🔺",
        (MetricKind::Water, Rating::Good) => "💧",
        (MetricKind::Water, Rating::Average) => "🟡",
        (MetricKind::Waste, Rating::Good) => "✅",
        (MetricKind::Waste, Rating::Average) => "⚠️",
        _ => "❌",
    };
    let tone = match rating {
        Rating::Good => Tone::Positive,
        Rating::Average => Tone::Neutral,
        Rating::Poor => Tone::Negative,
    };
    MetricStatus {
        kind,
        label: rating.label(),
        icon,
        tone,
    }
}

/// The five cards shown for a resolved record, in display order.
pub fn metric_statuses(record: &EnvironmentalRecord) -> Vec<MetricStatus> {
    let co2 = co2_level(record.co2_emissions);
    let population = population_level(record.population_estimate);

    vec![
        MetricStatus {
            kind: MetricKind::Co2,
            label: co2.label(),
            icon: match co2 {
                Level::Low => "🌳",
                Level::Moderate => "🚗",
                Level::High => "🔥",
            },
            tone: match co2 {
                Level::Low => Tone::Positive,
                Level::Moderate => Tone::Neutral,
                Level::High => Tone::Negative,
            },
        },
        rating_status(MetricKind::Traffic, record.traffic_congestion),
        rating_status(MetricKind::Water, record.water_availability),
        rating_status(MetricKind::Waste, record.waste_management),
        MetricStatus {
            kind: MetricKind::Population,
            label: population.label(),
            icon: match population {
                Level::Low => "👶",
                Level::Moderate => "👨‍👩‍👦‍👦",
                Level::High => "🏙️",
            },
            tone: Tone::Neutral,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn co2_thresholds_are_exclusive() {
        assert_eq!(co2_level(100.0), Level::Low);
        assert_eq!(co2_level(100.5), Level::Moderate);
        assert_eq!(co2_level(200.0), Level::Moderate);
        assert_eq!(co2_level(200.1), Level::High);
    }

    #[test]
    fn population_thresholds() {
        assert_eq!(population_level(1099), Level::Low);
        assert_eq!(population_level(1100), Level::Moderate);
        assert_eq!(population_level(1599), Level::Moderate);
        assert_eq!(population_level(1600), Level::High);
    }

    #[test]
    fn cards_follow_display_order() {
        let record = EnvironmentalRecord {
            latitude: 26.9,
            longitude: 75.8,
            co2_emissions: 250.0,
            traffic_congestion: Rating::Poor,
            water_availability: Rating::Good,
            waste_management: Rating::Average,
            population_estimate: 2000,
            recyclability: None,
            energy_efficiency: None,
            availability: None,
            durability: None,
            aesthetic_value: None,
        };
        let cards = metric_statuses(&record);
        let kinds: Vec<_> = cards.iter().map(|card| card.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MetricKind::Co2,
                MetricKind::Traffic,
                MetricKind::Water,
                MetricKind::Waste,
                MetricKind::Population
            ]
        );
        assert_eq!(cards[0].label, "High");
        assert_eq!(cards[0].icon, "🔥");
        assert_eq!(cards[1].icon, "🔺");
        assert_eq!(cards[2].label, "Good");
        assert_eq!(cards[3].icon, "⚠️");
        assert_eq!(cards[4].label, "High");
    }
}
