use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TripMeasurement {
    #[serde(default)]
    pub distance_miles: Option<f64>,
    #[serde(default)]
    pub duration_minutes: Option<f64>,
    #[serde(default)]
    pub hours_requested: Option<f64>,
}

impl TripMeasurement {
    pub fn measured(distance_miles: f64, duration_minutes: f64) -> Self {
        Self {
            distance_miles: Some(distance_miles),
            duration_minutes: Some(duration_minutes),
            hours_requested: None,
        }
    }

    pub fn hourly(hours_requested: Option<f64>) -> Self {
        Self {
            distance_miles: None,
            duration_minutes: None,
            hours_requested,
        }
    }
}

/// Where a quote's trip measurement comes from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum MeasurementSource {
    Measured {
        #[serde(default)]
        distance_miles: Option<f64>,
        #[serde(default)]
        duration_minutes: Option<f64>,
    },
    Hourly {
        #[serde(default)]
        hours_requested: Option<f64>,
    },
    GooglePlaces {
        origin_place_id: String,
        destination_place_id: String,
    },
}

impl MeasurementSource {
    /// Measurement carried in the request itself. Place pairs need a lookup
    /// and return `None`.
    pub fn inline(&self) -> Option<TripMeasurement> {
        match self {
            Self::Measured {
                distance_miles,
                duration_minutes,
            } => Some(TripMeasurement {
                distance_miles: *distance_miles,
                duration_minutes: *duration_minutes,
                hours_requested: None,
            }),
            Self::Hourly { hours_requested } => Some(TripMeasurement::hourly(*hours_requested)),
            Self::GooglePlaces { .. } => None,
        }
    }
}
