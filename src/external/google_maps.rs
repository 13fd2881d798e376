use serde::{Deserialize, Serialize};
use std::env;

use crate::{
    entities::TripMeasurement,
    error::{invalid_input_error, upstream_error, Error},
};

const METERS_PER_MILE: f64 = 1609.344;
const SECONDS_PER_MINUTE: f64 = 60.0;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Measure {
    pub value: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Element {
    pub status: String,
    pub distance: Option<Measure>,
    pub duration: Option<Measure>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Row {
    pub elements: Vec<Element>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DistanceMatrix {
    pub status: String,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl DistanceMatrix {
    /// Distance and duration of the single origin/destination pair.
    pub fn measurement(&self) -> Result<TripMeasurement, Error> {
        if self.status != "OK" {
            return Err(upstream_error());
        }

        let element = self
            .rows
            .first()
            .and_then(|row| row.elements.first())
            .ok_or_else(upstream_error)?;

        match element.status.as_str() {
            "OK" => {}
            "NOT_FOUND" | "ZERO_RESULTS" => return Err(invalid_input_error()),
            _ => return Err(upstream_error()),
        }

        let meters = element.distance.as_ref().ok_or_else(upstream_error)?.value;
        let seconds = element.duration.as_ref().ok_or_else(upstream_error)?.value;

        Ok(TripMeasurement::measured(
            meters / METERS_PER_MILE,
            seconds / SECONDS_PER_MINUTE,
        ))
    }
}

#[tracing::instrument]
pub async fn measure_trip(
    origin_place_id: String,
    destination_place_id: String,
) -> Result<TripMeasurement, Error> {
    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("https://{}/maps/api/distancematrix/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("origins", format!("place_id:{}", origin_place_id))])
        .query(&[("destinations", format!("place_id:{}", destination_place_id))])
        .send()
        .await?;

    check_status(res.status().as_u16())?;

    let data: DistanceMatrix = res.json().await?;
    let measurement = data.measurement()?;

    tracing::debug!(
        distance_miles = ?measurement.distance_miles,
        duration_minutes = ?measurement.duration_minutes,
        "measured trip"
    );

    Ok(measurement)
}

/// Client errors mean the place ids were rejected; anything else but 200 is
/// the upstream's problem.
fn check_status(status_code: u16) -> Result<(), Error> {
    if (400..500).contains(&status_code) {
        Err(invalid_input_error())
    } else if status_code != 200 {
        Err(upstream_error())
    } else {
        Ok(())
    }
}
