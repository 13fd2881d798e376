use serde::{Deserialize, Serialize};

/// Service-level rate row, in cents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRates {
    pub min_fare_cents: i64,
    pub base_fee_cents: i64,
    pub per_mile_cents: i64,
    pub per_minute_cents: i64,
    pub per_hour_cents: i64,
}

/// Vehicle-level overrides. A field only takes effect when set and positive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRates {
    #[serde(default)]
    pub base_fare_cents: Option<i64>,
    #[serde(default)]
    pub per_mile_cents: Option<i64>,
    #[serde(default)]
    pub per_minute_cents: Option<i64>,
    #[serde(default)]
    pub per_hour_cents: Option<i64>,
}
