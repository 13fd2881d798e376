use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::VehicleRates;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub passenger_capacity: u32,
    /// Minimum billable hours for hourly bookings.
    pub min_hours: i64,
    pub rates: VehicleRates,
}

impl Vehicle {
    pub fn new(name: String, passenger_capacity: u32, min_hours: i64, rates: VehicleRates) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            passenger_capacity,
            min_hours,
            rates,
        }
    }
}
