use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Vehicle, VehicleRates};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    name: String,
    passenger_capacity: u32,
    #[serde(default)]
    min_hours: i64,
    #[serde(default)]
    rates: VehicleRates,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateRatesParams {
    #[serde(default)]
    min_hours: i64,
    #[serde(default)]
    rates: VehicleRates,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Vehicle>, Error> {
    let vehicle = api
        .create_vehicle(
            params.name,
            params.passenger_capacity,
            params.min_hours,
            params.rates,
        )
        .await?;

    Ok(vehicle.into())
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Vehicle>>, Error> {
    let vehicles = api.list_vehicles().await?;

    Ok(vehicles.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vehicle>, Error> {
    let vehicle = api.find_vehicle(id).await?;

    Ok(vehicle.into())
}

pub async fn update_rates(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<UpdateRatesParams>,
) -> Result<Json<Vehicle>, Error> {
    let vehicle = api
        .update_vehicle_rates(id, params.min_hours, params.rates)
        .await?;

    Ok(vehicle.into())
}
