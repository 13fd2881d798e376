use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{PricingStrategy, ServiceRates, ServiceType};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    name: String,
    strategy: PricingStrategy,
    rates: ServiceRates,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateRatesParams {
    rates: ServiceRates,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<ServiceType>, Error> {
    let service_type = api
        .create_service_type(params.name, params.strategy, params.rates)
        .await?;

    Ok(service_type.into())
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<ServiceType>>, Error> {
    let service_types = api.list_service_types().await?;

    Ok(service_types.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<ServiceType>, Error> {
    let service_type = api.find_service_type(id).await?;

    Ok(service_type.into())
}

pub async fn update_rates(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<UpdateRatesParams>,
) -> Result<Json<ServiceType>, Error> {
    let service_type = api.update_service_rates(id, params.rates).await?;

    Ok(service_type.into())
}
