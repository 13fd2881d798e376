use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{MeasurementSource, Quote};
use crate::error::Error;
use crate::pricing::BreakdownQuote;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    service_type_id: Uuid,
    #[serde(default)]
    vehicle_id: Option<Uuid>,
    measurement: MeasurementSource,
}

#[derive(Serialize, Deserialize)]
pub struct BreakdownParams {
    service_type_id: Uuid,
    measurement: MeasurementSource,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Quote>, Error> {
    let quote = api
        .create_quote(params.service_type_id, params.vehicle_id, params.measurement)
        .await?;

    Ok(quote.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(token): Path<Uuid>,
) -> Result<Json<Quote>, Error> {
    let quote = api.find_quote(token).await?;

    Ok(quote.into())
}

pub async fn breakdown(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<BreakdownParams>,
) -> Result<Json<BreakdownQuote>, Error> {
    let quote = api
        .preview_breakdown(params.service_type_id, params.measurement)
        .await?;

    Ok(quote.into())
}
