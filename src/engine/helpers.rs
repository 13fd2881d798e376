use sqlx::{types::Json, Executor, PgConnection, Row};
use uuid::Uuid;

use crate::{
    entities::{MeasurementSource, ServiceType, TripMeasurement, Vehicle},
    error::{not_found_error, unexpected_error, Error},
    external::google_maps,
};

#[tracing::instrument(skip(conn))]
pub async fn fetch_service_type(
    conn: &mut PgConnection,
    id: &Uuid,
) -> Result<ServiceType, Error> {
    let Json(service_type): Json<ServiceType> = conn
        .fetch_optional(sqlx::query("SELECT data FROM service_types WHERE id = $1").bind(id))
        .await?
        .ok_or_else(not_found_error)?
        .try_get("data")?;

    Ok(service_type)
}

#[tracing::instrument(skip(conn))]
pub async fn fetch_service_type_for_update(
    conn: &mut PgConnection,
    id: &Uuid,
) -> Result<ServiceType, Error> {
    let Json(service_type): Json<ServiceType> = conn
        .fetch_optional(
            sqlx::query("SELECT data FROM service_types WHERE id = $1 FOR UPDATE").bind(id),
        )
        .await?
        .ok_or_else(not_found_error)?
        .try_get("data")?;

    Ok(service_type)
}

#[tracing::instrument(skip(conn))]
pub async fn fetch_vehicle(conn: &mut PgConnection, id: &Uuid) -> Result<Vehicle, Error> {
    let Json(vehicle): Json<Vehicle> = conn
        .fetch_optional(sqlx::query("SELECT data FROM vehicles WHERE id = $1").bind(id))
        .await?
        .ok_or_else(not_found_error)?
        .try_get("data")?;

    Ok(vehicle)
}

#[tracing::instrument(skip(conn))]
pub async fn fetch_vehicle_for_update(
    conn: &mut PgConnection,
    id: &Uuid,
) -> Result<Vehicle, Error> {
    let Json(vehicle): Json<Vehicle> = conn
        .fetch_optional(
            sqlx::query("SELECT data FROM vehicles WHERE id = $1 FOR UPDATE").bind(id),
        )
        .await?
        .ok_or_else(not_found_error)?
        .try_get("data")?;

    Ok(vehicle)
}

#[tracing::instrument(skip(conn))]
pub async fn update_service_type(
    conn: &mut PgConnection,
    service_type: &ServiceType,
) -> Result<(), Error> {
    conn.execute(
        sqlx::query("UPDATE service_types SET data = $2 WHERE id = $1")
            .bind(&service_type.id)
            .bind(Json(service_type)),
    )
    .await?;

    Ok(())
}

#[tracing::instrument(skip(conn))]
pub async fn update_vehicle(conn: &mut PgConnection, vehicle: &Vehicle) -> Result<(), Error> {
    conn.execute(
        sqlx::query("UPDATE vehicles SET data = $2 WHERE id = $1")
            .bind(&vehicle.id)
            .bind(Json(vehicle)),
    )
    .await?;

    Ok(())
}

/// Turns a measurement source into distance/duration or requested hours.
#[tracing::instrument]
pub async fn measure(source: MeasurementSource) -> Result<TripMeasurement, Error> {
    match source {
        MeasurementSource::GooglePlaces {
            origin_place_id,
            destination_place_id,
        } => google_maps::measure_trip(origin_place_id, destination_place_id).await,
        inline => inline.inline().ok_or_else(unexpected_error),
    }
}
