use super::helpers::{fetch_vehicle, fetch_vehicle_for_update, update_vehicle};
use super::Engine;

use async_trait::async_trait;
use sqlx::{types::Json, Acquire, Executor, Row};
use uuid::Uuid;

use crate::{
    api::VehicleAPI,
    entities::{Vehicle, VehicleRates},
    error::Error,
};

#[async_trait]
impl VehicleAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_vehicle(
        &self,
        name: String,
        passenger_capacity: u32,
        min_hours: i64,
        rates: VehicleRates,
    ) -> Result<Vehicle, Error> {
        let vehicle = Vehicle::new(name, passenger_capacity, min_hours, rates);

        let mut conn = self.pool.acquire().await?;
        conn.execute(
            sqlx::query("INSERT INTO vehicles (id, data) VALUES ($1, $2)")
                .bind(&vehicle.id)
                .bind(Json(&vehicle)),
        )
        .await?;

        Ok(vehicle)
    }

    #[tracing::instrument(skip(self))]
    async fn find_vehicle(&self, id: Uuid) -> Result<Vehicle, Error> {
        let mut conn = self.pool.acquire().await?;

        fetch_vehicle(&mut conn, &id).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        let mut conn = self.pool.acquire().await?;

        let rows = conn
            .fetch_all(sqlx::query("SELECT data FROM vehicles ORDER BY data->>'name'"))
            .await?;

        let mut vehicles = Vec::with_capacity(rows.len());
        for row in rows {
            let Json(vehicle): Json<Vehicle> = row.try_get("data")?;
            vehicles.push(vehicle);
        }

        Ok(vehicles)
    }

    #[tracing::instrument(skip(self))]
    async fn update_vehicle_rates(
        &self,
        id: Uuid,
        min_hours: i64,
        rates: VehicleRates,
    ) -> Result<Vehicle, Error> {
        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;

        let mut vehicle = fetch_vehicle_for_update(&mut tx, &id).await?;

        vehicle.min_hours = min_hours;
        vehicle.rates = rates;

        update_vehicle(&mut tx, &vehicle).await?;

        tx.commit().await?;

        Ok(vehicle)
    }
}
