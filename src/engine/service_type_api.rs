use super::helpers::{fetch_service_type, fetch_service_type_for_update, update_service_type};
use super::Engine;

use async_trait::async_trait;
use sqlx::{types::Json, Acquire, Executor, Row};
use uuid::Uuid;

use crate::{
    api::ServiceTypeAPI,
    entities::{PricingStrategy, ServiceRates, ServiceType},
    error::Error,
};

#[async_trait]
impl ServiceTypeAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_service_type(
        &self,
        name: String,
        strategy: PricingStrategy,
        rates: ServiceRates,
    ) -> Result<ServiceType, Error> {
        let service_type = ServiceType::new(name, strategy, rates);

        let mut conn = self.pool.acquire().await?;
        conn.execute(
            sqlx::query("INSERT INTO service_types (id, data) VALUES ($1, $2)")
                .bind(&service_type.id)
                .bind(Json(&service_type)),
        )
        .await?;

        Ok(service_type)
    }

    #[tracing::instrument(skip(self))]
    async fn find_service_type(&self, id: Uuid) -> Result<ServiceType, Error> {
        let mut conn = self.pool.acquire().await?;

        fetch_service_type(&mut conn, &id).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_service_types(&self) -> Result<Vec<ServiceType>, Error> {
        let mut conn = self.pool.acquire().await?;

        let rows = conn
            .fetch_all(sqlx::query("SELECT data FROM service_types ORDER BY data->>'name'"))
            .await?;

        let mut service_types = Vec::with_capacity(rows.len());
        for row in rows {
            let Json(service_type): Json<ServiceType> = row.try_get("data")?;
            service_types.push(service_type);
        }

        Ok(service_types)
    }

    #[tracing::instrument(skip(self))]
    async fn update_service_rates(
        &self,
        id: Uuid,
        rates: ServiceRates,
    ) -> Result<ServiceType, Error> {
        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;

        let mut service_type = fetch_service_type_for_update(&mut tx, &id).await?;

        service_type.rates = rates;

        update_service_type(&mut tx, &service_type).await?;

        tx.commit().await?;

        Ok(service_type)
    }
}
