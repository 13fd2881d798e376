use super::helpers::{fetch_service_type, fetch_vehicle, measure};
use super::Engine;

use async_trait::async_trait;
use sqlx::{types::Json, Executor, Row};
use uuid::Uuid;

use crate::{
    api::QuoteAPI,
    entities::{MeasurementSource, Quote},
    error::{not_found_error, Error},
    pricing::BreakdownQuote,
};

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_quote(
        &self,
        service_type_id: Uuid,
        vehicle_id: Option<Uuid>,
        source: MeasurementSource,
    ) -> Result<Quote, Error> {
        let mut conn = self.pool.acquire().await?;

        let service_type = fetch_service_type(&mut conn, &service_type_id).await?;
        let vehicle = match vehicle_id {
            Some(id) => Some(fetch_vehicle(&mut conn, &id).await?),
            None => None,
        };

        let measurement = measure(source).await?;

        let quote = Quote::price(&service_type, vehicle.as_ref(), measurement);

        conn.execute(
            sqlx::query("INSERT INTO quotes (token, data) VALUES ($1, $2)")
                .bind(&quote.token)
                .bind(Json(&quote)),
        )
        .await?;

        tracing::info!(
            token = %quote.token,
            strategy = %quote.strategy,
            subtotal_cents = quote.result.subtotal_cents,
            "created quote"
        );

        Ok(quote)
    }

    #[tracing::instrument(skip(self))]
    async fn find_quote(&self, token: Uuid) -> Result<Quote, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM quotes WHERE token = $1").bind(&token))
            .await?;

        let result = maybe_result.ok_or_else(not_found_error)?;
        let Json(quote): Json<Quote> = result.try_get("data")?;

        Ok(quote)
    }

    #[tracing::instrument(skip(self))]
    async fn preview_breakdown(
        &self,
        service_type_id: Uuid,
        source: MeasurementSource,
    ) -> Result<BreakdownQuote, Error> {
        let service_type = {
            let mut conn = self.pool.acquire().await?;
            fetch_service_type(&mut conn, &service_type_id).await?
        };

        let measurement = measure(source).await?;

        Ok(BreakdownQuote::for_service_type(&service_type, &measurement))
    }
}
