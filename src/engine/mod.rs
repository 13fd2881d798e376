mod helpers;
mod quote_api;
mod service_type_api;
mod vehicle_api;

use sqlx::{Executor, Pool, Postgres};

use crate::{api::API, error::Error};

type Database = Postgres;

pub struct Engine {
    pool: Pool<Database>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>) -> Result<Self, Error> {
        // rate source (KV store)
        pool.execute(
            "CREATE TABLE IF NOT EXISTS service_types (id UUID PRIMARY KEY, data JSONB NOT NULL)",
        )
        .await?;
        pool.execute(
            "CREATE TABLE IF NOT EXISTS vehicles (id UUID PRIMARY KEY, data JSONB NOT NULL)",
        )
        .await?;

        // quote service (KV store)
        pool.execute(
            "CREATE TABLE IF NOT EXISTS quotes (token UUID PRIMARY KEY, data JSONB NOT NULL)",
        )
        .await?;

        Ok(Self { pool })
    }
}

impl API for Engine {}
