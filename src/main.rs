use chauffeur::config::Config;
use chauffeur::db::PgPool;
use chauffeur::engine::Engine;
use chauffeur::error::Error;
use chauffeur::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let PgPool(pool) = PgPool::new(&config.database_url, config.max_connections).await?;

    let engine = Engine::new(pool).await?;

    serve(engine, config.bind_address).await
}
