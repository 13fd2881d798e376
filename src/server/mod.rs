mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, patch, post},
    Router,
};

use crate::api::API;
use crate::error::{unexpected_error, Error};
use crate::server::handlers::{quotes, service_types, vehicles};

type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route(
            "/service_types",
            post(service_types::create).get(service_types::list),
        )
        .route("/service_types/:id", get(service_types::find))
        .route("/service_types/:id/rates", patch(service_types::update_rates))
        .route("/vehicles", post(vehicles::create).get(vehicles::list))
        .route("/vehicles/:id", get(vehicles::find))
        .route("/vehicles/:id/rates", patch(vehicles::update_rates))
        .route("/quotes", post(quotes::create))
        .route("/quote_breakdowns", post(quotes::breakdown))
        .route("/quotes/:token", get(quotes::find))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let app = router(Arc::new(api) as DynAPI);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!(%err, "server error");
            unexpected_error()
        })
}
