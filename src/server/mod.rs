mod handlers;

use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::API;
use crate::error::{unexpected_error, Error};
use crate::server::handlers::{businesses, routes};

pub type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/routes", post(routes::create))
        .route("/estimate", get(routes::estimate))
        .route("/polyline", get(routes::decode))
        .route("/businesses", post(businesses::create))
        .route("/businesses/:id", get(businesses::find))
        .route("/businesses/:id/route", post(businesses::plan_route))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let listener = TcpListener::bind(addr).map_err(|err| {
        tracing::error!("failed to bind {}: {}", addr, err);
        unexpected_error()
    })?;

    serve_listener(Arc::new(api), listener).await
}

/// Serves on an already bound listener.
pub async fn serve_listener(api: DynAPI, listener: TcpListener) -> Result<(), Error> {
    let app = router(api);

    if let Ok(addr) = listener.local_addr() {
        tracing::info!("listening on {}", addr);
    }

    axum::Server::from_tcp(listener)
        .map_err(|err| {
            tracing::error!("failed to use listener: {}", err);
            unexpected_error()
        })?
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!("server error: {}", err);
            unexpected_error()
        })
}
