mod business_api;
mod resolver;
mod route_api;
mod session;

use std::sync::Arc;

use crate::{
    api::API,
    config::Config,
    db::{DynBusinessDirectory, PgBusinessDirectory, PgPool},
    error::Error,
    external::GoogleMaps,
};

pub use resolver::RouteResolver;
pub use session::{RouteSession, SessionRoute};

pub struct Engine {
    directory: DynBusinessDirectory,
    resolver: RouteResolver,
}

impl Engine {
    pub fn new(directory: DynBusinessDirectory, resolver: RouteResolver) -> Self {
        Self {
            directory,
            resolver,
        }
    }

    /// Wires the engine to Postgres and the Google Maps directions API.
    #[tracing::instrument(name = "Engine::connect", skip_all)]
    pub async fn connect(config: &Config) -> Result<Self, Error> {
        let PgPool(pool) =
            PgPool::new(&config.database_url, config.database_max_connections).await?;

        let directory = Arc::new(PgBusinessDirectory::new(pool).await?);
        let routing = Arc::new(GoogleMaps::new(&config.google_maps)?);

        Ok(Self::new(
            directory,
            RouteResolver::new(routing, config.assumed_speed),
        ))
    }

    /// A fresh route session for one visit of the route screen.
    pub fn session(&self) -> RouteSession {
        RouteSession::new(self.resolver.clone())
    }
}

impl API for Engine {}
