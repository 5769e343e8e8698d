use crate::{
    entities::{FallbackReason, GeoPoint, Route},
    error::{no_route_found_error, Error, MALFORMED_POLYLINE_ERROR, NO_ROUTE_FOUND_ERROR},
    external::{DynRoutingService, TravelMode},
    navigation::{estimate, polyline, AssumedSpeed},
};

/// Turns two endpoints into a [`Route`].
///
/// One directions request is made per call. The path comes from the first
/// candidate route; the ETA is always the local haversine estimate, whatever
/// the service reports. Failures of the service degrade the route to an
/// ETA-only fallback instead of surfacing as errors.
#[derive(Clone)]
pub struct RouteResolver {
    routing: DynRoutingService,
    speed: AssumedSpeed,
}

impl RouteResolver {
    pub fn new(routing: DynRoutingService, speed: AssumedSpeed) -> Self {
        Self { routing, speed }
    }

    pub fn speed(&self) -> AssumedSpeed {
        self.speed
    }

    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, origin: GeoPoint, destination: GeoPoint) -> Route {
        let eta_minutes = estimate(origin, destination, self.speed).eta_minutes;

        match self.fetch_path(origin, destination).await {
            Ok(path) => {
                tracing::info!(points = path.len(), "route ready");
                Route::ready(path, eta_minutes)
            }
            Err(err) => {
                let reason = fallback_reason(&err);
                tracing::warn!(?reason, %err, "falling back to distance estimate");
                Route::fallback(reason, eta_minutes)
            }
        }
    }

    async fn fetch_path(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<Vec<GeoPoint>, Error> {
        let routes = self
            .routing
            .find_directions(origin, destination, TravelMode::Driving)
            .await?;

        let route = routes.first().ok_or_else(no_route_found_error)?;

        polyline::decode(&route.overview_polyline.points)
    }
}

fn fallback_reason(err: &Error) -> FallbackReason {
    match err.code {
        NO_ROUTE_FOUND_ERROR => FallbackReason::NoRouteFound,
        MALFORMED_POLYLINE_ERROR => FallbackReason::MalformedPolyline,
        _ => FallbackReason::RoutingServiceError,
    }
}
