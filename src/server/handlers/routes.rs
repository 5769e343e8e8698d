use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, GeoPoint, Route};
use crate::error::Error;
use crate::navigation::{polyline, Estimate};
use crate::server::DynAPI;

/// Endpoints as sent; range-checked by the handler.
#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    origin: Coordinates,
    destination: Coordinates,
}

#[derive(Serialize, Deserialize)]
pub struct EstimateParams {
    /// `"<lat>,<lon>"`
    origin: String,
    destination: String,
}

#[derive(Serialize, Deserialize)]
pub struct DecodeParams {
    encoded: String,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Route>, Error> {
    let origin = GeoPoint::try_from(params.origin)?;
    let destination = GeoPoint::try_from(params.destination)?;

    let route = api.resolve_route(origin, destination).await;

    Ok(route.into())
}

pub async fn estimate(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<EstimateParams>,
) -> Result<Json<Estimate>, Error> {
    let origin = GeoPoint::parse(&params.origin)?;
    let destination = GeoPoint::parse(&params.destination)?;

    Ok(api.estimate(origin, destination).into())
}

pub async fn decode(Query(params): Query<DecodeParams>) -> Result<Json<Vec<GeoPoint>>, Error> {
    let points = polyline::decode(&params.encoded)?;

    Ok(points.into())
}
