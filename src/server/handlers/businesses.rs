use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Business, RoutePlan};
use crate::error::Error;
use crate::navigation::ReportedPosition;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    name: String,
    exact_location: Option<String>,
    address: Option<String>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Business>, Error> {
    let business = api
        .create_business(params.name, params.exact_location, params.address)
        .await?;

    Ok(business.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Business>, Error> {
    let business = api.find_business(id).await?;

    Ok(business.into())
}

/// The caller's position travels with the request; there is no implicit
/// current user.
pub async fn plan_route(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(position): Json<ReportedPosition>,
) -> Result<Json<RoutePlan>, Error> {
    let plan = api.plan_route(id, &position).await?;

    Ok(plan.into())
}
