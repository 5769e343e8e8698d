use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Business, GeoPoint, Route, RoutePlan};
use crate::error::Error;
use crate::navigation::{Estimate, PositionProvider};

#[async_trait]
pub trait RouteAPI {
    /// Never fails: service problems come back as a fallback route.
    async fn resolve_route(&self, origin: GeoPoint, destination: GeoPoint) -> Route;

    /// Route from wherever `position` says the user is to the business.
    async fn plan_route(
        &self,
        business_id: Uuid,
        position: &(dyn PositionProvider + Send + Sync),
    ) -> Result<RoutePlan, Error>;

    fn estimate(&self, origin: GeoPoint, destination: GeoPoint) -> Estimate;
}

#[async_trait]
pub trait BusinessAPI {
    async fn create_business(
        &self,
        name: String,
        exact_location: Option<String>,
        address: Option<String>,
    ) -> Result<Business, Error>;

    async fn find_business(&self, id: Uuid) -> Result<Business, Error>;
}

pub trait API: RouteAPI + BusinessAPI {}
