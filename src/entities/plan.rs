use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Business, GeoPoint, Route};

/// Everything the "how do I get there" screen shows for one business.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub business_id: Uuid,
    pub business_name: String,
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    pub route: Route,
}

impl RoutePlan {
    pub fn new(business: &Business, origin: GeoPoint, destination: GeoPoint, route: Route) -> Self {
        Self {
            business_id: business.id,
            business_name: business.name.clone(),
            origin,
            destination,
            route,
        }
    }
}
