pub mod google_maps;

use std::fmt::{self, Display};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{entities::GeoPoint, error::Error};

pub use google_maps::{DirectionsRoute, GoogleMaps, OverviewPolyline};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Driving,
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TravelMode::Driving => "driving",
            }
        )
    }
}

/// External directions service.
#[async_trait]
pub trait RoutingService {
    /// Candidate routes between the two points, best first. Errors with
    /// `no_route_found` when the service has no candidate.
    async fn find_directions(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        mode: TravelMode,
    ) -> Result<Vec<DirectionsRoute>, Error>;
}

pub type DynRoutingService = std::sync::Arc<dyn RoutingService + Send + Sync>;
