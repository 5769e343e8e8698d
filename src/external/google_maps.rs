use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    config::GoogleMapsConfig,
    entities::GeoPoint,
    error::{no_route_found_error, upstream_error, Error},
    external::{RoutingService, TravelMode},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DirectionsRoute {
    pub overview_polyline: OverviewPolyline,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OverviewPolyline {
    pub points: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
    error_message: Option<String>,
}

impl DirectionsResponse {
    fn into_routes(self) -> Result<Vec<DirectionsRoute>, Error> {
        match self.status.as_str() {
            "OK" if !self.routes.is_empty() => Ok(self.routes),
            "OK" | "ZERO_RESULTS" => Err(no_route_found_error()),
            status => {
                tracing::warn!(
                    status,
                    message = self.error_message.as_deref().unwrap_or_default(),
                    "directions request rejected"
                );
                Err(upstream_error())
            }
        }
    }
}

#[derive(Debug)]
pub struct GoogleMaps {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl GoogleMaps {
    pub fn new(config: &GoogleMapsConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn directions_url(&self) -> String {
        format!("{}/maps/api/directions/json", self.api_base)
    }
}

#[async_trait]
impl RoutingService for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn find_directions(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        mode: TravelMode,
    ) -> Result<Vec<DirectionsRoute>, Error> {
        let origin: String = origin.into();
        let destination: String = destination.into();

        let res = self
            .client
            .get(self.directions_url())
            .query(&[("origin", origin)])
            .query(&[("destination", destination)])
            .query(&[("mode", mode.to_string())])
            .query(&[("key", &self.api_key)])
            .send()
            .await?;

        let status_code = res.status();

        if !status_code.is_success() {
            tracing::warn!(status = status_code.as_u16(), "directions request failed");
            return Err(upstream_error());
        }

        let data: DirectionsResponse = serde_json::from_slice(&res.bytes().await?)?;

        data.into_routes()
    }
}
