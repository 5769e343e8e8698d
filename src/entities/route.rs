use serde::{Deserialize, Serialize};

use crate::entities::GeoPoint;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub path: Vec<GeoPoint>,
    pub eta_minutes: Option<f64>,
    pub status: Status,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Status {
    Pending,
    Ready,
    Fallback { reason: FallbackReason },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    RoutingServiceError,
    NoRouteFound,
    MalformedPolyline,
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::Pending => "pending".into(),
            Self::Ready => "ready".into(),
            Self::Fallback { reason: _ } => "fallback".into(),
        }
    }
}

impl Route {
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            eta_minutes: None,
            status: Status::Pending,
        }
    }

    pub fn ready(path: Vec<GeoPoint>, eta_minutes: f64) -> Self {
        Self {
            path,
            eta_minutes: Some(eta_minutes),
            status: Status::Ready,
        }
    }

    pub fn fallback(reason: FallbackReason, eta_minutes: f64) -> Self {
        Self {
            path: Vec::new(),
            eta_minutes: Some(eta_minutes),
            status: Status::Fallback { reason },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.status, Status::Fallback { .. })
    }

    pub fn line_string(&self) -> geo_types::LineString<f64> {
        self.path
            .iter()
            .map(|point| geo_types::Coord {
                x: point.longitude(),
                y: point.latitude(),
            })
            .collect()
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new()
    }
}
