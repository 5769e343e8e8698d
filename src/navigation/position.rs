use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, GeoPoint};
use crate::error::{permission_denied_error, position_unavailable_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Granted,
    Denied,
}

/// Host capability that knows where the user is.
#[async_trait]
pub trait PositionProvider {
    /// Asks for foreground location access. May show an OS prompt.
    async fn request_permission(&self) -> Permission;

    /// One-shot position fix; `None` when the host cannot produce one.
    async fn current_position(&self) -> Option<Coordinates>;
}

#[tracing::instrument(skip_all)]
pub async fn acquire_current_position<P>(provider: &P) -> Result<GeoPoint, Error>
where
    P: PositionProvider + Sync + ?Sized,
{
    if provider.request_permission().await != Permission::Granted {
        tracing::info!("location permission denied");
        return Err(permission_denied_error());
    }

    let coordinates = provider
        .current_position()
        .await
        .ok_or_else(position_unavailable_error)?;

    GeoPoint::try_from(coordinates).map_err(|_| {
        tracing::warn!(?coordinates, "device reported an invalid position");
        position_unavailable_error()
    })
}

/// Position the mobile client read from its own device and sent along with
/// a request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportedPosition {
    pub permission: Permission,
    pub coordinates: Option<Coordinates>,
}

#[async_trait]
impl PositionProvider for ReportedPosition {
    async fn request_permission(&self) -> Permission {
        self.permission
    }

    async fn current_position(&self) -> Option<Coordinates> {
        self.coordinates
    }
}
