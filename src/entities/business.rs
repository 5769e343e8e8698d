use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::GeoPoint;
use crate::error::{invalid_coordinate_format_error, Error};

/// Business record as stored upstream. Only the parts the route screen reads
/// are modelled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    pub name: String,
    /// `"<lat>,<lon>"`, validated on use.
    pub exact_location: Option<String>,
    pub address: Option<String>,
}

impl Business {
    pub fn new(name: String, exact_location: Option<String>, address: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            exact_location,
            address,
        }
    }

    /// The business as a route destination. A record without a usable
    /// `exact_location` cannot be routed to.
    #[tracing::instrument(skip(self), fields(id = %self.id))]
    pub fn destination(&self) -> Result<GeoPoint, Error> {
        let raw = self
            .exact_location
            .as_deref()
            .ok_or_else(invalid_coordinate_format_error)?;

        GeoPoint::parse(raw)
    }
}
