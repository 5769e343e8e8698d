use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{invalid_coordinate_format_error, Error};

/// Unvalidated latitude/longitude pair as it arrives over the wire or from a
/// device.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A point on Earth whose coordinates are known to be within range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Coordinates", into = "Coordinates")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid_coordinate_format_error());
        }

        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid_coordinate_format_error());
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parses a stored `"<lat>,<lon>"` value.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut parts = text.split(',');

        let (latitude, longitude) = match (parts.next(), parts.next(), parts.next()) {
            (Some(latitude), Some(longitude), None) => (latitude, longitude),
            _ => return Err(invalid_coordinate_format_error()),
        };

        let latitude: f64 = latitude
            .trim()
            .parse()
            .map_err(|_| invalid_coordinate_format_error())?;
        let longitude: f64 = longitude
            .trim()
            .parse()
            .map_err(|_| invalid_coordinate_format_error())?;

        Self::new(latitude, longitude)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl FromStr for GeoPoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Coordinates> for GeoPoint {
    type Error = Error;

    fn try_from(coordinates: Coordinates) -> Result<Self, Self::Error> {
        Self::new(coordinates.latitude, coordinates.longitude)
    }
}

impl From<GeoPoint> for Coordinates {
    fn from(point: GeoPoint) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}

// query parameter form expected by the directions service
impl From<GeoPoint> for String {
    fn from(point: GeoPoint) -> Self {
        format!("{},{}", point.latitude, point.longitude)
    }
}

impl From<GeoPoint> for geo_types::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo_types::Point::new(point.longitude, point.latitude)
    }
}
