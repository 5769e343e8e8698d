//! Great-circle distance and a travel time estimate derived from it.
//!
//! Distance uses the haversine formula on a sphere of radius 6371 km; the
//! estimate assumes a constant driving speed.

use serde::{Deserialize, Serialize};

use crate::entities::GeoPoint;
use crate::error::{invalid_config_error, Error};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub distance_km: f64,
    pub eta_minutes: f64,
}

/// Average speed used to turn a distance into a travel time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AssumedSpeed(f64);

impl AssumedSpeed {
    pub const DEFAULT_KMH: f64 = 40.0;

    pub fn kmh(kmh: f64) -> Result<Self, Error> {
        if !kmh.is_finite() || kmh <= 0.0 {
            return Err(invalid_config_error("ASSUMED_SPEED_KMH"));
        }

        Ok(Self(kmh))
    }

    pub fn as_kmh(&self) -> f64 {
        self.0
    }
}

impl Default for AssumedSpeed {
    fn default() -> Self {
        Self(Self::DEFAULT_KMH)
    }
}

pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    // rounding can push h a hair past 1 for antipodal points
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

pub fn estimate(a: GeoPoint, b: GeoPoint, speed: AssumedSpeed) -> Estimate {
    let distance_km = distance_km(a, b);

    Estimate {
        distance_km,
        eta_minutes: distance_km / speed.as_kmh() * 60.0,
    }
}

pub fn estimate_default(a: GeoPoint, b: GeoPoint) -> Estimate {
    estimate(a, b, AssumedSpeed::default())
}
