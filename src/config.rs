use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{invalid_config_error, Error};
use crate::navigation::AssumedSpeed;

pub const DEFAULT_GOOGLE_MAPS_API_BASE: &str = "https://maps.googleapis.com";

#[derive(Clone, Debug)]
pub struct GoogleMapsConfig {
    /// Scheme and host, e.g. `https://maps.googleapis.com`.
    pub api_base: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl GoogleMapsConfig {
    pub fn new(api_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub google_maps: GoogleMapsConfig,
    pub database_url: String,
    pub database_max_connections: u32,
    pub assumed_speed: AssumedSpeed,
    pub bind_addr: SocketAddr,
}

impl Config {
    #[tracing::instrument(name = "Config::from_env")]
    pub fn from_env() -> Result<Self, Error> {
        let google_maps = GoogleMapsConfig {
            api_base: optional_var("GOOGLE_MAPS_API_BASE")?
                .unwrap_or_else(|| DEFAULT_GOOGLE_MAPS_API_BASE.into()),
            api_key: env::var("GOOGLE_MAPS_API_KEY")?,
            timeout: Duration::from_secs(parsed_var("ROUTING_TIMEOUT_SECS", 10)?),
        };

        let assumed_speed =
            AssumedSpeed::kmh(parsed_var("ASSUMED_SPEED_KMH", AssumedSpeed::DEFAULT_KMH)?)?;

        Ok(Self {
            google_maps,
            database_url: env::var("DATABASE_URL")?,
            database_max_connections: parsed_var("DATABASE_MAX_CONNECTIONS", 5)?,
            assumed_speed,
            bind_addr: parsed_var("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?,
        })
    }
}

fn optional_var(name: &str) -> Result<Option<String>, Error> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn parsed_var<T: FromStr>(name: &str, default: T) -> Result<T, Error> {
    match optional_var(name)? {
        Some(value) => value.trim().parse().map_err(|_| invalid_config_error(name)),
        None => Ok(default),
    }
}
