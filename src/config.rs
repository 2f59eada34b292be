//! Settings read from the environment.

use std::env;

use thiserror::Error;

use crate::{geolocation::Coordinates, orchestrator::DEFAULT_ENDPOINT};

pub const ENDPOINT_VAR: &str = "GEOCODER_ENDPOINT";
pub const LATITUDE_VAR: &str = "GEO_LATITUDE";
pub const LONGITUDE_VAR: &str = "GEO_LONGITUDE";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a number: {value:?}")]
    InvalidCoordinate { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoint: String,
    /// Where [`crate::geolocation::StaticGeolocation`] reports the device to
    /// be. `None` unless both coordinates are set.
    pub position: Option<Coordinates>,
    pub log_level: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint = lookup(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let log_level = lookup(LOG_LEVEL_VAR).unwrap_or_else(|| "info".to_string());

        let latitude = parse_coordinate(LATITUDE_VAR, lookup(LATITUDE_VAR))?;
        let longitude = parse_coordinate(LONGITUDE_VAR, lookup(LONGITUDE_VAR))?;
        let position = latitude
            .zip(longitude)
            .map(|(latitude, longitude)| Coordinates { latitude, longitude });

        Ok(Self {
            endpoint,
            position,
            log_level,
        })
    }
}

fn parse_coordinate(var: &'static str, value: Option<String>) -> Result<Option<f64>, ConfigError> {
    value
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidCoordinate { var, value })
        })
        .transpose()
}
