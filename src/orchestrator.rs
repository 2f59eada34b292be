//! Ties the coordinate provider and the resource fetcher together and reports
//! the outcome.

use serde_json::Value;
use tracing::info;

use crate::{
    error::LookupError,
    geolocation::{Coordinates, Geolocation},
    sink::Sink,
    transport::Transport,
    two_ways::locate,
};

pub const DEFAULT_ENDPOINT: &str = "https://api-adresse.data.gouv.fr/reverse/";

/// Prepended to every failure message.
pub const FAILURE_PREFIX: &str = "Une erreur est survenue : ";

/// The reverse-geocoding url for `coords`: `lon` first, then `lat`.
pub fn target_url(endpoint: &str, coords: &Coordinates) -> String {
    format!("{endpoint}?lon={}&lat={}", coords.longitude, coords.latitude)
}

/// `features[0].properties.label` of a reverse-geocoding payload.
pub fn extract_label(payload: &Value) -> Result<String, LookupError> {
    payload
        .pointer("/features/0/properties/label")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(LookupError::MissingLabel)
}

/// The single terminal handler shared by both styles.
pub fn report<S: Sink + ?Sized>(outcome: Result<String, LookupError>, sink: &S) {
    match outcome {
        Ok(label) => {
            info!(%label, "lookup succeeded");
            sink.success(&label);
        }
        Err(error) => {
            info!(%error, "lookup failed");
            sink.failure(&format!("{FAILURE_PREFIX}{error}"));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Continuations chained with `and_then`.
    Chained,
    /// `await` one step after the other.
    Sequential,
}

/// A lookup wired to its host capabilities.
pub struct Lookup<G, T> {
    geolocation: G,
    transport: T,
    endpoint: String,
}

impl<G: Geolocation, T: Transport> Lookup<G, T> {
    pub fn new(geolocation: G, transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            geolocation,
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub async fn locate(&self, style: Style) -> Result<String, LookupError> {
        match style {
            Style::Chained => {
                locate::manual::locate(&self.geolocation, &self.transport, &self.endpoint).await
            }
            Style::Sequential => {
                locate::auto::locate(&self.geolocation, &self.transport, &self.endpoint).await
            }
        }
    }

    pub async fn run<S: Sink + ?Sized>(&self, style: Style, sink: &S) {
        report(self.locate(style).await, sink);
    }
}
