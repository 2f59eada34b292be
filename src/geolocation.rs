//! The coordinate provider: a one-shot host geolocation query wrapped in a
//! [`Promise`].

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::{basics::Promise, error::LookupError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// What the host hands to the success callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub coords: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionErrorCode {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
}

/// What the host hands to the failure callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionError {
    pub code: PositionErrorCode,
    pub message: String,
}

pub type OnPosition = Box<dyn FnOnce(Position) + Send>;
pub type OnPositionError = Box<dyn FnOnce(PositionError) + Send>;

/// A host capability able to locate the device.
///
/// Implementations must eventually call exactly one of the two callbacks,
/// possibly from another thread. Nothing enforces a deadline: a host which
/// never answers leaves the caller waiting forever.
pub trait Geolocation {
    fn get_current_position(&self, on_success: OnPosition, on_error: OnPositionError);
}

/// Ask the host for the current coordinates.
pub fn get_coords<G: Geolocation + ?Sized>(geolocation: &G) -> Promise<Coordinates, LookupError> {
    Promise::new(|resolver| {
        // only one of the callbacks will ever run, but both need to own the
        // resolver. route it through a shared slot.
        let slot = Arc::new(Mutex::new(Some(resolver)));
        let on_error_slot = Arc::clone(&slot);

        geolocation.get_current_position(
            Box::new(move |position| {
                if let Some(resolver) = take(&slot) {
                    debug!(
                        latitude = position.coords.latitude,
                        longitude = position.coords.longitude,
                        "coordinates obtained"
                    );
                    resolver.resolve(position.coords);
                }
            }),
            Box::new(move |error| {
                if let Some(resolver) = take(&on_error_slot) {
                    debug!(code = ?error.code, message = %error.message, "geolocation failed");
                    resolver.reject(LookupError::Geolocation(error.message));
                }
            }),
        );
    })
}

fn take<T>(slot: &Mutex<Option<T>>) -> Option<T> {
    slot.lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
}

/// A host without a location sensor: answers with a position fixed up front,
/// or fails as unavailable if there is none.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticGeolocation {
    position: Option<Coordinates>,
}

impl StaticGeolocation {
    pub fn new(position: Option<Coordinates>) -> Self {
        Self { position }
    }
}

impl Geolocation for StaticGeolocation {
    fn get_current_position(&self, on_success: OnPosition, on_error: OnPositionError) {
        match self.position {
            Some(coords) => on_success(Position { coords }),
            None => on_error(PositionError {
                code: PositionErrorCode::PositionUnavailable,
                message: "Position unavailable: GEO_LATITUDE and GEO_LONGITUDE are not set"
                    .to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use futures_lite::future::block_on;

    use super::*;

    const PARIS: Coordinates = Coordinates {
        latitude: 48.8566,
        longitude: 2.3522,
    };

    struct Denied;

    impl Geolocation for Denied {
        fn get_current_position(&self, _: OnPosition, on_error: OnPositionError) {
            on_error(PositionError {
                code: PositionErrorCode::PermissionDenied,
                message: "User denied Geolocation".to_string(),
            });
        }
    }

    struct FromThread(Coordinates);

    impl Geolocation for FromThread {
        fn get_current_position(&self, on_success: OnPosition, _: OnPositionError) {
            let coords = self.0;
            thread::spawn(move || on_success(Position { coords }));
        }
    }

    #[test]
    fn resolves_with_host_coordinates() {
        let geolocation = StaticGeolocation::new(Some(PARIS));
        assert_eq!(block_on(get_coords(&geolocation)), Ok(PARIS));
    }

    #[test]
    fn rejects_with_host_message() {
        assert_eq!(
            block_on(get_coords(&Denied)),
            Err(LookupError::Geolocation("User denied Geolocation".to_string()))
        );
    }

    #[test]
    fn resolves_from_host_thread() {
        assert_eq!(block_on(get_coords(&FromThread(PARIS))), Ok(PARIS));
    }

    #[test]
    fn unconfigured_position_is_unavailable() {
        let outcome = block_on(get_coords(&StaticGeolocation::default()));
        assert!(matches!(outcome, Err(LookupError::Geolocation(message)) if message.starts_with("Position unavailable")));
    }
}
