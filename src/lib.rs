//! Look up the address of the device's current position, written twice: once
//! as chained continuations and once as sequential `async`/`await`.
//!
//! Both the geolocation sensor and the HTTP transport are callback driven host
//! capabilities ([`geolocation::Geolocation`], [`transport::Transport`]).
//! [`basics::Promise`] turns each callback into a future, and
//! [`orchestrator::Lookup`] sequences the two and reports the outcome.

pub mod basics;
pub mod config;
pub mod error;
pub mod geolocation;
pub mod logging;
pub mod orchestrator;
pub mod sink;
pub mod transport;
pub mod two_ways;

pub use error::LookupError;
pub use orchestrator::{Lookup, Style};
