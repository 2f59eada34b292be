use thiserror::Error;

/// Why a lookup failed. The `Display` output is the message reported to the
/// user, nothing more structured than that is promised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The host geolocation capability failed; carries its message unchanged.
    #[error("{0}")]
    Geolocation(String),

    /// Any failed fetch: bad status, unreachable host or a malformed body.
    #[error("La page n'existe pas")]
    NotFound,

    #[error("no features[0].properties.label in response")]
    MissingLabel,
}
