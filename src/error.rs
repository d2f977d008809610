//! Error types for site derivation.
//!
//! Catalog loading uses `anyhow` with context at the call sites; the typed
//! error here covers rejected upstream readings, which callers may want to
//! report back to the requester verbatim.

use thiserror::Error;

/// A raw site reading that cannot be classified.
#[derive(Debug, Error)]
pub enum SiteDataError {
    /// A reading arrived as NaN or infinity, usually a failed upstream fetch
    #[error("site reading '{field}' is not a finite number")]
    NonFinite { field: &'static str },

    /// Sand, silt, and clay contents must describe an actual soil sample
    #[error("soil sample has no positive sand/silt/clay content")]
    EmptySoilSample,
}
