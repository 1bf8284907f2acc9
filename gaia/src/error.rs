//! Error types used by the crate.

use gaia_types::error::PolylineError;
use thiserror::Error;

/// Gaia error type.
#[derive(Debug, Error)]
pub enum GaiaError {
    /// Error decoding or encoding a path.
    #[error("failed to convert encoded path")]
    Decoding(#[from] PolylineError),
    /// Scheduler configuration was rejected - details are inside.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
