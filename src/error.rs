//! Error types for the simulation
//!
//! Two tiers: unrecoverable configuration mismatches (the spin state vector
//! no longer matches the tracked-body set) which abort the run when
//! propagated to `main`, and recoverable parameter errors the caller is
//! expected to check

use thiserror::Error;

/// Result alias used throughout the crate
pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// The spin state vector no longer matches the set of spin-tracked
    /// bodies. The tracked set is fixed when the ODE is registered; any
    /// later change is unrecoverable
    #[error("spin state vector has length {found}, expected {expected} (spin-tracked body set changed after registration)")]
    SpinStateMismatch { expected: usize, found: usize },

    /// Sigma derivation requires the Love number and a nonzero radius
    #[error("cannot derive sigma: Love number and/or physical radius not set for this body")]
    MissingTidalParams,

    /// Malformed scenario configuration
    #[error("configuration error: {0}")]
    Config(String),
}
