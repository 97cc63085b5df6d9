//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HouseError`]
//! via `#[from]` or an explicit `From` impl (no `String` variants).

use crate::device::DeviceKind;

/// Top-level error shared by every casahub crate.
#[derive(Debug, thiserror::Error)]
pub enum HouseError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced device does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The device does not support the requested operation.
    #[error("unsupported operation")]
    Unsupported(#[from] UnsupportedError),

    /// Writing program output failed.
    #[error("output error")]
    Output(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations detected while constructing domain objects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Device identifiers must contain at least one non-whitespace character.
    #[error("device id must not be empty")]
    EmptyId,

    /// Light intensity is a percentage.
    #[error("intensity {0}% is outside 0..=100")]
    IntensityOutOfRange(u8),
}

/// A lookup that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// An operation called on a device variant that does not provide it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} {id} does not support {operation}")]
pub struct UnsupportedError {
    pub id: String,
    pub kind: DeviceKind,
    pub operation: &'static str,
}
