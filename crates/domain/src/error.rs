//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`PanelError`]
//! via `#[from]` or an explicit `into_domain` at the port boundary.

use crate::id::SceneId;

/// Top-level error for scenepanel operations.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// A domain invariant was violated.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The backend could not be reached or answered with an error.
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A zone type string outside `unknown`, `light`, `switch`, `shade`.
    #[error("unknown zone type {0:?}")]
    UnknownZoneType(String),

    /// Two scenes in the same collection share an id.
    #[error("duplicate scene id {0}")]
    DuplicateSceneId(SceneId),
}
