//! HTTP adapter error types.

use scenepanel_domain::error::PanelError;

/// Errors specific to the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The request could not be sent or the body could not be decoded.
    #[error("request to backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error message from the body, or `HTTP <code>`.
        message: String,
    },
}

impl HttpError {
    /// Convert into a [`PanelError::Backend`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> PanelError {
        PanelError::Backend(Box::new(self))
    }
}

impl From<HttpError> for PanelError {
    fn from(err: HttpError) -> Self {
        err.into_domain()
    }
}
