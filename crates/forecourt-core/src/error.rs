use thiserror::Error;

/// Errors surfaced by the domain layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying HTTP/API failure.
    #[error(transparent)]
    Api(#[from] forecourt_api::Error),

    /// A record failed pre-submit validation.
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// An attachment was rejected before upload.
    #[error("attachment rejected: {0}")]
    Attachment(String),

    /// Session persistence failed (keyring, profile file).
    #[error("session storage: {0}")]
    Session(String),

    /// An operation required an authenticated session.
    #[error("not authenticated")]
    NotAuthenticated,
}

impl Error {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True when the failure is transient (network/timeouts) rather
    /// than a definitive server answer.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Api(api) if api.is_network() || api.is_timeout())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
