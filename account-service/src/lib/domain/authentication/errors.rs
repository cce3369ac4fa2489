use thiserror::Error;

/// Errors of the authentication flow.
///
/// `NotFound` and `AuthenticationFailed` are kept apart for callers and logs;
/// the HTTP layer renders both with the same generic message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("No credentials found for identifier: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("Empty claim")]
    EmptyClaim,

    #[error("Token signing failed: {0}")]
    Signing(String),

    #[error("Invalid token lifetime: {0}")]
    DurationParse(#[from] auth::DurationError),
}

impl From<auth::JwtError> for AuthError {
    fn from(err: auth::JwtError) -> Self {
        match err {
            auth::JwtError::EmptyClaim => AuthError::EmptyClaim,
            auth::JwtError::SigningFailed(msg) => AuthError::Signing(msg),
            other => AuthError::Signing(other.to_string()),
        }
    }
}
