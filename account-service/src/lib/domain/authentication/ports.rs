use async_trait::async_trait;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::AuthToken;
use crate::domain::authentication::models::CredentialRecord;

/// Port for the authentication use case.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `identifier` - Login identifier (email)
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Signed, time-limited bearer token
    ///
    /// # Errors
    /// * `NotFound` - No account for this identifier
    /// * `Repository` - Credential lookup failed
    /// * `AuthenticationFailed` - Password does not match
    /// * `DurationParse` - Configured token lifetime is malformed
    /// * `EmptyClaim` / `Signing` - Token issuance failed
    async fn authenticate(&self, identifier: &str, password: &str)
        -> Result<AuthToken, AuthError>;
}

/// Credential lookup used by the authentication use case.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Fetch the credential record for a login identifier.
    ///
    /// # Errors
    /// * `NotFound` - No row matches the identifier
    /// * `Repository` - Database operation failed
    async fn find_by_identifier(&self, identifier: &str) -> Result<CredentialRecord, AuthError>;
}
