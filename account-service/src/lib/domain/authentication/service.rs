use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Identity;
use chrono::Utc;
use tokio::sync::OnceCell;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::AuthToken;
use crate::domain::authentication::models::IDENTITY_CLAIM_KEY;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::authentication::ports::CredentialRepository;

/// Plaintext behind the decoy hash checked when no account matches.
const DECOY_PASSWORD: &str = "decoy-password-never-issued";

/// Authentication use case: credential lookup, password check, token issuance.
///
/// Stateless between calls; every failure aborts before a token is signed.
pub struct AuthService<CR>
where
    CR: CredentialRepository,
{
    repository: Arc<CR>,
    authenticator: Arc<Authenticator>,
    token_lifetime: Option<String>,
    decoy_hash: OnceCell<Option<String>>,
}

impl<CR> AuthService<CR>
where
    CR: CredentialRepository,
{
    /// Create a new authentication service.
    ///
    /// # Arguments
    /// * `repository` - Credential lookup implementation
    /// * `authenticator` - Password hasher and token issuer
    /// * `token_lifetime` - Configured lifetime string (e.g. "60m"); `None` means the default
    pub fn new(
        repository: Arc<CR>,
        authenticator: Arc<Authenticator>,
        token_lifetime: Option<String>,
    ) -> Self {
        Self {
            repository,
            authenticator,
            token_lifetime,
            decoy_hash: OnceCell::new(),
        }
    }

    /// Spend one bcrypt verification so an unknown identifier costs the
    /// same as a wrong password.
    async fn verify_against_decoy(&self, password: &str) {
        let decoy_hash = self
            .decoy_hash
            .get_or_init(|| async { self.authenticator.hash_password(DECOY_PASSWORD).ok() })
            .await;

        if let Some(decoy_hash) = decoy_hash {
            let _ = self.authenticator.verify_password(password, decoy_hash);
        }
    }
}

#[async_trait]
impl<CR> AuthServicePort for AuthService<CR>
where
    CR: CredentialRepository,
{
    async fn authenticate(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<AuthToken, AuthError> {
        let record = match self.repository.find_by_identifier(identifier).await {
            Ok(record) => record,
            Err(err @ AuthError::NotFound(_)) => {
                self.verify_against_decoy(password).await;
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        if !self
            .authenticator
            .verify_password(password, &record.password_hash)
        {
            tracing::debug!(user_id = %record.user_id, "Password mismatch");
            return Err(AuthError::AuthenticationFailed);
        }

        let identity = Identity::from(&record);

        let lifetime = auth::token_lifetime(self.token_lifetime.as_deref())?;
        let issued_at = Utc::now();
        let expires_at = issued_at + lifetime;

        let token = self.authenticator.issue_token(
            IDENTITY_CLAIM_KEY,
            Some(&identity),
            issued_at,
            expires_at,
        )?;

        tracing::info!(
            user_id = %record.user_id,
            expires_at = %expires_at,
            "Access token issued"
        );

        Ok(AuthToken { token })
    }
}
