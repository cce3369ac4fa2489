use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::claims::Identity;
use super::claims::TokenProfile;
use super::errors::JwtError;

/// Signs access tokens with HS256 (HMAC with SHA-256).
///
/// The secret and the registered claims are fixed at construction; each
/// call only supplies the identity and the validity window.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    empty_secret: bool,
    profile: TokenProfile,
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Create a new issuer.
    ///
    /// # Arguments
    /// * `secret` - Signing secret
    /// * `profile` - Issuer, subject and audience stamped on every token
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - An empty secret is accepted here but every `issue` call will fail
    pub fn new(secret: &[u8], profile: TokenProfile) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            empty_secret: secret.is_empty(),
            profile,
            algorithm: Algorithm::HS256,
        }
    }

    pub fn profile(&self) -> &TokenProfile {
        &self.profile
    }

    /// Issue a signed token for `identity`.
    ///
    /// # Arguments
    /// * `claim_key` - Label of the identity being issued for (e.g. "user")
    /// * `identity` - Identity fields to embed
    /// * `issued_at` - Issuance instant (`iat`)
    /// * `expires_at` - Expiration instant (`exp`)
    ///
    /// # Returns
    /// Compact JWT string
    ///
    /// # Errors
    /// * `EmptyClaim` - Blank claim key or missing identity
    /// * `SigningFailed` - Empty secret or encoding failure
    pub fn issue(
        &self,
        claim_key: &str,
        identity: Option<&Identity>,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let identity = match identity {
            Some(identity) if !claim_key.trim().is_empty() => identity,
            _ => return Err(JwtError::EmptyClaim),
        };

        if self.empty_secret {
            return Err(JwtError::SigningFailed("signing secret is empty".to_string()));
        }

        let claims = Claims::new(&self.profile, identity.clone(), issued_at, expires_at);

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| JwtError::SigningFailed(e.to_string()))
    }
}
