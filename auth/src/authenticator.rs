use chrono::DateTime;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::Identity;
use crate::jwt::JwtError;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenProfile;
use crate::jwt::TokenVerifier;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication toolkit combining password hashing with token issuance
/// and verification.
///
/// One instance is built at startup from the signing secret and shared
/// between the services and the HTTP middleware.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_verifier: TokenVerifier,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `profile` - Registered claims stamped on and expected in every token
    pub fn new(jwt_secret: &[u8], profile: TokenProfile) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(jwt_secret, profile.clone()),
            token_verifier: TokenVerifier::new(jwt_secret, profile),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Issue a signed token. See [`TokenIssuer::issue`].
    pub fn issue_token(
        &self,
        claim_key: &str,
        identity: Option<&Identity>,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        self.token_issuer
            .issue(claim_key, identity, issued_at, expires_at)
    }

    /// Validate and decode a bearer token.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.token_verifier.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn authenticator() -> Authenticator {
        Authenticator::new(
            b"test_secret_key_at_least_32_bytes!",
            TokenProfile::new("test-issuer", "test-subject", "test-audience"),
        )
    }

    #[test]
    fn test_password_round_trip() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("correctpw")
            .expect("Failed to hash password");

        assert!(authenticator.verify_password("correctpw", &hash));
        assert!(!authenticator.verify_password("wrongpw", &hash));
    }

    #[test]
    fn test_issue_and_validate_token() {
        let authenticator = authenticator();
        let identity = Identity {
            id: "user123".to_string(),
            name: "Alice".to_string(),
            email: "a@b.com".to_string(),
        };
        let now = Utc::now();

        let token = authenticator
            .issue_token("user", Some(&identity), now, now + Duration::minutes(60))
            .expect("Failed to issue token");

        let claims = authenticator
            .validate_token(&token)
            .expect("Token validation failed");
        assert_eq!(claims.identity, identity);
        assert_eq!(claims.iss, "test-issuer");
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = authenticator();

        let result = authenticator.validate_token("invalid.token.here");
        assert!(result.is_err());
    }
}
