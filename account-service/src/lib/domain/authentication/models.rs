use crate::domain::user::models::UserId;

/// Issuer stamped on every access token.
pub const TOKEN_ISSUER: &str = "account-service";

/// Subject stamped on every access token.
pub const TOKEN_SUBJECT: &str = "user-authentication";

/// Audience stamped on every access token.
pub const TOKEN_AUDIENCE: &str = "account-api";

/// Claim key under which user identities are issued.
pub const IDENTITY_CLAIM_KEY: &str = "user";

/// Registered claims shared by token issuance and verification.
pub fn token_profile() -> auth::TokenProfile {
    auth::TokenProfile::new(TOKEN_ISSUER, TOKEN_SUBJECT, TOKEN_AUDIENCE)
}

/// Stored credentials of one account, looked up by login identifier (email).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl From<&CredentialRecord> for auth::Identity {
    fn from(record: &CredentialRecord) -> Self {
        Self {
            id: record.user_id.to_string(),
            name: record.name.clone(),
            email: record.email.clone(),
        }
    }
}

/// Result of a successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    /// Signed bearer token
    pub token: String,
}
