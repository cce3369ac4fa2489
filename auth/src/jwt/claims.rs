use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity fields carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    /// Unique user identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

/// Fixed registered claims stamped on every token a service issues.
///
/// The verifier checks incoming tokens against the same profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenProfile {
    pub issuer: String,
    pub subject: String,
    pub audience: String,
}

impl TokenProfile {
    pub fn new(
        issuer: impl Into<String>,
        subject: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            issuer: issuer.into(),
            subject: subject.into(),
            audience: audience.into(),
        }
    }
}

/// JWT claims: RFC 7519 registered claims merged with the identity fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Issuer
    pub iss: String,

    /// Subject
    pub sub: String,

    /// Audience
    pub aud: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Identity fields, flattened into the token payload
    #[serde(flatten)]
    pub identity: Identity,
}

impl Claims {
    /// Build the claims for a token valid from `issued_at` until `expires_at`.
    pub fn new(
        profile: &TokenProfile,
        identity: Identity,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            iss: profile.issuer.clone(),
            sub: profile.subject.clone(),
            aud: profile.audience.clone(),
            exp: expires_at.timestamp(),
            iat: issued_at.timestamp(),
            identity,
        }
    }

    /// Window between issuance and expiration.
    pub fn lifetime(&self) -> Duration {
        Duration::seconds(self.exp - self.iat)
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            id: "7f1c2b4e-3a51-4c8e-9d0a-2f6b8e4d1c33".to_string(),
            name: "Alice".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    #[test]
    fn test_new_claims() {
        let profile = TokenProfile::new("issuer", "subject", "audience");
        let issued_at = Utc::now();
        let expires_at = issued_at + Duration::minutes(60);

        let claims = Claims::new(&profile, identity(), issued_at, expires_at);

        assert_eq!(claims.iss, "issuer");
        assert_eq!(claims.sub, "subject");
        assert_eq!(claims.aud, "audience");
        assert_eq!(claims.iat, issued_at.timestamp());
        assert_eq!(claims.exp, expires_at.timestamp());
        assert_eq!(claims.lifetime(), Duration::minutes(60));
    }

    #[test]
    fn test_identity_is_flattened() {
        let profile = TokenProfile::new("issuer", "subject", "audience");
        let issued_at = Utc::now();
        let claims = Claims::new(&profile, identity(), issued_at, issued_at);

        let value = serde_json::to_value(&claims).unwrap();

        assert_eq!(value["id"], "7f1c2b4e-3a51-4c8e-9d0a-2f6b8e4d1c33");
        assert_eq!(value["name"], "Alice");
        assert_eq!(value["email"], "a@b.com");
        assert!(value.get("identity").is_none());
    }

    #[test]
    fn test_is_expired() {
        let profile = TokenProfile::new("issuer", "subject", "audience");
        let mut claims = Claims::new(&profile, identity(), Utc::now(), Utc::now());
        claims.exp = 1000;

        assert!(!claims.is_expired(999)); // Not expired
        assert!(!claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001)); // Expired
    }
}
