//! Authentication utilities library
//!
//! Provides the authentication building blocks used by the account service:
//! - Password hashing (bcrypt, fixed cost)
//! - JWT issuance and validation (HS256)
//! - Token lifetime parsing
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Issuing and validating tokens
//! ```
//! use auth::{Authenticator, Identity, TokenProfile};
//! use chrono::Utc;
//!
//! let profile = TokenProfile::new("issuer", "subject", "audience");
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", profile);
//!
//! let identity = Identity {
//!     id: "user123".to_string(),
//!     name: "Alice".to_string(),
//!     email: "alice@example.com".to_string(),
//! };
//! let now = Utc::now();
//! let lifetime = auth::token_lifetime(Some("60m")).unwrap();
//! let token = auth.issue_token("user", Some(&identity), now, now + lifetime).unwrap();
//!
//! let claims = auth.validate_token(&token).unwrap();
//! assert_eq!(claims.identity.email, "alice@example.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod lifetime;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::Identity;
pub use jwt::JwtError;
pub use jwt::TokenIssuer;
pub use jwt::TokenProfile;
pub use jwt::TokenVerifier;
pub use lifetime::token_lifetime;
pub use lifetime::DurationError;
pub use password::PasswordError;
pub use password::PasswordHasher;
