pub mod bcrypt;
pub mod errors;

pub use self::bcrypt::PasswordHasher;
pub use self::bcrypt::PASSWORD_COST;
pub use errors::PasswordError;
