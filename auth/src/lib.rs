//! Authentication library for the account service.
//!
//! Provides the two cryptographic building blocks of the credential
//! lifecycle, plus a coordinator that composes them:
//! - Password hashing and verification (Argon2id)
//! - Session token signing and validation (HS256 JWT)
//!
//! The service crate owns the user model and persistence; this crate is
//! deliberately storage-agnostic. Token validation in particular never
//! consults the database: a token is valid iff its signature checks out and
//! its expiry is in the future. Revoking a token before its expiry is
//! therefore not possible.
//!
//! # Examples
//!
//! ```
//! use auth::{Authenticator, SessionClaims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Registration: hash the password for storage.
//! let hash = auth.hash_password("secretpw1").unwrap();
//!
//! // Login: verify the password and mint a session token.
//! let claims = SessionClaims::for_user("user-id", "A", "L", 8760);
//! let token = auth.authenticate("secretpw1", &hash, &claims).unwrap();
//!
//! // Protected request: validate the token and recover the claims.
//! let decoded = auth.validate_token(&token).unwrap();
//! assert_eq!(decoded.sub, "user-id");
//! ```

pub mod authenticator;
pub mod claims;
pub mod password;
pub mod token;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use claims::SessionClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenError;
pub use token::TokenSigner;
