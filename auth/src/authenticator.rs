use crate::claims::SessionClaims;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenError;
use crate::token::TokenSigner;

/// Authentication coordinator combining password verification and token
/// signing.
///
/// Holds the process-wide signing secret; constructed once at startup and
/// injected into the HTTP layer.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_signer: TokenSigner,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    /// Wrong password. Callers must report this with the same generic
    /// message as an unknown username, to avoid account enumeration.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator with the given token-signing secret.
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_signer: TokenSigner::new(jwt_secret),
        }
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash and, on success, mint a
    /// signed session token carrying the given claims.
    ///
    /// # Errors
    /// * `InvalidCredentials` - password does not match the stored hash
    /// * `Password` - stored hash was malformed
    /// * `Token` - token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &SessionClaims,
    ) -> Result<String, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_signer.encode(claims)?)
    }

    /// Validate a session token and recover its claims.
    ///
    /// Purely cryptographic: checks signature and expiry only, never the
    /// user's current token-version counter.
    ///
    /// # Errors
    /// * `TokenError` - signature mismatch, malformed token, or expired
    pub fn validate_token(&self, token: &str) -> Result<SessionClaims, TokenError> {
        self.token_signer.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let password = "secretpw1";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let claims = SessionClaims::for_user("user123", "Alice", "Liddell", 8760);
        let token = authenticator
            .authenticate(password, &hash, &claims)
            .expect("Authentication failed");
        assert!(!token.is_empty());

        let decoded = authenticator
            .validate_token(&token)
            .expect("Token validation failed");
        assert_eq!(decoded.sub, "user123");
        assert_eq!(decoded.first_name, "Alice");
        assert_eq!(decoded.last_name, "Liddell");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let hash = authenticator
            .hash_password("secretpw1")
            .expect("Failed to hash password");

        let claims = SessionClaims::for_user("user123", "Alice", "Liddell", 8760);
        let result = authenticator.authenticate("wrong_password", &hash, &claims);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let result = authenticator.validate_token("invalid.token.here");
        assert!(result.is_err());
    }
}
