/// Bearer token generation and validation
///
/// This module provides the JWT session tokens used to gate protected routes.
/// Tokens are signed with HS256 (HMAC-SHA256) and carry the user identity.
///
/// # Security
///
/// - **Algorithm**: HS256 (HMAC with SHA-256)
/// - **Expiration**: 60 minutes from issuance
/// - **Validation**: signature, expiration, and issuer checks
/// - **Secret Management**: secrets should be at least 32 bytes (256 bits)
///
/// There is no revocation mechanism: a token stays valid until it expires.
/// This is a deliberate limitation of the session contract.
///
/// # Example
///
/// ```
/// use taskhub_shared::auth::jwt::{create_token, validate_token, Claims};
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let user_id = Uuid::new_v4();
///
/// let claims = Claims::new(user_id);
/// let token = create_token(&claims, "your-secret-key")?;
///
/// let validated = validate_token(&token, "your-secret-key")?;
/// assert_eq!(validated.sub, user_id);
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token lifetime: 60 minutes from issuance
pub const TOKEN_TTL_MINUTES: i64 = 60;

/// Error type for token operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Token failed signature or structural validation
    #[error("Invalid token: {0}")]
    Invalid(String),

    /// Token has expired
    #[error("Token has expired")]
    Expired,

    /// Invalid issuer
    #[error("Invalid issuer")]
    InvalidIssuer,
}

/// JWT claims structure
///
/// # Standard Claims
///
/// - `sub`: Subject (user ID)
/// - `iss`: Issuer (always "taskhub")
/// - `iat`: Issued at timestamp
/// - `exp`: Expiration timestamp
/// - `nbf`: Not before timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - User ID
    pub sub: Uuid,

    /// Issuer - Always "taskhub"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,
}

impl Claims {
    /// Creates new claims expiring [`TOKEN_TTL_MINUTES`] from now
    ///
    /// # Example
    ///
    /// ```
    /// use taskhub_shared::auth::jwt::Claims;
    /// use uuid::Uuid;
    ///
    /// let claims = Claims::new(Uuid::new_v4());
    /// assert!(!claims.is_expired());
    /// ```
    pub fn new(user_id: Uuid) -> Self {
        Self::with_expiration(user_id, Duration::minutes(TOKEN_TTL_MINUTES))
    }

    /// Creates claims with a custom expiration
    ///
    /// Mostly useful in tests, where a negative duration produces an
    /// already-expired token.
    ///
    /// # Example
    ///
    /// ```
    /// use taskhub_shared::auth::jwt::Claims;
    /// use chrono::Duration;
    /// use uuid::Uuid;
    ///
    /// let claims = Claims::with_expiration(Uuid::new_v4(), Duration::minutes(5));
    /// ```
    pub fn with_expiration(user_id: Uuid, expires_in: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + expires_in;

        Self {
            sub: user_id,
            iss: "taskhub".to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            nbf: now.timestamp(),
        }
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets time until expiration, None if already expired
    pub fn time_until_expiration(&self) -> Option<Duration> {
        let now = Utc::now().timestamp();
        if self.exp > now {
            Some(Duration::seconds(self.exp - now))
        } else {
            None
        }
    }
}

/// Creates a signed token from claims
///
/// # Arguments
///
/// * `claims` - Token claims
/// * `secret` - Secret key for signing (should be at least 32 bytes)
///
/// # Errors
///
/// Returns `JwtError::CreateError` if token encoding fails
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Validates a token and extracts its claims
///
/// Verifies:
/// - Signature is valid
/// - Token hasn't expired
/// - Issuer is "taskhub"
/// - Token is not used before its nbf time
///
/// # Errors
///
/// - `JwtError::Expired` if the token's expiry has passed
/// - `JwtError::InvalidIssuer` if the issuer doesn't match
/// - `JwtError::Invalid` for any other signature/format failure
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&["taskhub"]);
    validation.validate_exp = true;
    validation.validate_nbf = true;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidIssuer => JwtError::InvalidIssuer,
        _ => JwtError::Invalid(format!("Token validation failed: {}", e)),
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-at-least-32-bytes-long";

    #[test]
    fn test_claims_creation() {
        let user_id = Uuid::new_v4();

        let claims = Claims::new(user_id);

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.iss, "taskhub");
        assert!(!claims.is_expired());

        // Default TTL is one hour
        let time_left = claims.time_until_expiration().unwrap();
        assert!(time_left.num_seconds() > 3500);
        assert!(time_left.num_seconds() <= 3600);
    }

    #[test]
    fn test_create_and_validate_token() {
        let user_id = Uuid::new_v4();

        let claims = Claims::new(user_id);
        let token = create_token(&claims, SECRET).expect("Should create token");

        let validated = validate_token(&token, SECRET).expect("Should validate token");
        assert_eq!(validated.sub, user_id);
        assert_eq!(validated.iss, "taskhub");
    }

    #[test]
    fn test_validate_with_wrong_secret() {
        let claims = Claims::new(Uuid::new_v4());
        let token = create_token(&claims, "secret1").expect("Should create token");

        let result = validate_token(&token, "wrong-secret");
        assert!(matches!(result, Err(JwtError::Invalid(_))));
    }

    #[test]
    fn test_validate_expired_token() {
        let user_id = Uuid::new_v4();

        // Negative duration = expired an hour ago
        let claims = Claims::with_expiration(user_id, Duration::seconds(-3600));

        assert!(claims.is_expired());
        assert!(claims.time_until_expiration().is_none());

        let token = create_token(&claims, SECRET).expect("Should create token");
        let result = validate_token(&token, SECRET);

        assert!(matches!(result, Err(JwtError::Expired)));
    }

    #[test]
    fn test_validate_garbage_token() {
        let result = validate_token("not-a-token", SECRET);
        assert!(matches!(result, Err(JwtError::Invalid(_))));

        let result = validate_token("aaaa.bbbb.cccc", SECRET);
        assert!(matches!(result, Err(JwtError::Invalid(_))));
    }

    #[test]
    fn test_validate_tampered_token() {
        let claims = Claims::new(Uuid::new_v4());
        let token = create_token(&claims, SECRET).expect("Should create token");

        // Flip a character in the payload segment
        let mut chars: Vec<char> = token.chars().collect();
        let mid = token.len() / 2;
        chars[mid] = if chars[mid] == 'a' { 'b' } else { 'a' };
        let tampered: String = chars.into_iter().collect();

        assert!(validate_token(&tampered, SECRET).is_err());
    }
}
