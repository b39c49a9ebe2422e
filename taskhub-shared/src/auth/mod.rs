/// Authentication utilities
///
/// This module provides the credential primitives for TaskHub:
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: Bearer token generation and validation
/// - [`middleware`]: Bearer extraction and the per-request auth context
///
/// # Security Features
///
/// - **Password Hashing**: Argon2id with 64 MB memory, 3 iterations
/// - **Tokens**: HS256 signing with a 60-minute expiry
/// - **Constant-time Comparison**: verification uses constant-time operations
///
/// # Example
///
/// ```no_run
/// use taskhub_shared::auth::password::{hash_password, verify_password};
/// use taskhub_shared::auth::jwt::{create_token, validate_token, Claims};
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
///
/// let claims = Claims::new(Uuid::new_v4());
/// let token = create_token(&claims, "secret-key-at-least-32-bytes-long!")?;
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod middleware;
pub mod password;
