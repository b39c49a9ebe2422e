/// Bearer authentication support for Axum
///
/// This module provides the pieces the API's auth layer is built from:
/// extraction of the bearer token from the Authorization header, the error
/// type for failed extraction/validation, and the [`AuthContext`] that is
/// inserted into request extensions after a token validates.
///
/// # Example
///
/// ```no_run
/// use axum::Extension;
/// use taskhub_shared::auth::middleware::AuthContext;
///
/// async fn protected_handler(Extension(auth): Extension<AuthContext>) -> String {
///     format!("Hello, user {}!", auth.user_id)
/// }
/// ```

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authentication context added to request extensions
///
/// Present on every request that passed the bearer layer. Handlers extract it
/// with Axum's `Extension` extractor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AuthContext {
    /// Authenticated user ID (the token subject)
    pub user_id: Uuid,
}

impl AuthContext {
    /// Creates an auth context for a validated token subject
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

/// Error type for bearer extraction and validation
#[derive(Debug)]
pub enum AuthError {
    /// Missing authorization header
    MissingCredentials,

    /// Authorization header is not a Bearer token
    InvalidFormat(String),

    /// Token validation failed
    InvalidToken(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        // Every failure mode gates the request the same way: 401.
        let msg = match self {
            AuthError::MissingCredentials => "Missing credentials".to_string(),
            AuthError::InvalidFormat(msg) => msg,
            AuthError::InvalidToken(msg) => msg,
        };
        (StatusCode::UNAUTHORIZED, msg).into_response()
    }
}

/// Extracts the bearer token from the Authorization header
///
/// # Errors
///
/// - `AuthError::MissingCredentials` if the header is absent
/// - `AuthError::InvalidFormat` if the header is not `Bearer <token>`
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidFormat("Expected Bearer token".to_string()))
}
