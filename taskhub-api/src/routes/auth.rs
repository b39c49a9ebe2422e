/// Authentication endpoints
///
/// This module provides user registration and login:
///
/// - `POST /register` - Create a new account (and its empty profile)
/// - `POST /login` - Verify credentials and issue a bearer token
///
/// Both endpoints are public. Login rejections are indistinguishable between
/// "unknown email" and "wrong password" so the response leaks nothing about
/// which accounts exist.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use taskhub_shared::{
    auth::{jwt, password},
    models::user::{CreateUser, User},
};
use uuid::Uuid;
use validator::Validate;

/// Register/login request body
///
/// Both endpoints take the same credential pair.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Plaintext password
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Register response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// Confirmation message
    pub success: String,
}

/// Login response envelope
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Outcome marker, always "success" on 200
    pub status: String,

    /// Session payload
    pub data: LoginData,
}

/// Login session payload
#[derive(Debug, Serialize)]
pub struct LoginData {
    /// Bearer token, valid for 60 minutes
    pub access_token: String,

    /// The authenticated user
    pub user: UserSummary,
}

/// Public view of a user
#[derive(Debug, Serialize)]
pub struct UserSummary {
    /// User ID
    pub id: Uuid,

    /// Email address
    pub email: String,
}

/// Register a new user
///
/// Creates the user account together with its empty profile in a single
/// transaction. The email existence check is a fast path; the unique index
/// on the email column is the authoritative guard under concurrent
/// registration.
///
/// # Endpoint
///
/// ```text
/// POST /register
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "secret"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: missing/malformed field, or email already registered
/// - `500 Internal Server Error`: storage failure
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> ApiResult<Json<RegisterResponse>> {
    let Json(req) = payload?;
    req.validate()?;

    if User::email_taken(&state.db, &req.email).await? {
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let password_hash = password::hash_password(&req.password)?;

    let user = User::create(
        &state.db,
        CreateUser {
            email: req.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, "Registered new user");

    Ok(Json(RegisterResponse {
        success: "User registered successfully".to_string(),
    }))
}

/// Login endpoint
///
/// Verifies the credential pair and issues a 60-minute bearer token.
///
/// # Endpoint
///
/// ```text
/// POST /login
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "secret"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "success",
///   "data": {
///     "access_token": "eyJ...",
///     "user": { "id": "uuid", "email": "user@example.com" }
///   }
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: missing/malformed field
/// - `401 Unauthorized`: unknown email or wrong password (same body for both)
/// - `500 Internal Server Error`: storage failure
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(req) = payload?;
    req.validate()?;

    let user = User::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

    let valid = password::verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let claims = jwt::Claims::new(user.id);
    let access_token = jwt::create_token(&claims, state.jwt_secret())?;

    tracing::debug!(user_id = %user.id, "Issued session token");

    Ok(Json(LoginResponse {
        status: "success".to_string(),
        data: LoginData {
            access_token,
            user: UserSummary {
                id: user.id,
                email: user.email,
            },
        },
    }))
}
