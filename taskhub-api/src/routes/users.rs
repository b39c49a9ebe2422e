/// User lookup endpoints
///
/// - `GET /info/:user_id` - Public lookup of a user's id and email
/// - `GET /profile` - Aggregate view of the authenticated user: profile,
///   todos, and enrolled courses
///
/// The profile endpoint derives its identity from the bearer token subject;
/// there is no way to read another user's profile.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;
use taskhub_shared::{
    auth::middleware::AuthContext,
    models::{course::Course, profile::Profile, todo::Todo, user::User},
};
use uuid::Uuid;

use super::todos::TodoResponse;

/// Public user info response
#[derive(Debug, Serialize)]
pub struct UserInfoResponse {
    /// User ID
    pub id: Uuid,

    /// Email address
    pub email: String,
}

/// Profile section of the aggregate response
#[derive(Debug, Serialize)]
pub struct ProfileSection {
    /// Free-text bio
    pub bio: String,

    /// GitHub handle
    pub github: String,
}

/// Course entry in the aggregate response
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    /// Course ID
    pub id: Uuid,

    /// Course name
    pub name: String,
}

/// Profile aggregate response
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// User ID
    pub id: Uuid,

    /// Email address
    pub email: String,

    /// Profile fields
    pub profile: ProfileSection,

    /// The user's todos
    pub todos: Vec<TodoResponse>,

    /// Courses the user is enrolled in
    pub courses: Vec<CourseResponse>,
}

/// Public user lookup
///
/// # Endpoint
///
/// ```text
/// GET /info/{user_id}
/// ```
///
/// # Errors
///
/// - `404 Not Found`: no user with that ID
pub async fn user_info(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<UserInfoResponse>> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(UserInfoResponse {
        id: user.id,
        email: user.email,
    }))
}

/// Profile aggregate of the authenticated user
///
/// # Endpoint
///
/// ```text
/// GET /profile
/// Authorization: Bearer <token>
/// ```
///
/// # Response
///
/// ```json
/// {
///   "id": "uuid",
///   "email": "user@example.com",
///   "profile": { "bio": "", "github": "" },
///   "todos": [],
///   "courses": []
/// }
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: missing/invalid token, or the token subject no
///   longer exists
pub async fn profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<ProfileResponse>> {
    // A valid token whose subject has since been deleted gates like any
    // other bad credential.
    let user = User::find_by_id(&state.db, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Unknown token subject".to_string()))?;

    let profile = Profile::find_by_user(&state.db, user.id)
        .await?
        .ok_or_else(|| ApiError::InternalError(format!("User {} has no profile", user.id)))?;

    let todos = Todo::list_by_user(&state.db, user.id).await?;
    let courses = Course::list_by_user(&state.db, user.id).await?;

    Ok(Json(ProfileResponse {
        id: user.id,
        email: user.email,
        profile: ProfileSection {
            bio: profile.bio,
            github: profile.github,
        },
        todos: todos.into_iter().map(TodoResponse::from).collect(),
        courses: courses
            .into_iter()
            .map(|c| CourseResponse {
                id: c.id,
                name: c.name,
            })
            .collect(),
    }))
}
