/// Task list endpoints
///
/// All three operations require a bearer token:
///
/// - `GET /todos` - List all todos
/// - `POST /todos` - Add a todo owned by the caller
/// - `DELETE /todos/:id` - Delete a todo by ID
///
/// Listing and deletion operate on the global todo table, not just the
/// caller's rows; see DESIGN.md for why that behavior is kept.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use taskhub_shared::{
    auth::middleware::AuthContext,
    models::todo::{CreateTodo, Todo},
};
use uuid::Uuid;

/// Add-todo request body
///
/// Both fields are required; a payload missing either answers 400.
#[derive(Debug, Deserialize)]
pub struct AddTodoRequest {
    /// Task label
    pub label: String,

    /// Initial done flag
    pub done: bool,
}

/// Wire shape of a todo
///
/// The owner column stays server-side.
#[derive(Debug, Serialize)]
pub struct TodoResponse {
    /// Todo ID
    pub id: Uuid,

    /// Task label
    pub label: String,

    /// Whether the task is done
    pub done: bool,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            label: todo.label,
            done: todo.done,
        }
    }
}

/// Delete confirmation body
#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {
    /// Confirmation message
    pub success: String,
}

/// List all todos
///
/// # Endpoint
///
/// ```text
/// GET /todos
/// Authorization: Bearer <token>
/// ```
///
/// # Response
///
/// ```json
/// [
///   { "id": "uuid", "label": "Buy milk", "done": false }
/// ]
/// ```
pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Json<Vec<TodoResponse>>> {
    let todos = Todo::list(&state.db).await?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Add a new todo
///
/// The authenticated caller is recorded as the todo's owner.
///
/// # Endpoint
///
/// ```text
/// POST /todos
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// { "label": "Buy milk", "done": false }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: label or done missing from the payload
/// - `401 Unauthorized`: missing or invalid token
pub async fn add_todo(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    payload: Result<Json<AddTodoRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TodoResponse>)> {
    let Json(req) = payload?;

    let todo = Todo::create(
        &state.db,
        auth.user_id,
        CreateTodo {
            label: req.label,
            done: req.done,
        },
    )
    .await?;

    tracing::debug!(todo_id = %todo.id, user_id = %auth.user_id, "Created todo");

    Ok((StatusCode::CREATED, Json(todo.into())))
}

/// Delete a todo by ID
///
/// # Endpoint
///
/// ```text
/// DELETE /todos/{id}
/// Authorization: Bearer <token>
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: missing or invalid token
/// - `404 Not Found`: no todo with that ID
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DeleteTodoResponse>> {
    let deleted = Todo::delete(&state.db, id).await?;

    if !deleted {
        return Err(ApiError::NotFound(
            "The task to delete does not exist".to_string(),
        ));
    }

    tracing::debug!(todo_id = %id, "Deleted todo");

    Ok(Json(DeleteTodoResponse {
        success: "Task deleted successfully".to_string(),
    }))
}
