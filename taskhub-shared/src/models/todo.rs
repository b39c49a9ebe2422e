/// Todo model and database operations
///
/// Todos are the task-list entries of the system. Every todo is owned by a
/// user; deleting the user deletes its todos. Listing and deletion are NOT
/// scoped to the owner — any authenticated caller sees the global list. See
/// DESIGN.md for the rationale behind keeping that behavior.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE todos (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     label VARCHAR(200) NOT NULL,
///     done BOOLEAN NOT NULL DEFAULT FALSE,
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskhub_shared::models::todo::{CreateTodo, Todo};
/// use taskhub_shared::db::pool::{create_pool, DatabaseConfig};
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let todo = Todo::create(&pool, Uuid::new_v4(), CreateTodo {
///     label: "Buy milk".to_string(),
///     done: false,
/// }).await?;
///
/// let all = Todo::list(&pool).await?;
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Todo model representing a task-list entry
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    /// Unique todo ID
    pub id: Uuid,

    /// Task label
    pub label: String,

    /// Whether the task is done
    pub done: bool,

    /// User who created the todo
    pub user_id: Uuid,
}

/// Input for creating a new todo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    /// Task label
    pub label: String,

    /// Initial done flag
    pub done: bool,
}

impl Todo {
    /// Creates a new todo owned by the given user
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The owning user doesn't exist (foreign key violation)
    /// - Database connection fails
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        data: CreateTodo,
    ) -> Result<Self, sqlx::Error> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (label, done, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, label, done, user_id
            "#,
        )
        .bind(data.label)
        .bind(data.done)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(todo)
    }

    /// Lists all todos, regardless of owner
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, label, done, user_id
            FROM todos
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(todos)
    }

    /// Lists the todos owned by a user
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, label, done, user_id
            FROM todos
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(todos)
    }

    /// Finds a todo by ID
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, label, done, user_id
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(todo)
    }

    /// Deletes a todo by ID
    ///
    /// # Returns
    ///
    /// True if the todo was deleted, false if it didn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_todo_struct() {
        let create = CreateTodo {
            label: "Walk the dog".to_string(),
            done: false,
        };

        assert_eq!(create.label, "Walk the dog");
        assert!(!create.done);
    }

    #[test]
    fn test_todo_deserializes_payload() {
        let todo: CreateTodo =
            serde_json::from_str(r#"{"label": "Task", "done": true}"#).unwrap();
        assert_eq!(todo.label, "Task");
        assert!(todo.done);
    }

    #[test]
    fn test_todo_rejects_missing_fields() {
        // "done" absent must be a deserialization error, not a silent default
        let result = serde_json::from_str::<CreateTodo>(r#"{"label": "Task"}"#);
        assert!(result.is_err());
    }
}
