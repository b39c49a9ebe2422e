/// Database models for TaskHub
///
/// This module contains all database models and their persistence operations.
///
/// # Models
///
/// - `user`: User accounts (created together with their profile)
/// - `profile`: Per-user profile, 1:1 with users
/// - `todo`: Task list entries owned by a user
/// - `course`: Courses and the user↔course enrollment association
///
/// # Example
///
/// ```no_run
/// use taskhub_shared::models::user::{User, CreateUser};
/// use taskhub_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let new_user = CreateUser {
///     email: "user@example.com".to_string(),
///     password_hash: "$argon2id$...".to_string(),
/// };
///
/// let user = User::create(&pool, new_user).await?;
/// # Ok(())
/// # }
/// ```

pub mod course;
pub mod profile;
pub mod todo;
pub mod user;
