/// Profile model and database operations
///
/// A profile is created together with its owning user at registration and is
/// never created independently. Deleting the user deletes the profile.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE profiles (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     bio TEXT NOT NULL DEFAULT '',
///     github TEXT NOT NULL DEFAULT '',
///     user_id UUID NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Profile model, 1:1 with its owning user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    /// Unique profile ID
    pub id: Uuid,

    /// Free-text bio, empty by default
    pub bio: String,

    /// GitHub handle, empty by default
    pub github: String,

    /// Owning user
    pub user_id: Uuid,
}

impl Profile {
    /// Finds the profile belonging to a user
    ///
    /// Every user has exactly one profile, so a missing row indicates the
    /// user itself no longer exists.
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_user(pool: &PgPool, user_id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, bio, github, user_id
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }
}
