/// User model and database operations
///
/// This module provides the User model and its persistence operations. A user
/// owns exactly one profile (created in the same transaction at registration),
/// zero or more todos, and participates in courses via the enrollments table.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     email VARCHAR(255) NOT NULL UNIQUE,
///     password_hash VARCHAR(255) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
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
/// let user = User::create(&pool, CreateUser {
///     email: "user@example.com".to_string(),
///     password_hash: "$argon2id$...".to_string(),
/// }).await?;
///
/// let found = User::find_by_email(&pool, "user@example.com").await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// User model representing a registered account
///
/// Passwords are stored as Argon2id hashes, never in plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID v4)
    pub id: Uuid,

    /// Email address, unique across users (case-sensitive)
    pub email: String,

    /// Argon2id password hash
    ///
    /// Never store plaintext passwords!
    pub password_hash: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address
    pub email: String,

    /// Argon2id password hash (NOT plaintext password!)
    pub password_hash: String,
}

impl User {
    /// Creates a new user together with its empty profile
    ///
    /// The user row and its profile row are inserted in one transaction, so a
    /// user without a profile cannot exist even if the second insert fails.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Email already exists (unique constraint violation)
    /// - Database connection fails
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use taskhub_shared::models::user::{User, CreateUser};
    /// # use sqlx::PgPool;
    /// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
    /// let user = User::create(&pool, CreateUser {
    ///     email: "user@example.com".to_string(),
    ///     password_hash: "$argon2id$...".to_string(),
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(data.email)
        .bind(data.password_hash)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO profiles (user_id) VALUES ($1)")
            .bind(user.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(user)
    }

    /// Finds a user by ID
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by email address
    ///
    /// Email comparison is case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Checks whether an email is already registered
    ///
    /// This is a fast-path check for registration; the unique index on
    /// `users.email` remains the authoritative guard under concurrency.
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn email_taken(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// Deletes a user by ID
    ///
    /// The store's referential-integrity rules cascade the delete to the
    /// user's profile, todos, and enrollment rows. Courses are untouched.
    ///
    /// # Returns
    ///
    /// True if the user was deleted, false if the user didn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
