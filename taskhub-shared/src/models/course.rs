/// Course model and the user↔course enrollment association
///
/// Courses relate to users many-to-many through the `user_courses` join
/// table. The HTTP surface never mutates course membership; `create` and
/// `enroll` exist for seeding and tests. Deleting a user removes only its
/// enrollment rows, never the course itself.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE courses (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(255) NOT NULL
/// );
///
/// CREATE TABLE user_courses (
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     course_id UUID NOT NULL REFERENCES courses(id) ON DELETE CASCADE,
///     PRIMARY KEY (user_id, course_id)
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskhub_shared::models::course::{Course, CreateCourse};
/// use taskhub_shared::db::pool::{create_pool, DatabaseConfig};
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let course = Course::create(&pool, CreateCourse {
///     name: "Intro to Rust".to_string(),
/// }).await?;
///
/// let user_id = Uuid::new_v4();
/// Course::enroll(&pool, user_id, course.id).await?;
///
/// let enrolled = Course::list_by_user(&pool, user_id).await?;
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Course model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Course {
    /// Unique course ID
    pub id: Uuid,

    /// Course name
    pub name: String,
}

/// Input for creating a new course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourse {
    /// Course name
    pub name: String,
}

/// Enrollment row linking a user to a course
///
/// Composite primary key; no independent lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Enrollment {
    /// Enrolled user
    pub user_id: Uuid,

    /// Course the user is enrolled in
    pub course_id: Uuid,
}

impl Course {
    /// Creates a new course
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn create(pool: &PgPool, data: CreateCourse) -> Result<Self, sqlx::Error> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(data.name)
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    /// Enrolls a user in a course
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The enrollment already exists (primary key violation)
    /// - User or course doesn't exist (foreign key violation)
    /// - Database connection fails
    pub async fn enroll(
        pool: &PgPool,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Enrollment, sqlx::Error> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"
            INSERT INTO user_courses (user_id, course_id)
            VALUES ($1, $2)
            RETURNING user_id, course_id
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(pool)
        .await?;

        Ok(enrollment)
    }

    /// Lists the courses a user is enrolled in
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT c.id, c.name
            FROM courses c
            JOIN user_courses uc ON uc.course_id = c.id
            WHERE uc.user_id = $1
            ORDER BY c.name
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(courses)
    }
}
