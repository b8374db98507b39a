/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. Sign-up is the
 * only write path; nothing in scope mutates or deletes user rows.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Role assigned to newly registered users
pub const DEFAULT_ROLE: &str = "user";

/// User row as stored in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Display name
    pub name: String,
    /// User role (`user` unless assigned otherwise)
    pub role: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new user
///
/// The ID and timestamps are generated here; the role defaults to
/// [`DEFAULT_ROLE`].
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `email` - User email
/// * `password_hash` - Hashed password
/// * `name` - Display name
///
/// # Returns
///
/// Created user or error. A duplicate email surfaces as a unique
/// constraint violation; see [`is_unique_violation`].
pub async fn create_user(
    pool: &PgPool,
    email: String,
    password_hash: String,
    name: String,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, name, role, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, email, password_hash, name, role, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&email)
    .bind(&password_hash)
    .bind(&name)
    .bind(DEFAULT_ROLE)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
///
/// User or None if not found
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, role, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
///
/// User or None if not found
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, role, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Check whether a database error is a unique constraint violation
///
/// SQLSTATE 23505. The email pre-check in the signup handler answers the
/// common case; the constraint is authoritative under concurrent
/// registration, and this lets that race map to 409 instead of 500.
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == "23505")
}
