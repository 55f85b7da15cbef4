use sqlx::SqlitePool;
use time::OffsetDateTime;
use tracing::debug;

use crate::error::{RepoError, RepoResult};
use crate::users::repo_types::{NewUser, User};

impl User {
    /// Insert a new user and return it with the store-assigned id.
    pub async fn create(db: &SqlitePool, candidate: &NewUser) -> RepoResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, first_name, last_name, roles,
                               social_provider, social_id, profile_picture_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, username, email, first_name, last_name, roles,
                      social_provider, social_id, profile_picture_url, created_at
            "#,
        )
        .bind(&candidate.username)
        .bind(&candidate.email)
        .bind(&candidate.first_name)
        .bind(&candidate.last_name)
        .bind(&candidate.roles)
        .bind(&candidate.social_provider)
        .bind(&candidate.social_id)
        .bind(&candidate.profile_picture_url)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(db)
        .await?;

        debug!(id = user.id, username = %user.username, "user created");
        Ok(user)
    }

    /// Find a user by username. Absence is not an error.
    pub async fn find_by_username(db: &SqlitePool, username: &str) -> RepoResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, first_name, last_name, roles,
                   social_provider, social_id, profile_picture_url, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Find a user by the id assigned by their social provider.
    pub async fn find_by_social_id(db: &SqlitePool, social_id: &str) -> RepoResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, first_name, last_name, roles,
                   social_provider, social_id, profile_picture_url, created_at
            FROM users
            WHERE social_id = $1
            "#,
        )
        .bind(social_id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Persist the mutable fields of an already-retrieved user and return
    /// the refreshed row. Fails with `NotFound` if the row is gone.
    pub async fn update(db: &SqlitePool, user: &User) -> RepoResult<User> {
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = $1, email = $2, first_name = $3, last_name = $4, roles = $5,
                social_provider = $6, social_id = $7, profile_picture_url = $8
            WHERE id = $9
            RETURNING id, username, email, first_name, last_name, roles,
                      social_provider, social_id, profile_picture_url, created_at
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.roles)
        .bind(&user.social_provider)
        .bind(&user.social_id)
        .bind(&user.profile_picture_url)
        .bind(user.id)
        .fetch_optional(db)
        .await?
        .ok_or(RepoError::NotFound)?;

        debug!(id = updated.id, "user updated");
        Ok(updated)
    }

    /// Delete a user row. Deleting a row that is already gone is an error,
    /// not a no-op.
    pub async fn delete(db: &SqlitePool, user: &User) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user.id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        debug!(id = user.id, "user deleted");
        Ok(())
    }
}
