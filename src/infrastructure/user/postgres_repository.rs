//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::club::ClubId;
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository
///
/// `assign_club` relies on a conditional UPDATE (`... AND club_id IS
/// NULL`), so the membership precondition is enforced by the database
/// itself - concurrent joins for one user resolve to a single winner.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Ensure the users table and its indexes exist
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                age INTEGER NOT NULL,
                created_at TIMESTAMPTZ NOT NULL,
                club_id TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create users table: {}", e)))?;

        // Membership listing and pagination both go through indexes.
        sqlx::query("CREATE INDEX IF NOT EXISTS users_club_id_idx ON users (club_id)")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create club index: {}", e)))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS users_created_at_idx ON users (created_at)")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!("Failed to create created_at index: {}", e))
            })?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, age, created_at, club_id
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, age, created_at, club_id)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                age = EXCLUDED.age,
                club_id = EXCLUDED.club_id
            "#,
        )
        .bind(user.id().as_str())
        .bind(user.name())
        .bind(user.age() as i32)
        .bind(user.created_at())
        .bind(user.club_id().map(|c| c.as_str()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to save user: {}", e)))?;

        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, page: u32, page_size: u32) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, age, created_at, club_id
            FROM users
            ORDER BY created_at, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page_size as i64)
        .bind(page as i64 * page_size as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        let mut users = Vec::with_capacity(rows.len());

        for row in rows {
            users.push(row_to_user(&row)?);
        }

        Ok(users)
    }

    async fn find_by_club(&self, club_id: &ClubId) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, age, created_at, club_id
            FROM users
            WHERE club_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(club_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list club members: {}", e)))?;

        let mut users = Vec::with_capacity(rows.len());

        for row in rows {
            users.push(row_to_user(&row)?);
        }

        Ok(users)
    }

    async fn assign_club(&self, id: &UserId, club_id: &ClubId) -> Result<User, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE users
            SET club_id = $2
            WHERE id = $1 AND club_id IS NULL
            RETURNING id, name, age, created_at, club_id
            "#,
        )
        .bind(id.as_str())
        .bind(club_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to assign club: {}", e)))?;

        if let Some(row) = row {
            return row_to_user(&row);
        }

        // Zero rows updated: either the user is gone or another writer
        // holds the membership. Tell the two apart for the caller.
        let exists = sqlx::query("SELECT 1 FROM users WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to re-check user: {}", e)))?;

        if exists.is_some() {
            Err(DomainError::precondition_failed(format!(
                "User '{}' already belongs to a club",
                id
            )))
        } else {
            Err(DomainError::not_found(format!("User '{}' not found", id)))
        }
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let id: String = row.get("id");
    let name: String = row.get("name");
    let age: i32 = row.get("age");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let club_id: Option<String> = row.get("club_id");

    let user_id = UserId::new(&id)
        .map_err(|e| DomainError::storage(format!("Invalid user ID in database: {}", e)))?;

    let club_id = club_id
        .map(ClubId::new)
        .transpose()
        .map_err(|e| DomainError::storage(format!("Invalid club ID in database: {}", e)))?;

    Ok(User::restore(user_id, name, age as u32, created_at, club_id))
}
