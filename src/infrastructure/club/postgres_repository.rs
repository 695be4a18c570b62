//! PostgreSQL club repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::club::{Club, ClubId, ClubRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of ClubRepository
#[derive(Debug, Clone)]
pub struct PostgresClubRepository {
    pool: PgPool,
}

impl PostgresClubRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Ensure the clubs table and its indexes exist
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS clubs (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                min_age_for_join INTEGER NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create clubs table: {}", e)))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS clubs_created_at_idx ON clubs (created_at)")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!("Failed to create created_at index: {}", e))
            })?;

        Ok(())
    }
}

#[async_trait]
impl ClubRepository for PostgresClubRepository {
    async fn get(&self, id: &ClubId) -> Result<Option<Club>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, min_age_for_join, created_at
            FROM clubs
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get club: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_club(&row)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, club: Club) -> Result<Club, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO clubs (id, name, min_age_for_join, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                min_age_for_join = EXCLUDED.min_age_for_join
            "#,
        )
        .bind(club.id().as_str())
        .bind(club.name())
        .bind(club.min_age_for_join() as i32)
        .bind(club.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to save club: {}", e)))?;

        Ok(club)
    }

    async fn delete(&self, id: &ClubId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM clubs WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete club: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, page: u32, page_size: u32) -> Result<Vec<Club>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, min_age_for_join, created_at
            FROM clubs
            ORDER BY created_at, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page_size as i64)
        .bind(page as i64 * page_size as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list clubs: {}", e)))?;

        let mut clubs = Vec::with_capacity(rows.len());

        for row in rows {
            clubs.push(row_to_club(&row)?);
        }

        Ok(clubs)
    }
}

fn row_to_club(row: &sqlx::postgres::PgRow) -> Result<Club, DomainError> {
    let id: String = row.get("id");
    let name: String = row.get("name");
    let min_age_for_join: i32 = row.get("min_age_for_join");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

    let club_id = ClubId::new(id)
        .map_err(|e| DomainError::storage(format!("Invalid club ID in database: {}", e)))?;

    Ok(Club::restore(
        club_id,
        name,
        min_age_for_join as u32,
        created_at,
    ))
}
