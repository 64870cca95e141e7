//! Idea repository
//!
//! - list: all ideas, newest first, no pagination
//! - insert: INSERT ... RETURNING inside a transaction

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::models::IdeaContent;

/// Idea record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Idea {
    pub id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Storage operations the HTTP layer depends on (testable)
#[async_trait]
pub trait IdeaStore: Send + Sync {
    /// All ideas ordered by `created_at` descending.
    async fn list_ideas(&self) -> Result<Vec<Idea>, DbError>;

    /// Store new content and return the row with its assigned id and timestamp.
    async fn insert_idea(&self, content: IdeaContent) -> Result<Idea, DbError>;
}

/// PostgreSQL-backed idea store
#[derive(Debug, Clone)]
pub struct PgIdeaStore {
    pool: PgPool,
}

impl PgIdeaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdeaStore for PgIdeaStore {
    async fn list_ideas(&self) -> Result<Vec<Idea>, DbError> {
        // Connection goes back to the pool when `conn` drops, on every path
        let mut conn = self.pool.acquire().await?;

        let ideas = sqlx::query_as::<_, Idea>(
            r#"
            SELECT id, content, created_at
            FROM ideas
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(ideas)
    }

    async fn insert_idea(&self, content: IdeaContent) -> Result<Idea, DbError> {
        // Dropping an uncommitted transaction rolls it back
        let mut tx = self.pool.begin().await?;

        let idea = sqlx::query_as::<_, Idea>(
            r#"
            INSERT INTO ideas (content)
            VALUES ($1)
            RETURNING id, content, created_at
            "#,
        )
        .bind(content.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(id = idea.id, "idea created");
        Ok(idea)
    }
}
