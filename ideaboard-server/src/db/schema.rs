//! Schema bootstrap for the ideas table

use sqlx::PgPool;

use super::DbError;

/// Create the ideas table (and its id index) if absent.
///
/// Safe to run on every start. Failure here means the server cannot start.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring ideas schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS ideas (
            id SERIAL PRIMARY KEY,
            content TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS ix_ideas_id ON ideas(id)")
        .execute(pool)
        .await?;

    tracing::info!("Ideas schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ensure_schema_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        ensure_schema(&pool).await.expect("first run failed");
        ensure_schema(&pool).await.expect("second run failed");

        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = 'ideas')",
        )
        .fetch_one(&pool)
        .await
        .expect("query failed");
        assert!(exists);
    }
}
