//! Schema bootstrap for the three collections
//!
//! Idempotent CREATE TABLE IF NOT EXISTS statements, run at every
//! startup. Nested portfolio sections live in JSONB columns so the
//! document shape can evolve without DDL.

use sqlx::PgPool;

use super::repos::DbError;

/// Create the portfolio, contact_submissions, and visits tables.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running schema bootstrap...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS portfolio (
            id TEXT PRIMARY KEY,
            personal JSONB NOT NULL,
            summary TEXT NOT NULL,
            skills JSONB NOT NULL,
            education JSONB NOT NULL,
            projects JSONB NOT NULL,
            certifications JSONB NOT NULL,
            achievements JSONB NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contact_submissions (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            subject TEXT NOT NULL,
            message TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'new',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS visits (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            visitor_ip TEXT NOT NULL,
            user_agent TEXT NOT NULL,
            page TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Distinct-visitor counting scans this column on every stats call.
    sqlx::query("CREATE INDEX IF NOT EXISTS visits_visitor_ip_idx ON visits (visitor_ip)")
        .execute(pool)
        .await?;

    tracing::info!("Schema bootstrap complete");
    Ok(())
}
