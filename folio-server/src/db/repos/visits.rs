//! Visit log repository
//!
//! Append-only analytics records. Callers at the HTTP boundary treat
//! logging failures as soft; this layer just reports them.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::DbError;

/// Aggregated visit counters.
#[derive(Debug, Clone)]
pub struct VisitStats {
    /// Count of all logged visits.
    pub total_visits: i64,
    /// Lifetime distinct visitor-IP count. No deduplication window.
    pub unique_visitors: i64,
    /// Time of query evaluation, not of the last logged visit.
    pub last_updated: DateTime<Utc>,
}

/// Visit log repository
pub struct VisitRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> VisitRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Append one visit record. Id and timestamp are store-generated.
    pub async fn log(
        &self,
        visitor_ip: &str,
        user_agent: &str,
        page: &str,
    ) -> Result<(), DbError> {
        sqlx::query("INSERT INTO visits (visitor_ip, user_agent, page) VALUES ($1, $2, $3)")
            .bind(visitor_ip)
            .bind(user_agent)
            .bind(page)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Count total visits and lifetime distinct visitors in one query.
    pub async fn stats(&self) -> Result<VisitStats, DbError> {
        let (total_visits, unique_visitors): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COUNT(DISTINCT visitor_ip) FROM visits",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(VisitStats {
            total_visits,
            unique_visitors,
            last_updated: Utc::now(),
        })
    }
}
