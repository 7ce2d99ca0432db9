//! Contact submission repository
//!
//! Append-only: submissions are created and listed, never mutated or
//! deleted here.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::DbError;
use crate::models::{ContactStatus, NewContactSubmission};

/// Retrieval cap for listings. The collection is unbounded; anything
/// past the cap is silently omitted to bound memory use.
const LIST_CAP: i64 = 1000;

/// Contact submission record from database
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

/// Contact submission repository
pub struct ContactRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ContactRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a validated submission, returning the stored record with
    /// its generated id, status, and timestamp.
    pub async fn create(
        &self,
        submission: &NewContactSubmission,
    ) -> Result<ContactSubmission, DbError> {
        let row = sqlx::query(
            r#"
            INSERT INTO contact_submissions (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, subject, message, status, created_at
            "#,
        )
        .bind(submission.name())
        .bind(submission.email())
        .bind(submission.subject())
        .bind(submission.message())
        .fetch_one(self.pool)
        .await?;

        Ok(record_from_row(&row))
    }

    /// List submissions in store-default order, capped at 1000.
    pub async fn list(&self) -> Result<Vec<ContactSubmission>, DbError> {
        let rows = sqlx::query(
            "SELECT id, name, email, subject, message, status, created_at \
             FROM contact_submissions LIMIT $1",
        )
        .bind(LIST_CAP)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(record_from_row).collect())
    }
}

fn record_from_row(row: &sqlx::postgres::PgRow) -> ContactSubmission {
    ContactSubmission {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        subject: row.get("subject"),
        message: row.get("message"),
        status: ContactStatus::parse(row.get::<&str, _>("status")),
        created_at: row.get("created_at"),
    }
}
