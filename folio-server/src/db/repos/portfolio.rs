//! Portfolio repository
//!
//! Owns the singleton profile row: seed-if-absent initialization,
//! fetch by well-known id, and partial section updates. Every write
//! stamps `updated_at` server-side.

use sqlx::types::Json;
use sqlx::{PgPool, Row};

use super::DbError;
use crate::models::{
    Certification, Education, PersonalInfo, Portfolio, PortfolioPatch, Project, Skills,
    PORTFOLIO_ID,
};

const PORTFOLIO_COLUMNS: &str = "id, personal, summary, skills, education, projects, \
                                 certifications, achievements, created_at, updated_at";

/// Portfolio repository
pub struct PortfolioRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PortfolioRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Seed the singleton row if absent, then return it.
    ///
    /// ON CONFLICT DO NOTHING makes this idempotent and safe under
    /// concurrent first-time startup: exactly one process wins the
    /// insert, everyone reads the same row afterwards.
    pub async fn initialize(&self) -> Result<Portfolio, DbError> {
        let seed = Portfolio::seed();

        sqlx::query(
            r#"
            INSERT INTO portfolio
                (id, personal, summary, skills, education, projects, certifications, achievements)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(&seed.id)
        .bind(Json(&seed.personal))
        .bind(&seed.summary)
        .bind(Json(&seed.skills))
        .bind(Json(&seed.education))
        .bind(Json(&seed.projects))
        .bind(Json(&seed.certifications))
        .bind(Json(&seed.achievements))
        .execute(self.pool)
        .await?;

        self.fetch().await?.ok_or(DbError::NotFound {
            resource: "portfolio",
            id: PORTFOLIO_ID.to_string(),
        })
    }

    /// Fetch the singleton row. `None` when it has never been seeded.
    pub async fn fetch(&self) -> Result<Option<Portfolio>, DbError> {
        let row = sqlx::query(&format!(
            "SELECT {PORTFOLIO_COLUMNS} FROM portfolio WHERE id = $1"
        ))
        .bind(PORTFOLIO_ID)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| Portfolio {
            id: r.get("id"),
            personal: r.get::<Json<PersonalInfo>, _>("personal").0,
            summary: r.get("summary"),
            skills: r.get::<Json<Skills>, _>("skills").0,
            education: r.get::<Json<Education>, _>("education").0,
            projects: r.get::<Json<Vec<Project>>, _>("projects").0,
            certifications: r.get::<Json<Vec<Certification>>, _>("certifications").0,
            achievements: r.get::<Json<Vec<String>>, _>("achievements").0,
            created_at: r.get("created_at"),
            updated_at: r.get("updated_at"),
        }))
    }

    /// Apply a partial update to the singleton row.
    ///
    /// Only the sections present in the patch are written; `updated_at`
    /// is always stamped. Returns whether a row was modified - `false`
    /// means nothing exists to update (no upsert).
    pub async fn apply_patch(&self, patch: &PortfolioPatch) -> Result<bool, DbError> {
        // SET clauses and binds must stay in the same field order.
        let mut sets = vec!["updated_at = NOW()".to_string()];
        let mut idx = 1;
        for (column, present) in [
            ("personal", patch.personal.is_some()),
            ("summary", patch.summary.is_some()),
            ("skills", patch.skills.is_some()),
            ("education", patch.education.is_some()),
            ("projects", patch.projects.is_some()),
            ("certifications", patch.certifications.is_some()),
            ("achievements", patch.achievements.is_some()),
        ] {
            if present {
                sets.push(format!("{column} = ${idx}"));
                idx += 1;
            }
        }

        let sql = format!(
            "UPDATE portfolio SET {} WHERE id = ${idx}",
            sets.join(", ")
        );

        let mut query = sqlx::query(&sql);
        if let Some(personal) = &patch.personal {
            query = query.bind(Json(personal));
        }
        if let Some(summary) = &patch.summary {
            query = query.bind(summary);
        }
        if let Some(skills) = &patch.skills {
            query = query.bind(Json(skills));
        }
        if let Some(education) = &patch.education {
            query = query.bind(Json(education));
        }
        if let Some(projects) = &patch.projects {
            query = query.bind(Json(projects));
        }
        if let Some(certifications) = &patch.certifications {
            query = query.bind(Json(certifications));
        }
        if let Some(achievements) = &patch.achievements {
            query = query.bind(Json(achievements));
        }
        query = query.bind(PORTFOLIO_ID);

        let result = query.execute(self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Point the profile at a newly uploaded resume file.
    ///
    /// JSONB sub-field update; the rest of `personal` is untouched.
    pub async fn set_resume_file_name(&self, file_name: &str) -> Result<bool, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE portfolio
            SET personal = jsonb_set(personal, '{resume_file_name}', to_jsonb($1::text)),
                updated_at = NOW()
            WHERE id = $2
            "#,
        )
        .bind(file_name)
        .bind(PORTFOLIO_ID)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations, pool::create_pool};

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("bootstrap failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn initialize_is_idempotent() {
        let pool = test_pool().await;
        let repo = PortfolioRepo::new(&pool);

        let first = repo.initialize().await.expect("first initialize failed");
        let second = repo.initialize().await.expect("second initialize failed");

        assert_eq!(first.id, second.id);
        assert_eq!(first.created_at, second.created_at);

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM portfolio")
            .fetch_one(&pool)
            .await
            .expect("count failed");
        assert_eq!(count.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn patch_updates_section_and_bumps_timestamp() {
        let pool = test_pool().await;
        let repo = PortfolioRepo::new(&pool);

        let before = repo.initialize().await.expect("initialize failed");

        let marker = format!("summary-{}", uuid::Uuid::new_v4());
        let patch = PortfolioPatch {
            summary: Some(marker.clone()),
            ..Default::default()
        };
        assert!(repo.apply_patch(&patch).await.expect("patch failed"));

        let after = repo
            .fetch()
            .await
            .expect("fetch failed")
            .expect("row missing after patch");
        assert_eq!(after.summary, marker);
        assert!(after.updated_at >= before.updated_at);
        // Untouched sections survive.
        assert_eq!(after.education, before.education);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn resume_file_name_sub_update() {
        let pool = test_pool().await;
        let repo = PortfolioRepo::new(&pool);

        let before = repo.initialize().await.expect("initialize failed");

        let file_name = format!("{}.pdf", uuid::Uuid::new_v4());
        assert!(repo
            .set_resume_file_name(&file_name)
            .await
            .expect("update failed"));

        let after = repo
            .fetch()
            .await
            .expect("fetch failed")
            .expect("row missing");
        assert_eq!(after.personal.resume_file_name.as_deref(), Some(file_name.as_str()));
        assert_eq!(after.personal.name, before.personal.name);
    }
}
