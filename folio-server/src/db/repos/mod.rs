//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and owns the SQL for one
//! collection. Not-found is a value (`Option`/`bool`), not an error,
//! except where a row is required to exist.

pub mod contact;
pub mod portfolio;
pub mod visits;

pub use contact::{ContactRepo, ContactSubmission};
pub use portfolio::PortfolioRepo;
pub use visits::{VisitRepo, VisitStats};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
