//! Contact form endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::db::repos::{ContactRepo, ContactSubmission};
use crate::http::error::ApiError;
use crate::http::response::{ok, Envelope};
use crate::http::server::AppState;
use crate::models::{ContactStatus, NewContactSubmission};

/// Contact form request. Fields are optional at the serde level so a
/// missing field reports as an enveloped validation error.
#[derive(Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Submission response
#[derive(Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: String,
}

impl From<ContactSubmission> for SubmissionResponse {
    fn from(s: ContactSubmission) -> Self {
        Self {
            id: s.id,
            name: s.name,
            email: s.email,
            subject: s.subject,
            message: s.message,
            status: s.status,
            created_at: s.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// POST /api/contact - submit the contact form
async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> Result<Json<Envelope<Value>>, ApiError> {
    let submission = NewContactSubmission::new(
        form.name.as_deref().unwrap_or(""),
        form.email.as_deref().unwrap_or(""),
        form.subject.as_deref().unwrap_or(""),
        form.message.as_deref().unwrap_or(""),
    )?;

    let stored = ContactRepo::new(&state.pool)
        .create(&submission)
        .await
        .map_err(|e| ApiError::db("CONTACT_ERROR", e))?;

    Ok(ok(json!({
        "message": "Contact form submitted successfully",
        "submission_id": stored.id,
    })))
}

/// GET /api/contact - list all submissions
async fn list_contacts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Value>>, ApiError> {
    let submissions = ContactRepo::new(&state.pool)
        .list()
        .await
        .map_err(|e| ApiError::db("FETCH_ERROR", e))?;

    let submissions: Vec<SubmissionResponse> =
        submissions.into_iter().map(SubmissionResponse::from).collect();

    Ok(ok(json!({ "submissions": submissions })))
}

/// Contact routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/contact", get(list_contacts).post(submit_contact))
}
