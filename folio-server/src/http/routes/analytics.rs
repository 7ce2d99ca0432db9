//! Page-visit analytics endpoints
//!
//! Visit logging is best-effort: it always answers 200, embedding a
//! soft failure in the body when the store write fails. Analytics must
//! never break the primary user flow.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::db::repos::{VisitRepo, VisitStats};
use crate::http::client_info::VisitorInfo;
use crate::http::error::ApiError;
use crate::http::response::{ok, soft_failure, Envelope};
use crate::http::server::AppState;

#[derive(Deserialize, Default)]
pub struct VisitParams {
    pub page: Option<String>,
}

/// Visit stats response
#[derive(Serialize)]
pub struct StatsResponse {
    pub total_visits: i64,
    pub unique_visitors: i64,
    pub last_updated: String,
}

impl From<VisitStats> for StatsResponse {
    fn from(s: VisitStats) -> Self {
        Self {
            total_visits: s.total_visits,
            unique_visitors: s.unique_visitors,
            last_updated: s.last_updated.to_rfc3339(),
        }
    }
}

/// POST /api/analytics/visit?page=<path> - record a page visit
async fn log_visit(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VisitParams>,
    visitor: VisitorInfo,
) -> Json<Envelope<Value>> {
    let page = params.page.unwrap_or_else(|| "/".to_string());

    match VisitRepo::new(&state.pool)
        .log(&visitor.ip, &visitor.user_agent, &page)
        .await
    {
        Ok(()) => ok(json!({"message": "Visit logged"})),
        Err(e) => {
            tracing::warn!(error = %e, page = %page, "failed to log visit");
            soft_failure("Failed to log visit", "ANALYTICS_ERROR")
        }
    }
}

/// GET /api/analytics/stats - visit counters
async fn visit_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<StatsResponse>>, ApiError> {
    let stats = VisitRepo::new(&state.pool)
        .stats()
        .await
        .map_err(|e| ApiError::db("ANALYTICS_ERROR", e))?;

    Ok(ok(StatsResponse::from(stats)))
}

/// Analytics routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analytics/visit", post(log_visit))
        .route("/analytics/stats", get(visit_stats))
}
