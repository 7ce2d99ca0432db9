//! Portfolio endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::db::repos::PortfolioRepo;
use crate::http::error::ApiError;
use crate::http::response::{ok, Envelope};
use crate::http::server::AppState;
use crate::models::{Portfolio, PortfolioPatch};

/// GET /api/portfolio - the full profile document
async fn get_portfolio(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Portfolio>>, ApiError> {
    let portfolio = PortfolioRepo::new(&state.pool)
        .fetch()
        .await
        .map_err(|e| ApiError::db("FETCH_ERROR", e))?
        .ok_or_else(|| ApiError::not_found("Portfolio not found", "PORTFOLIO_NOT_FOUND"))?;

    Ok(ok(portfolio))
}

/// PUT /api/portfolio - apply a partial update
///
/// The body is decoded as a Value first so unknown fields come back as
/// an enveloped validation error rather than a bare rejection.
async fn update_portfolio(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Envelope<Value>>, ApiError> {
    let patch: PortfolioPatch = serde_json::from_value(body)
        .map_err(|e| ApiError::bad_request(format!("invalid portfolio update: {e}")))?;

    let modified = PortfolioRepo::new(&state.pool)
        .apply_patch(&patch)
        .await
        .map_err(|e| ApiError::db("UPDATE_ERROR", e))?;

    if !modified {
        return Err(ApiError::not_found(
            "Portfolio not found",
            "PORTFOLIO_NOT_FOUND",
        ));
    }

    Ok(ok(json!({"message": "Portfolio updated successfully"})))
}

/// Portfolio routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio", get(get_portfolio).put(update_portfolio))
}
