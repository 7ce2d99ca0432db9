//! Resume file endpoints
//!
//! Files live flat in the uploads directory, addressed by file name,
//! last write wins. Only PDFs are accepted.

use std::path::Path;
use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::db::repos::PortfolioRepo;
use crate::http::error::ApiError;
use crate::http::response::{ok, Envelope};
use crate::http::server::AppState;

/// GET /api/resume/download - stream the stored PDF
async fn download_resume(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let portfolio = PortfolioRepo::new(&state.pool)
        .fetch()
        .await
        .map_err(|e| ApiError::db("DOWNLOAD_ERROR", e))?
        .ok_or_else(|| ApiError::not_found("Resume not found", "RESUME_NOT_FOUND"))?;

    let file_name = portfolio
        .personal
        .resume_file_name
        .as_deref()
        .and_then(sanitize_file_name)
        .ok_or_else(|| ApiError::not_found("Resume not found", "RESUME_NOT_FOUND"))?;

    let path = state.uploads_dir.join(&file_name);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ApiError::not_found(
                "Resume file not found on server",
                "RESUME_NOT_FOUND",
            ));
        }
        Err(e) => {
            return Err(ApiError::internal(
                "DOWNLOAD_ERROR",
                format!("failed to read {}: {e}", path.display()),
            ));
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{file_name}\"")).map_err(
            |e| ApiError::internal("DOWNLOAD_ERROR", format!("bad file name header: {e}")),
        )?,
    );

    Ok((headers, bytes).into_response())
}

/// POST /api/resume/upload - accept a single PDF and point the profile
/// at it
async fn upload_resume(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<Envelope<Value>>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::upload(format!("malformed upload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        // Content type is checked before anything is written or stored.
        if !is_pdf(field.content_type()) {
            return Err(ApiError::upload("Only PDF files are allowed"));
        }

        let file_name = field
            .file_name()
            .and_then(sanitize_file_name)
            .ok_or_else(|| ApiError::upload("upload is missing a usable file name"))?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::upload(format!("failed to read upload: {e}")))?;

        tokio::fs::create_dir_all(&state.uploads_dir)
            .await
            .map_err(|e| {
                ApiError::internal("UPLOAD_ERROR", format!("failed to create uploads dir: {e}"))
            })?;
        let path = state.uploads_dir.join(&file_name);
        tokio::fs::write(&path, &bytes).await.map_err(|e| {
            ApiError::internal("UPLOAD_ERROR", format!("failed to write {}: {e}", path.display()))
        })?;

        let modified = PortfolioRepo::new(&state.pool)
            .set_resume_file_name(&file_name)
            .await
            .map_err(|e| ApiError::db("UPLOAD_ERROR", e))?;
        if !modified {
            return Err(ApiError::not_found(
                "Portfolio not found",
                "PORTFOLIO_NOT_FOUND",
            ));
        }

        tracing::info!(file = %file_name, "resume uploaded");
        return Ok(ok(json!({
            "message": format!("Resume {file_name} uploaded successfully"),
            "file_name": file_name,
        })));
    }

    Err(ApiError::upload("missing file field"))
}

/// True for `application/pdf`, ignoring parameters and case.
fn is_pdf(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().eq_ignore_ascii_case("application/pdf"))
        .unwrap_or(false)
}

/// Reduce a client-supplied name to a safe basename.
fn sanitize_file_name(name: &str) -> Option<String> {
    let base = Path::new(name).file_name()?.to_str()?;
    if base.is_empty() {
        return None;
    }
    Some(base.to_string())
}

/// Resume routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/resume/download", get(download_resume))
        .route("/resume/upload", post(upload_resume))
}
