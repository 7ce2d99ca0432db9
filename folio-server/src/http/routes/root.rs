//! API root liveness message

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::http::response::{ok, Envelope};

/// GET /api/
async fn root() -> Json<Envelope<Value>> {
    ok(json!({"message": "folio backend is running"}))
}

/// Root routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}
