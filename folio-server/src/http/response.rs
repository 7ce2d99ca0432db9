//! Uniform response envelope
//!
//! Every application response body is `{success, data?, error?}`.
//! Errors flow through [`crate::http::ApiError`]; the soft-failure
//! variant exists for analytics, where a failure must still answer 200.

use axum::Json;
use serde::Serialize;

/// The `{success, data, error}` wrapper applied to every API response.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

/// Error payload inside the envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: &'static str,
}

/// Successful envelope around `data`.
pub fn ok<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        success: true,
        data: Some(data),
        error: None,
    })
}

/// In-body failure inside a 200 response. Analytics only.
pub fn soft_failure<T: Serialize>(message: &str, code: &'static str) -> Json<Envelope<T>> {
    Json(Envelope {
        success: false,
        data: None,
        error: Some(ErrorBody {
            message: message.to_string(),
            code,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn ok_envelope_shape() {
        let Json(envelope) = ok(json!({"message": "hi"}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], Value::Bool(true));
        assert_eq!(value["data"]["message"], "hi");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn soft_failure_shape() {
        let Json(envelope) = soft_failure::<Value>("Failed to log visit", "ANALYTICS_ERROR");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], Value::Bool(false));
        assert!(value.get("data").is_none());
        assert_eq!(value["error"]["code"], "ANALYTICS_ERROR");
        assert_eq!(value["error"]["message"], "Failed to log visit");
    }
}
