//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS (the public frontend lives on another origin)
//! - Request tracing and per-request timeout
//! - Graceful shutdown
//! - Uniform {success, data, error} response envelope

pub mod client_info;
pub mod error;
pub mod response;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use response::{ok, soft_failure, Envelope};
pub use server::{build_router, run_server, AppState};
