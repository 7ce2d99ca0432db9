//! folio-server: HTTP backend for a personal portfolio site
//!
//! Serves the single profile document, contact-form submissions, the
//! resume file, and page-visit analytics over a small JSON API.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, ApiError, AppState};
