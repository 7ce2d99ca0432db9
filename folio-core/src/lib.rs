//! folio-core: shared plumbing for the folio backend
//!
//! Holds the runtime configuration and tracing initialization used by
//! the server binary. Domain logic lives in folio-server.

pub mod config;
pub mod tracing_setup;

pub use config::AppConfig;
pub use tracing_setup::init_tracing;
