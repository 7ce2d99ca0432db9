//! Database layer - connection pool, schema bootstrap, repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Singleton row addressed by its well-known id, never by "first match"
//! - Seed via ON CONFLICT DO NOTHING - no check-then-insert
//! - Handlers never run SQL; repositories own every query

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
