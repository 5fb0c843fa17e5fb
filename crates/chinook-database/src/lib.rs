//! # chinook-database
//!
//! PostgreSQL connection management and repository implementations for
//! the Chinook catalog entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
