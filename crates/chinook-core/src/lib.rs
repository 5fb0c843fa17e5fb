//! # chinook-core
//!
//! Core crate for the Chinook catalog. Contains configuration schemas,
//! pagination and mutation-outcome types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Chinook crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
