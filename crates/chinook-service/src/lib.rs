//! # chinook-service
//!
//! Business layer for the Chinook catalog: the [`Supervisor`] façade the
//! controller layer calls.

pub mod supervisor;

pub use supervisor::Supervisor;
