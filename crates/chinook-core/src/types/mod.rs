//! Shared types used across the catalog crates.

pub mod mutation;
pub mod pagination;

pub use mutation::MutationOutcome;
pub use pagination::PageRequest;
