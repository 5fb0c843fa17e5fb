//! # chinook-entity
//!
//! Domain entity models for the Chinook catalog. Every struct in this
//! crate represents a database table row or an insert payload. All
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and row
//! models additionally derive `sqlx::FromRow`.

pub mod album;
pub mod artist;

pub use album::{Album, CreateAlbum};
pub use artist::{Artist, CreateArtist};
