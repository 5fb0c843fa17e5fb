//! Repository implementations for the catalog entities.

pub mod album;
pub mod artist;
pub mod table;

pub use album::AlbumRepository;
pub use artist::ArtistRepository;
pub use table::{EntityQuery, Table, TableRepository};
