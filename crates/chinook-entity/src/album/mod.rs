//! Album entity.

pub mod model;

pub use model::{Album, CreateAlbum};
