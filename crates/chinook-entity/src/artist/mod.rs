//! Artist entity.

pub mod model;

pub use model::{Artist, CreateArtist};
