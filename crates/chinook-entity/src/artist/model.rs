//! Artist entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A recording artist in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Artist {
    /// Surrogate key, assigned by the store on insert and immutable
    /// thereafter.
    pub artist_id: i32,
    /// Artist name.
    pub name: String,
}

/// Data required to create a new artist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArtist {
    /// Artist name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_serde_round_trip() {
        let artist = Artist {
            artist_id: 1,
            name: "AC/DC".to_string(),
        };
        let json = serde_json::to_string(&artist).unwrap();
        let back: Artist = serde_json::from_str(&json).unwrap();
        assert_eq!(back, artist);
    }
}
