//! Album entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An album in the catalog, owned by exactly one artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Album {
    /// Surrogate key, assigned by the store on insert and immutable
    /// thereafter.
    pub album_id: i32,
    /// Album title.
    pub title: String,
    /// Owning artist. Referential integrity is enforced by the store;
    /// inserting with an unknown artist surfaces a constraint fault.
    pub artist_id: i32,
}

/// Data required to create a new album.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAlbum {
    /// Album title.
    pub title: String,
    /// Owning artist.
    pub artist_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_serde_round_trip() {
        let album = Album {
            album_id: 7,
            title: "Back in Black".to_string(),
            artist_id: 1,
        };
        let json = serde_json::to_string(&album).unwrap();
        let back: Album = serde_json::from_str(&json).unwrap();
        assert_eq!(back, album);
    }

    #[test]
    fn test_create_album_deserializes_without_key() {
        let create: CreateAlbum =
            serde_json::from_str(r#"{"title":"Powerage","artist_id":1}"#).unwrap();
        assert_eq!(create.title, "Powerage");
        assert_eq!(create.artist_id, 1);
    }
}
