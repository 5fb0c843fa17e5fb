//! Artist repository configuration.

use chinook_entity::artist::{Artist, CreateArtist};

use super::table::{EntityQuery, Table, TableRepository};

/// Repository for artist CRUD and paged query operations.
pub type ArtistRepository = TableRepository<Artist>;

impl Table for Artist {
    type Create = CreateArtist;

    const TABLE: &'static str = "artists";
    const KEY_COLUMN: &'static str = "artist_id";
    const DATA_COLUMNS: &'static [&'static str] = &["name"];

    fn key(&self) -> i32 {
        self.artist_id
    }

    fn bind_create<'q, O>(
        data: &'q CreateArtist,
        query: EntityQuery<'q, O>,
    ) -> EntityQuery<'q, O> {
        query.bind(&data.name)
    }

    fn bind_data<'q, O>(&'q self, query: EntityQuery<'q, O>) -> EntityQuery<'q, O> {
        query.bind(&self.name)
    }
}
