//! Album repository configuration and album-specific queries.

use chinook_core::error::{AppError, ErrorKind};
use chinook_core::result::AppResult;
use chinook_entity::album::{Album, CreateAlbum};

use super::table::{EntityQuery, Table, TableRepository};

/// Repository for album CRUD, paged query, and by-artist operations.
pub type AlbumRepository = TableRepository<Album>;

impl Table for Album {
    type Create = CreateAlbum;

    const TABLE: &'static str = "albums";
    const KEY_COLUMN: &'static str = "album_id";
    const DATA_COLUMNS: &'static [&'static str] = &["title", "artist_id"];

    fn key(&self) -> i32 {
        self.album_id
    }

    fn bind_create<'q, O>(data: &'q CreateAlbum, query: EntityQuery<'q, O>) -> EntityQuery<'q, O> {
        query.bind(&data.title).bind(data.artist_id)
    }

    fn bind_data<'q, O>(&'q self, query: EntityQuery<'q, O>) -> EntityQuery<'q, O> {
        query.bind(&self.title).bind(self.artist_id)
    }
}

impl TableRepository<Album> {
    /// List the albums owned by the given artist.
    ///
    /// Equality filter with the store's default ordering; returns an
    /// empty vec (not an error) when nothing matches, including for an
    /// unknown artist.
    pub async fn find_by_artist_id(&self, artist_id: i32) -> AppResult<Vec<Album>> {
        sqlx::query_as::<_, Album>("SELECT * FROM albums WHERE artist_id = $1")
            .bind(artist_id)
            .fetch_all(self.pool())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list albums by artist", e)
            })
    }
}
