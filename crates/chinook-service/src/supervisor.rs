//! The supervisor: single façade over the catalog repositories.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use chinook_core::result::AppResult;
use chinook_core::types::pagination::PageRequest;
use chinook_database::repositories::{AlbumRepository, ArtistRepository};
use chinook_entity::{Album, Artist, CreateAlbum, CreateArtist};

/// Orchestrates the catalog repositories on behalf of the controller
/// layer.
///
/// Forwards paging, key, and entity arguments to the matching repository
/// call, plus cross-repository composition (albums for an artist). Paging
/// bounds are validated by the controllers before these methods are
/// invoked, so nothing is re-validated here, and no transaction spans
/// two repository calls: each call is its own unit of work.
///
/// `update_*` and `delete_*` collapse the repositories' mutation outcome
/// to the legacy boolean, so callers cannot distinguish "row absent"
/// from "store rejected the write". Surfacing the richer
/// [`MutationOutcome`](chinook_core::types::MutationOutcome) here would
/// change the observable contract; see DESIGN.md.
#[derive(Debug, Clone)]
pub struct Supervisor {
    /// Artist repository.
    artist_repo: Arc<ArtistRepository>,
    /// Album repository.
    album_repo: Arc<AlbumRepository>,
}

impl Supervisor {
    /// Creates a new supervisor over the given repositories.
    pub fn new(artist_repo: Arc<ArtistRepository>, album_repo: Arc<AlbumRepository>) -> Self {
        Self {
            artist_repo,
            album_repo,
        }
    }

    /// Creates a supervisor with fresh repositories over a shared pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(ArtistRepository::new(pool.clone())),
            Arc::new(AlbumRepository::new(pool)),
        )
    }

    /// One page of artists, ordered by key ascending.
    pub async fn get_all_artists(&self, page: &PageRequest) -> AppResult<Vec<Artist>> {
        self.artist_repo.find_all(page).await
    }

    /// Artist lookup by key; `None` when no row matches.
    pub async fn get_artist_by_id(&self, id: i32) -> AppResult<Option<Artist>> {
        self.artist_repo.find_by_id(id).await
    }

    /// Insert a new artist; the store assigns the key.
    pub async fn add_artist(&self, artist: &CreateArtist) -> AppResult<Artist> {
        let artist = self.artist_repo.create(artist).await?;
        info!(artist_id = artist.artist_id, "Artist created");
        Ok(artist)
    }

    /// Update an artist by key. `false` when the row is absent or the
    /// store rejected the write.
    pub async fn update_artist(&self, artist: &Artist) -> AppResult<bool> {
        Ok(self.artist_repo.update(artist).await?.applied())
    }

    /// Delete an artist by key. `false` when the row is absent or the
    /// store rejected the delete (e.g. albums still reference it).
    pub async fn delete_artist(&self, id: i32) -> AppResult<bool> {
        Ok(self.artist_repo.delete(id).await?.applied())
    }

    /// One page of albums, ordered by key ascending.
    pub async fn get_all_albums(&self, page: &PageRequest) -> AppResult<Vec<Album>> {
        self.album_repo.find_all(page).await
    }

    /// Album lookup by key; `None` when no row matches.
    pub async fn get_album_by_id(&self, id: i32) -> AppResult<Option<Album>> {
        self.album_repo.find_by_id(id).await
    }

    /// Albums owned by the given artist; empty when none match.
    pub async fn get_albums_by_artist_id(&self, artist_id: i32) -> AppResult<Vec<Album>> {
        self.album_repo.find_by_artist_id(artist_id).await
    }

    /// Insert a new album. An unknown artist surfaces as a propagated
    /// constraint fault, not a translated error.
    pub async fn add_album(&self, album: &CreateAlbum) -> AppResult<Album> {
        let album = self.album_repo.create(album).await?;
        info!(album_id = album.album_id, artist_id = album.artist_id, "Album created");
        Ok(album)
    }

    /// Update an album by key. Same boolean contract as
    /// [`update_artist`](Self::update_artist).
    pub async fn update_album(&self, album: &Album) -> AppResult<bool> {
        Ok(self.album_repo.update(album).await?.applied())
    }

    /// Delete an album by key.
    pub async fn delete_album(&self, id: i32) -> AppResult<bool> {
        Ok(self.album_repo.delete(id).await?.applied())
    }
}
