//! Song repository trait and SQLite implementation.

use crate::error::{Result, StoreError};
use crate::lyrics::{extract_verses, VerseWindow};
use crate::models::{NewSong, Song, SongFilter, SongId, SongPatch};
use crate::query::{bind_query, bind_query_as, build_filter_query, build_update_query};
use crate::repositories::PageRequest;
use async_trait::async_trait;
use sqlx::{query_as, SqlitePool};

/// Song repository interface for data access operations
#[async_trait]
pub trait SongRepository: Send + Sync {
    /// Insert a new song, assigning a fresh identifier.
    ///
    /// Returns the stored entity, identifier included.
    async fn create(&self, song: &NewSong) -> Result<Song>;

    /// Fetch a song by its ID.
    ///
    /// # Errors
    /// `StoreError::NotFound` when no row matches.
    async fn get(&self, id: SongId) -> Result<Song>;

    /// Fetch a filtered page of songs.
    ///
    /// Returns an empty vec, never an error, when nothing matches.
    async fn list(&self, filter: &SongFilter, page: PageRequest) -> Result<Vec<Song>>;

    /// Apply a partial update: only set patch fields overwrite stored
    /// values.
    ///
    /// # Errors
    /// - `StoreError::EmptyPatch` when no field is set
    /// - `StoreError::NotFound` when no row was affected
    async fn update(&self, id: SongId, patch: &SongPatch) -> Result<()>;

    /// Delete a song by ID.
    ///
    /// # Returns
    /// - `Ok(true)` if the song was deleted
    /// - `Ok(false)` if no such song existed
    async fn remove(&self, id: SongId) -> Result<bool>;

    /// Fetch a window of verses from a song's text.
    ///
    /// A song whose text is unset yields an empty list.
    async fn verses(&self, id: SongId, window: VerseWindow) -> Result<Vec<String>>;
}

/// SQLite implementation of [`SongRepository`]
pub struct SqliteSongRepository {
    pool: SqlitePool,
}

impl SqliteSongRepository {
    /// Create a new SQLite song repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SongRepository for SqliteSongRepository {
    async fn create(&self, song: &NewSong) -> Result<Song> {
        let id = SongId::new();

        sqlx::query(
            "INSERT INTO songs (song_id, song_name, song_text, group_name, link, release_date) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&song.song_name)
        .bind(&song.song_text)
        .bind(&song.group_name)
        .bind(&song.link)
        .bind(song.release_date)
        .execute(&self.pool)
        .await?;

        Ok(Song {
            song_id: id,
            song_name: song.song_name.clone(),
            song_text: song.song_text.clone(),
            group_name: song.group_name.clone(),
            link: song.link.clone(),
            release_date: song.release_date,
        })
    }

    async fn get(&self, id: SongId) -> Result<Song> {
        let song = query_as::<_, Song>(
            "SELECT song_id, song_name, song_text, group_name, link, release_date \
             FROM songs WHERE song_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        song.ok_or(StoreError::NotFound(id))
    }

    async fn list(&self, filter: &SongFilter, page: PageRequest) -> Result<Vec<Song>> {
        let (sql, binds) = build_filter_query(filter, page);
        let songs = bind_query_as(query_as::<_, Song>(&sql), binds)
            .fetch_all(&self.pool)
            .await?;

        Ok(songs)
    }

    async fn update(&self, id: SongId, patch: &SongPatch) -> Result<()> {
        if patch.is_empty() {
            return Err(StoreError::EmptyPatch);
        }

        let (sql, binds) = build_update_query(id, patch);
        let result = bind_query(sqlx::query(&sql), binds)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    async fn remove(&self, id: SongId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM songs WHERE song_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn verses(&self, id: SongId, window: VerseWindow) -> Result<Vec<String>> {
        let song = self.get(id).await?;

        let Some(text) = &song.song_text else {
            return Ok(Vec::new());
        };

        Ok(extract_verses(text, window.start, window.count)
            .into_iter()
            .map(str::to_owned)
            .collect())
    }
}
