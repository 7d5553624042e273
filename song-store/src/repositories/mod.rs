//! Repository layer for song data access.
//!
//! The trait defines the interface; the SQLite implementation uses sqlx
//! for async database access. All operations return `Result<T>` and map
//! rows back into domain models.

pub mod pagination;
pub mod song;

pub use pagination::{PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use song::{SongRepository, SqliteSongRepository};
