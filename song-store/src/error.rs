use crate::models::SongId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("song {0} not found")]
    NotFound(SongId),

    #[error("update patch has no fields set")]
    EmptyPatch,

    #[error("migration failed: {0}")]
    Migration(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
