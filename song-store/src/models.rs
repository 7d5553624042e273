//! Domain models for the song library.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(transparent)]
pub struct SongId(pub Uuid);

impl SongId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for SongId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One track's metadata and lyrics.
///
/// The identifier is assigned by the store on creation and never changes.
/// Every other field is independently nullable and independently updatable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Song {
    /// Unique identifier
    pub song_id: SongId,
    /// Track title
    pub song_name: Option<String>,
    /// Full lyric text; verses separated by a blank line
    pub song_text: Option<String>,
    /// Performing group or artist
    pub group_name: Option<String>,
    /// External link (video, streaming page)
    pub link: Option<String>,
    /// Calendar date of release
    pub release_date: Option<NaiveDate>,
}

/// Creation payload. The store assigns the identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSong {
    pub song_name: Option<String>,
    pub song_text: Option<String>,
    pub group_name: Option<String>,
    pub link: Option<String>,
    pub release_date: Option<NaiveDate>,
}

/// Partial update: only set fields overwrite stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongPatch {
    pub song_name: Option<String>,
    pub song_text: Option<String>,
    pub group_name: Option<String>,
    pub link: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl SongPatch {
    /// True when no field is set. An empty patch would produce an UPDATE
    /// without a SET list, so the repository rejects it up front.
    pub fn is_empty(&self) -> bool {
        self.song_name.is_none()
            && self.song_text.is_none()
            && self.group_name.is_none()
            && self.link.is_none()
            && self.release_date.is_none()
    }
}

/// Filter options for listing songs. Text fields match substrings, the
/// release date matches exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongFilter {
    pub song_name: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub group_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_id_round_trips_through_string() {
        let id = SongId::new();
        let parsed = SongId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn song_id_rejects_garbage() {
        assert!(SongId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn patch_emptiness() {
        assert!(SongPatch::default().is_empty());

        let patch = SongPatch {
            link: Some("https://example.com".to_string()),
            ..SongPatch::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn song_serializes_null_fields() {
        let song = Song {
            song_id: SongId::new(),
            song_name: Some("Absolute Territory".to_string()),
            song_text: None,
            group_name: Some("Ken Ashcorp".to_string()),
            link: None,
            release_date: None,
        };

        let value = serde_json::to_value(&song).unwrap();
        assert_eq!(value["song_name"], "Absolute Territory");
        assert!(value["song_text"].is_null());
        assert!(value["release_date"].is_null());
    }
}
