//! Song endpoints: create, fetch, list, update, delete, and the verse
//! window over a song's lyrics.
//!
//! Identifier and query parsing is done explicitly here so every malformed
//! input maps to the standard error envelope rather than a framework
//! default.

use chrono::NaiveDate;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};
use serde::{Deserialize, Deserializer};
use song_store::lyrics::{VerseWindow, DEFAULT_VERSE_COUNT, MAX_VERSE_COUNT};
use song_store::models::{NewSong, Song, SongFilter, SongId, SongPatch};
use song_store::repositories::{PageRequest, SongRepository, MAX_PAGE_SIZE};

use crate::error::{ApiError, ApiResponse};

/// Wire format for dates: `DD.MM.YYYY`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// The repository handle managed by the Rocket application.
pub type SongStore = Box<dyn SongRepository>;

/// A `DD.MM.YYYY` date carried in a JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireDate(pub NaiveDate);

impl<'de> Deserialize<'de> for WireDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT)
            .map(WireDate)
            .map_err(serde::de::Error::custom)
    }
}

fn parse_song_id(raw: &str) -> Result<SongId, ApiError> {
    SongId::from_string(raw).map_err(|_| ApiError::wrong_parameters())
}

fn parse_release_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| ApiError::wrong_parameters())
}

fn parse_index(raw: &str) -> Result<u32, ApiError> {
    raw.parse().map_err(|_| ApiError::wrong_parameters())
}

#[derive(Debug, Deserialize)]
pub struct CreateSongRequest {
    pub group_name: String,
    pub song_name: String,
    #[serde(default)]
    pub song_text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub release_date: Option<WireDate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateSongRequest {
    pub song_name: Option<String>,
    pub song_text: Option<String>,
    pub group_name: Option<String>,
    pub link: Option<String>,
    pub release_date: Option<WireDate>,
}

#[post("/info", data = "<request>")]
pub async fn create_song(
    store: &State<SongStore>,
    request: Option<Json<CreateSongRequest>>,
) -> Result<(Status, Json<ApiResponse<Song>>), ApiError> {
    let request = request.ok_or_else(ApiError::wrong_parameters)?.into_inner();

    let song = store
        .create(&NewSong {
            song_name: Some(request.song_name),
            song_text: request.song_text,
            group_name: Some(request.group_name),
            link: request.link,
            release_date: request.release_date.map(|d| d.0),
        })
        .await?;

    Ok((Status::Created, ApiResponse::ok(song)))
}

#[delete("/info/<song_id>")]
pub async fn remove_song(
    store: &State<SongStore>,
    song_id: &str,
) -> Result<Json<ApiResponse<&'static str>>, ApiError> {
    let id = parse_song_id(song_id)?;

    if store.remove(id).await? {
        Ok(ApiResponse::ok("ok"))
    } else {
        Err(ApiError::song_not_found(id))
    }
}

#[put("/info/<song_id>", data = "<request>")]
pub async fn update_song(
    store: &State<SongStore>,
    song_id: &str,
    request: Option<Json<UpdateSongRequest>>,
) -> Result<Json<ApiResponse<&'static str>>, ApiError> {
    let id = parse_song_id(song_id)?;
    let request = request.ok_or_else(ApiError::wrong_parameters)?.into_inner();

    store
        .update(
            id,
            &SongPatch {
                song_name: request.song_name,
                song_text: request.song_text,
                group_name: request.group_name,
                link: request.link,
                release_date: request.release_date.map(|d| d.0),
            },
        )
        .await?;

    Ok(ApiResponse::ok("ok"))
}

#[get("/info/<song_id>")]
pub async fn get_song(
    store: &State<SongStore>,
    song_id: &str,
) -> Result<Json<ApiResponse<Song>>, ApiError> {
    let id = parse_song_id(song_id)?;
    let song = store.get(id).await?;

    Ok(ApiResponse::ok(song))
}

#[get("/info?<page_current>&<page_size>&<song_name>&<group_name>&<release_date>")]
pub async fn list_songs(
    store: &State<SongStore>,
    page_current: Option<&str>,
    page_size: Option<&str>,
    song_name: Option<&str>,
    group_name: Option<&str>,
    release_date: Option<&str>,
) -> Result<Json<ApiResponse<Vec<Song>>>, ApiError> {
    let page = match page_current {
        Some(raw) => parse_index(raw)?,
        None => 0,
    };
    let page_size = match page_size {
        Some(raw) => parse_index(raw)?,
        None => PageRequest::default().page_size,
    };
    if page_size > MAX_PAGE_SIZE {
        return Err(ApiError::bad_page_size(page_size));
    }

    let filter = SongFilter {
        song_name: song_name.map(str::to_owned),
        release_date: release_date.map(parse_release_date).transpose()?,
        group_name: group_name.map(str::to_owned),
    };

    let songs = store
        .list(&filter, PageRequest::new(page, page_size))
        .await?;

    Ok(ApiResponse::ok(songs))
}

#[get("/info/<song_id>/lyrcs?<verse_current>&<verse_count>")]
pub async fn get_lyrics(
    store: &State<SongStore>,
    song_id: &str,
    verse_current: Option<&str>,
    verse_count: Option<&str>,
) -> Result<Json<ApiResponse<Vec<String>>>, ApiError> {
    let id = parse_song_id(song_id)?;

    let start = match verse_current {
        Some(raw) => parse_index(raw)?,
        None => 0,
    };
    let count = match verse_count {
        Some(raw) => parse_index(raw)?,
        None => DEFAULT_VERSE_COUNT,
    };
    if count > MAX_VERSE_COUNT {
        return Err(ApiError::bad_verse_count(count));
    }

    // This endpoint reports every failure, a missing song included, as a
    // 400; the by-id routes are the ones that answer 404.
    let verses = store
        .verses(id, VerseWindow::new(start, count))
        .await
        .map_err(|err| match err {
            song_store::StoreError::NotFound(_) => ApiError::wrong_parameters(),
            other => ApiError::from(other),
        })?;

    Ok(ApiResponse::ok(verses))
}
