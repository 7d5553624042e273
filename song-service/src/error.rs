//! Response envelope and error mapping.
//!
//! Every response body is the same envelope: a `message` payload on
//! success, an `error` object with a stable `type` string and a
//! human-readable `detail` on failure. Store failures that are not a
//! simple not-found case are logged and surfaced as the generic
//! wrong-parameters response so backend detail never reaches the client.

use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use serde::Serialize;
use song_store::lyrics::MAX_VERSE_COUNT;
use song_store::models::SongId;
use song_store::repositories::MAX_PAGE_SIZE;
use song_store::StoreError;
use tracing::warn;

/// Wire envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a success payload.
    pub fn ok(message: T) -> Json<Self> {
        Json(Self {
            message: Some(message),
            error: None,
        })
    }
}

/// Machine-readable error payload carried inside the envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Stable identifier of the error kind
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable detail
    pub detail: String,
}

/// An error response: a status code plus the standard envelope.
#[derive(Debug)]
pub struct ApiError {
    status: Status,
    body: ErrorBody,
}

impl ApiError {
    fn new(status: Status, kind: &str, detail: String) -> Self {
        Self {
            status,
            body: ErrorBody {
                kind: kind.to_string(),
                detail,
            },
        }
    }

    pub fn song_not_found(id: SongId) -> Self {
        Self::new(
            Status::NotFound,
            "SongNotFound",
            format!("Song with id {id} is not found."),
        )
    }

    pub fn wrong_parameters() -> Self {
        Self::new(
            Status::BadRequest,
            "WrongParameters",
            "Wrong parameters for endpoint. Consider reading documentation.".to_string(),
        )
    }

    pub fn bad_page_size(supplied: u32) -> Self {
        Self::new(
            Status::BadRequest,
            "BadPageSize",
            format!("Page size more than {MAX_PAGE_SIZE} is not allowed. Yours is {supplied}."),
        )
    }

    pub fn bad_verse_count(supplied: u32) -> Self {
        Self::new(
            Status::BadRequest,
            "BadVerseCount",
            format!("Verse count more than {MAX_VERSE_COUNT} is not allowed. Yours is {supplied}."),
        )
    }

    /// Envelope for requests that matched no route.
    pub fn route_not_found() -> Self {
        Self::new(
            Status::NotFound,
            "NotFound",
            "Resource not found.".to_string(),
        )
    }

    /// Envelope for framework-level failures; keeps the caught status but
    /// never exposes internal detail.
    pub fn for_status(status: Status) -> Self {
        Self::new(
            status,
            "WrongParameters",
            "Request could not be processed.".to_string(),
        )
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::song_not_found(id),
            StoreError::EmptyPatch => ApiError::wrong_parameters(),
            other => {
                warn!(error = %other, "store operation failed");
                ApiError::wrong_parameters()
            }
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let body = Json(ApiResponse::<()> {
            message: None,
            error: Some(self.body),
        });
        (self.status, body).respond_to(request)
    }
}
