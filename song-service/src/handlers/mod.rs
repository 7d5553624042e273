//! Request handlers and framework-level catchers.

pub mod songs;

use crate::error::ApiError;
use rocket::http::Status;
use rocket::{catch, Request};

#[catch(400)]
pub fn bad_request() -> ApiError {
    ApiError::wrong_parameters()
}

#[catch(422)]
pub fn unprocessable() -> ApiError {
    ApiError::wrong_parameters()
}

#[catch(404)]
pub fn not_found() -> ApiError {
    ApiError::route_not_found()
}

#[catch(default)]
pub fn fallback(status: Status, _request: &Request) -> ApiError {
    ApiError::for_status(status)
}
