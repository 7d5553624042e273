//! Request logging fairing.

use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Request, Response};
use tracing::info;

/// Emits one log line per handled request.
pub struct RequestLogger;

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "request logger",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        info!(
            method = %request.method(),
            uri = %request.uri(),
            status = response.status().code,
            "handled request"
        );
    }
}
