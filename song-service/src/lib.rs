//! HTTP service for the song library.
//!
//! Wires the storage crate's repository into a Rocket application: request
//! handlers bind and validate input, call the store, and map results and
//! errors into the service's response envelope.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod trace;

use rocket::figment::Figment;
use rocket::{catchers, routes, Build, Rocket};
use song_store::repositories::SqliteSongRepository;
use sqlx::SqlitePool;

use crate::handlers::songs::{self, SongStore};

/// Assemble the Rocket application around a ready database pool.
pub fn build_rocket(figment: Figment, pool: SqlitePool) -> Rocket<Build> {
    let store: SongStore = Box::new(SqliteSongRepository::new(pool));

    rocket::custom(figment)
        .manage(store)
        .attach(trace::RequestLogger)
        .mount(
            "/api/v1",
            routes![
                songs::create_song,
                songs::remove_song,
                songs::update_song,
                songs::get_song,
                songs::list_songs,
                songs::get_lyrics,
            ],
        )
        .register(
            "/",
            catchers![
                handlers::bad_request,
                handlers::not_found,
                handlers::unprocessable,
                handlers::fallback,
            ],
        )
}
