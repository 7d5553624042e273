//! Integration tests for the HTTP surface.
//!
//! Each test boots the full Rocket application against a fresh in-memory
//! database and drives it through the local client, asserting on status
//! codes and the response envelope.

use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use serde_json::{json, Value};
use song_service::build_rocket;
use song_store::db::create_test_pool;

async fn client() -> Client {
    let pool = create_test_pool().await.expect("in-memory pool");
    let figment = rocket::Config::figment().merge(("log_level", "off"));
    Client::tracked(build_rocket(figment, pool))
        .await
        .expect("valid rocket instance")
}

/// POST a song and return the created entity from the envelope.
async fn create_song(client: &Client, body: Value) -> Value {
    let response = client
        .post("/api/v1/info")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Created);

    let envelope: Value = response.into_json().await.expect("json body");
    envelope["message"].clone()
}

fn error_type(envelope: &Value) -> &str {
    envelope["error"]["type"].as_str().expect("error type")
}

#[rocket::async_test]
async fn create_then_fetch_round_trips() {
    let client = client().await;

    let created = create_song(
        &client,
        json!({
            "group_name": "Ken Ashcorp",
            "song_name": "Absolute Territory",
            "song_text": "first verse\n\nsecond verse",
            "link": "https://example.com/watch",
            "release_date": "09.03.2013",
        }),
    )
    .await;

    let id = created["song_id"].as_str().expect("song_id");
    let response = client.get(format!("/api/v1/info/{id}")).dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let envelope: Value = response.into_json().await.unwrap();
    let song = &envelope["message"];
    assert_eq!(song["song_name"], "Absolute Territory");
    assert_eq!(song["group_name"], "Ken Ashcorp");
    assert_eq!(song["link"], "https://example.com/watch");
    assert_eq!(song["release_date"], "2013-03-09");
}

#[rocket::async_test]
async fn create_preserves_null_fields() {
    let client = client().await;

    let created = create_song(
        &client,
        json!({ "group_name": "Jamiroquai", "song_name": "Virtual Insanity" }),
    )
    .await;

    let id = created["song_id"].as_str().unwrap();
    let response = client.get(format!("/api/v1/info/{id}")).dispatch().await;
    let envelope: Value = response.into_json().await.unwrap();

    let song = &envelope["message"];
    assert!(song["song_text"].is_null());
    assert!(song["link"].is_null());
    assert!(song["release_date"].is_null());
}

#[rocket::async_test]
async fn create_without_required_fields_is_rejected() {
    let client = client().await;

    let response = client
        .post("/api/v1/info")
        .header(ContentType::JSON)
        .body(json!({ "song_name": "No Group" }).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    let envelope: Value = response.into_json().await.unwrap();
    assert_eq!(error_type(&envelope), "WrongParameters");
}

#[rocket::async_test]
async fn create_with_malformed_date_is_rejected() {
    let client = client().await;

    let response = client
        .post("/api/v1/info")
        .header(ContentType::JSON)
        .body(
            json!({
                "group_name": "G",
                "song_name": "S",
                "release_date": "2013-03-09",
            })
            .to_string(),
        )
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
}

#[rocket::async_test]
async fn fetch_with_bad_uuid_is_wrong_parameters() {
    let client = client().await;

    let response = client.get("/api/v1/info/not-a-uuid").dispatch().await;
    assert_eq!(response.status(), Status::BadRequest);

    let envelope: Value = response.into_json().await.unwrap();
    assert_eq!(error_type(&envelope), "WrongParameters");
}

#[rocket::async_test]
async fn fetch_missing_song_is_song_not_found() {
    let client = client().await;

    let response = client
        .get("/api/v1/info/00000000-0000-4000-8000-000000000000")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);

    let envelope: Value = response.into_json().await.unwrap();
    assert_eq!(error_type(&envelope), "SongNotFound");
}

#[rocket::async_test]
async fn partial_update_overwrites_only_submitted_fields() {
    let client = client().await;

    let created = create_song(
        &client,
        json!({
            "group_name": "Ken Ashcorp",
            "song_name": "Absolute Territory",
            "link": "https://example.com",
        }),
    )
    .await;
    let id = created["song_id"].as_str().unwrap();

    let response = client
        .put(format!("/api/v1/info/{id}"))
        .header(ContentType::JSON)
        .body(json!({ "song_name": "Renamed" }).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let envelope: Value = response.into_json().await.unwrap();
    assert_eq!(envelope["message"], "ok");

    let response = client.get(format!("/api/v1/info/{id}")).dispatch().await;
    let envelope: Value = response.into_json().await.unwrap();
    let song = &envelope["message"];
    assert_eq!(song["song_name"], "Renamed");
    assert_eq!(song["group_name"], "Ken Ashcorp");
    assert_eq!(song["link"], "https://example.com");
}

#[rocket::async_test]
async fn update_missing_song_is_song_not_found() {
    let client = client().await;

    let response = client
        .put("/api/v1/info/00000000-0000-4000-8000-000000000000")
        .header(ContentType::JSON)
        .body(json!({ "song_name": "x" }).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn delete_answers_not_found_the_second_time() {
    let client = client().await;

    let created = create_song(
        &client,
        json!({ "group_name": "G", "song_name": "S" }),
    )
    .await;
    let id = created["song_id"].as_str().unwrap();

    let response = client.delete(format!("/api/v1/info/{id}")).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let envelope: Value = response.into_json().await.unwrap();
    assert_eq!(envelope["message"], "ok");

    let response = client.delete(format!("/api/v1/info/{id}")).dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn list_filters_by_group_substring() {
    let client = client().await;

    create_song(
        &client,
        json!({ "group_name": "Ken Ashcorp", "song_name": "Absolute Territory" }),
    )
    .await;
    create_song(
        &client,
        json!({ "group_name": "Jamiroquai", "song_name": "Virtual Insanity" }),
    )
    .await;

    let response = client
        .get("/api/v1/info?group_name=Ash")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let envelope: Value = response.into_json().await.unwrap();
    let songs = envelope["message"].as_array().unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0]["group_name"], "Ken Ashcorp");
}

#[rocket::async_test]
async fn list_filters_by_release_date() {
    let client = client().await;

    create_song(
        &client,
        json!({
            "group_name": "G",
            "song_name": "A",
            "release_date": "09.03.2013",
        }),
    )
    .await;
    create_song(
        &client,
        json!({
            "group_name": "G",
            "song_name": "B",
            "release_date": "19.08.1996",
        }),
    )
    .await;

    let response = client
        .get("/api/v1/info?release_date=09.03.2013")
        .dispatch()
        .await;
    let envelope: Value = response.into_json().await.unwrap();
    let songs = envelope["message"].as_array().unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0]["song_name"], "A");
}

#[rocket::async_test]
async fn list_with_malformed_date_is_rejected() {
    let client = client().await;

    let response = client
        .get("/api/v1/info?release_date=2013-03-09")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
}

#[rocket::async_test]
async fn list_window_applies_size_and_raw_offset() {
    let client = client().await;

    for i in 0..5 {
        create_song(
            &client,
            json!({ "group_name": "G", "song_name": format!("Song {i}") }),
        )
        .await;
    }

    let response = client
        .get("/api/v1/info?page_current=3&page_size=2")
        .dispatch()
        .await;
    let envelope: Value = response.into_json().await.unwrap();
    assert_eq!(envelope["message"].as_array().unwrap().len(), 2);

    let response = client
        .get("/api/v1/info?page_current=4&page_size=2")
        .dispatch()
        .await;
    let envelope: Value = response.into_json().await.unwrap();
    assert_eq!(envelope["message"].as_array().unwrap().len(), 1);
}

#[rocket::async_test]
async fn page_size_above_maximum_is_rejected() {
    let client = client().await;

    let response = client
        .get("/api/v1/info?page_size=51")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
    let envelope: Value = response.into_json().await.unwrap();
    assert_eq!(error_type(&envelope), "BadPageSize");

    let response = client
        .get("/api/v1/info?page_size=50")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
}

#[rocket::async_test]
async fn lyrics_window_returns_requested_verses() {
    let client = client().await;

    let created = create_song(
        &client,
        json!({
            "group_name": "G",
            "song_name": "S",
            "song_text": "A\n\nB\n\nC",
        }),
    )
    .await;
    let id = created["song_id"].as_str().unwrap();

    let response = client
        .get(format!("/api/v1/info/{id}/lyrcs?verse_current=1&verse_count=1"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let envelope: Value = response.into_json().await.unwrap();
    assert_eq!(envelope["message"], json!(["B"]));
}

#[rocket::async_test]
async fn lyrics_window_past_the_end_is_empty() {
    let client = client().await;

    let created = create_song(
        &client,
        json!({
            "group_name": "G",
            "song_name": "S",
            "song_text": "A\n\nB",
        }),
    )
    .await;
    let id = created["song_id"].as_str().unwrap();

    let response = client
        .get(format!("/api/v1/info/{id}/lyrcs?verse_current=10"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let envelope: Value = response.into_json().await.unwrap();
    assert_eq!(envelope["message"], json!([]));
}

#[rocket::async_test]
async fn verse_count_above_maximum_is_rejected() {
    let client = client().await;

    let created = create_song(
        &client,
        json!({ "group_name": "G", "song_name": "S", "song_text": "A" }),
    )
    .await;
    let id = created["song_id"].as_str().unwrap();

    let response = client
        .get(format!("/api/v1/info/{id}/lyrcs?verse_count=51"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
    let envelope: Value = response.into_json().await.unwrap();
    assert_eq!(error_type(&envelope), "BadVerseCount");

    let response = client
        .get(format!("/api/v1/info/{id}/lyrcs?verse_count=50"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
}

#[rocket::async_test]
async fn lyrics_of_missing_song_is_bad_request() {
    let client = client().await;

    let response = client
        .get("/api/v1/info/00000000-0000-4000-8000-000000000000/lyrcs")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    let envelope: Value = response.into_json().await.unwrap();
    assert_eq!(error_type(&envelope), "WrongParameters");
}

#[rocket::async_test]
async fn unknown_route_gets_the_error_envelope() {
    let client = client().await;

    let response = client.get("/api/v1/nope").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);

    let envelope: Value = response.into_json().await.unwrap();
    assert_eq!(error_type(&envelope), "NotFound");
}
