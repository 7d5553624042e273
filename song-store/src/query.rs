//! Parameterized statement assembly for song queries.
//!
//! Both builders are pure: they turn the optional fields of a patch or
//! filter into a statement string plus an ordered bind list, and nothing
//! else. Fields are examined in a fixed order so parameter positions stay
//! deterministic: name, text, group, link, date for updates; name, date,
//! group for filters.

use crate::models::{SongFilter, SongId, SongPatch};
use crate::repositories::PageRequest;
use chrono::NaiveDate;
use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::SqliteArguments;
use sqlx::Sqlite;

/// Column list shared by every song SELECT.
pub const SONG_COLUMNS: &str = "song_id, song_name, song_text, group_name, link, release_date";

/// A value destined for one `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Date(NaiveDate),
    Id(SongId),
    Int(i64),
}

/// Build an UPDATE statement covering exactly the fields set in `patch`.
///
/// Each set field contributes one `col = ?` assignment; the identifier is
/// appended last for the WHERE clause. With K set fields the result has K
/// assignments and K+1 binds, in examination order.
///
/// The caller must ensure the patch is non-empty; an empty patch would
/// yield an UPDATE without a SET list.
pub fn build_update_query(song_id: SongId, patch: &SongPatch) -> (String, Vec<BindValue>) {
    let mut assignments = Vec::new();
    let mut binds = Vec::new();

    if let Some(name) = &patch.song_name {
        assignments.push("song_name = ?");
        binds.push(BindValue::Text(name.clone()));
    }
    if let Some(text) = &patch.song_text {
        assignments.push("song_text = ?");
        binds.push(BindValue::Text(text.clone()));
    }
    if let Some(group) = &patch.group_name {
        assignments.push("group_name = ?");
        binds.push(BindValue::Text(group.clone()));
    }
    if let Some(link) = &patch.link {
        assignments.push("link = ?");
        binds.push(BindValue::Text(link.clone()));
    }
    if let Some(date) = patch.release_date {
        assignments.push("release_date = ?");
        binds.push(BindValue::Date(date));
    }

    binds.push(BindValue::Id(song_id));
    let sql = format!(
        "UPDATE songs SET {} WHERE song_id = ?",
        assignments.join(", ")
    );

    (sql, binds)
}

/// Build a filtered, windowed SELECT over the songs table.
///
/// Set filter fields contribute WHERE clauses joined by AND: `LIKE` with a
/// `%…%` pattern for the text fields, `=` for the release date. No set
/// fields means no WHERE clause. The page window is always appended as
/// `LIMIT ? OFFSET ?` binds.
pub fn build_filter_query(filter: &SongFilter, page: PageRequest) -> (String, Vec<BindValue>) {
    let mut conditions = Vec::new();
    let mut binds = Vec::new();

    if let Some(name) = &filter.song_name {
        conditions.push("song_name LIKE ?");
        binds.push(BindValue::Text(format!("%{name}%")));
    }
    if let Some(date) = filter.release_date {
        conditions.push("release_date = ?");
        binds.push(BindValue::Date(date));
    }
    if let Some(group) = &filter.group_name {
        conditions.push("group_name LIKE ?");
        binds.push(BindValue::Text(format!("%{group}%")));
    }

    let mut sql = format!("SELECT {SONG_COLUMNS} FROM songs");
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(" LIMIT ? OFFSET ?");
    binds.push(BindValue::Int(i64::from(page.limit())));
    binds.push(BindValue::Int(i64::from(page.offset())));

    (sql, binds)
}

/// Apply a bind list, in order, to a plain statement.
pub(crate) fn bind_query<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    binds: Vec<BindValue>,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    binds.into_iter().fold(query, |q, bind| match bind {
        BindValue::Text(value) => q.bind(value),
        BindValue::Date(value) => q.bind(value),
        BindValue::Id(value) => q.bind(value),
        BindValue::Int(value) => q.bind(value),
    })
}

/// Apply a bind list, in order, to a row-mapping statement.
pub(crate) fn bind_query_as<'q, O>(
    query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    binds: Vec<BindValue>,
) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
    binds.into_iter().fold(query, |q, bind| match bind {
        BindValue::Text(value) => q.bind(value),
        BindValue::Date(value) => q.bind(value),
        BindValue::Id(value) => q.bind(value),
        BindValue::Int(value) => q.bind(value),
    })
}
