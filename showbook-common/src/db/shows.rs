//! Show queries and mutations

use crate::db::Party;
use crate::db::models::{Show, ShowInput, ShowListing};
use crate::Result;
use sqlx::{SqliteConnection, SqlitePool};

/// Every show with venue and artist denormalised, ordered by start time
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let shows = sqlx::query_as(
        r#"
        SELECT s.id,
               s.start_time,
               v.id AS venue_id,
               COALESCE(v.name, '') AS venue_name,
               a.id AS artist_id,
               COALESCE(a.name, '') AS artist_name,
               COALESCE(a.image_link, '') AS artist_image_link
        FROM "Show" s
        JOIN "Venue" v ON v.id = s.venue_id
        JOIN "Artist" a ON a.id = s.artist_id
        ORDER BY s.start_time ASC, s.id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(shows)
}

/// Look up one show; `None` if the id is unknown
pub async fn find_show(pool: &SqlitePool, id: i64) -> Result<Option<Show>> {
    let show = sqlx::query_as(
        r#"SELECT id, start_time, venue_id, artist_id FROM "Show" WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(show)
}

/// Stored start times of one venue's or artist's shows, ascending
pub async fn show_start_times(
    pool: &SqlitePool,
    party: Party,
    id: i64,
) -> Result<Vec<String>> {
    let times = sqlx::query_scalar(&format!(
        r#"SELECT start_time FROM "Show" WHERE {} = ? ORDER BY start_time ASC, id ASC"#,
        party.key_column()
    ))
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(times)
}

/// Insert a show, returning the new id
///
/// Unknown venue or artist ids fail the foreign key check.
pub async fn insert_show(conn: &mut SqliteConnection, input: &ShowInput) -> Result<i64> {
    let id = sqlx::query(
        r#"INSERT INTO "Show" (start_time, venue_id, artist_id) VALUES (?, ?, ?)"#,
    )
    .bind(&input.start_time)
    .bind(input.venue_id)
    .bind(input.artist_id)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Total number of stored shows
pub async fn count_shows(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "Show""#)
        .fetch_one(pool)
        .await?;

    Ok(count)
}
