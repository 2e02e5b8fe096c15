//! Venue queries and mutations
//!
//! Reads take the pool. Writes take a connection so the handler controls
//! the transaction they run in.

use crate::db::genres::{load_genres, replace_genres};
use crate::db::Party;
use crate::db::models::{Venue, VenueIndexRow, VenueInput, VenueShow};
use crate::db::search_names;
use crate::{Error, Result};
use sqlx::{SqliteConnection, SqlitePool};

const VENUE_COLUMNS: &str = r#"
    id,
    COALESCE(name, '') AS name,
    COALESCE(city, '') AS city,
    COALESCE(state, '') AS state,
    COALESCE(address, '') AS address,
    COALESCE(phone, '') AS phone,
    COALESCE(image_link, '') AS image_link,
    COALESCE(facebook_link, '') AS facebook_link,
    COALESCE(website_link, '') AS website_link,
    seeking_talent,
    seeking_description
"#;

/// Look up one venue with its genres; `None` if the id is unknown
pub async fn find_venue(pool: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let venue: Option<Venue> =
        sqlx::query_as(&format!(r#"SELECT {} FROM "Venue" WHERE id = ?"#, VENUE_COLUMNS))
            .bind(id)
            .fetch_optional(pool)
            .await?;

    match venue {
        Some(mut venue) => {
            venue.genres = load_genres(pool, Party::Venue, id).await?;
            Ok(Some(venue))
        }
        None => Ok(None),
    }
}

/// Every venue with its total number of shows, in id order
pub async fn venue_index_rows(pool: &SqlitePool) -> Result<Vec<VenueIndexRow>> {
    let rows = sqlx::query_as(
        r#"
        SELECT v.id,
               COALESCE(v.name, '') AS name,
               COALESCE(v.city, '') AS city,
               COALESCE(v.state, '') AS state,
               COUNT(s.id) AS show_count
        FROM "Venue" v
        LEFT JOIN "Show" s ON s.venue_id = v.id
        GROUP BY v.id
        ORDER BY v.id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Venues whose name contains `term` (case-insensitive), ordered by name
pub async fn search_venues_by_name(pool: &SqlitePool, term: &str) -> Result<Vec<(i64, String)>> {
    search_names(pool, Party::Venue, term).await
}

/// A venue's shows with the artist of each, ordered by start time
pub async fn venue_shows(pool: &SqlitePool, venue_id: i64) -> Result<Vec<VenueShow>> {
    let shows = sqlx::query_as(
        r#"
        SELECT a.id AS artist_id,
               COALESCE(a.name, '') AS artist_name,
               COALESCE(a.image_link, '') AS artist_image_link,
               s.start_time
        FROM "Show" s
        JOIN "Artist" a ON a.id = s.artist_id
        WHERE s.venue_id = ?
        ORDER BY s.start_time ASC, s.id ASC
        "#,
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    Ok(shows)
}

/// Insert a venue and its genres, returning the new id
pub async fn insert_venue(conn: &mut SqliteConnection, input: &VenueInput) -> Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO "Venue" (
            name, city, state, address, phone,
            image_link, facebook_link, website_link,
            seeking_talent, seeking_description
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(&input.website_link)
    .bind(input.seeking_talent)
    .bind(&input.seeking_description)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    replace_genres(conn, Party::Venue, id, &input.genres).await?;
    Ok(id)
}

/// Overwrite every field of an existing venue
pub async fn update_venue(conn: &mut SqliteConnection, id: i64, input: &VenueInput) -> Result<()> {
    let updated = sqlx::query(
        r#"
        UPDATE "Venue" SET
            name = ?, city = ?, state = ?, address = ?, phone = ?,
            image_link = ?, facebook_link = ?, website_link = ?,
            seeking_talent = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(&input.website_link)
    .bind(input.seeking_talent)
    .bind(&input.seeking_description)
    .bind(id)
    .execute(&mut *conn)
    .await?
    .rows_affected();

    if updated == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    replace_genres(conn, Party::Venue, id, &input.genres).await
}

/// Delete a venue, returning its name
///
/// Its shows and genre entries go with it through `ON DELETE CASCADE`.
pub async fn delete_venue(conn: &mut SqliteConnection, id: i64) -> Result<String> {
    let name: Option<String> =
        sqlx::query_scalar(r#"SELECT COALESCE(name, '') FROM "Venue" WHERE id = ?"#)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

    let name = name.ok_or_else(|| Error::NotFound(format!("venue {}", id)))?;

    sqlx::query(r#"DELETE FROM "Venue" WHERE id = ?"#)
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(name)
}
