//! Artist queries and mutations

use crate::db::genres::{load_genres, replace_genres};
use crate::db::Party;
use crate::db::models::{Artist, ArtistInput, ArtistShow};
use crate::db::search_names;
use crate::{Error, Result};
use sqlx::{SqliteConnection, SqlitePool};

const ARTIST_COLUMNS: &str = r#"
    id,
    COALESCE(name, '') AS name,
    COALESCE(city, '') AS city,
    COALESCE(state, '') AS state,
    COALESCE(phone, '') AS phone,
    COALESCE(image_link, '') AS image_link,
    COALESCE(facebook_link, '') AS facebook_link,
    COALESCE(website_link, '') AS website_link,
    seeking_venue,
    seeking_description
"#;

/// Look up one artist with its genres; `None` if the id is unknown
pub async fn find_artist(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let artist: Option<Artist> =
        sqlx::query_as(&format!(r#"SELECT {} FROM "Artist" WHERE id = ?"#, ARTIST_COLUMNS))
            .bind(id)
            .fetch_optional(pool)
            .await?;

    match artist {
        Some(mut artist) => {
            artist.genres = load_genres(pool, Party::Artist, id).await?;
            Ok(Some(artist))
        }
        None => Ok(None),
    }
}

/// (id, name) of every artist in id order
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<(i64, String)>> {
    let rows = sqlx::query_as(r#"SELECT id, COALESCE(name, '') FROM "Artist" ORDER BY id ASC"#)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Artists whose name contains `term` (case-insensitive), ordered by name
pub async fn search_artists_by_name(pool: &SqlitePool, term: &str) -> Result<Vec<(i64, String)>> {
    search_names(pool, Party::Artist, term).await
}

/// An artist's shows with the venue of each, ordered by start time
pub async fn artist_shows(pool: &SqlitePool, artist_id: i64) -> Result<Vec<ArtistShow>> {
    let shows = sqlx::query_as(
        r#"
        SELECT v.id AS venue_id,
               COALESCE(v.name, '') AS venue_name,
               COALESCE(v.image_link, '') AS venue_image_link,
               s.start_time
        FROM "Show" s
        JOIN "Venue" v ON v.id = s.venue_id
        WHERE s.artist_id = ?
        ORDER BY s.start_time ASC, s.id ASC
        "#,
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    Ok(shows)
}

/// Insert an artist and its genres, returning the new id
pub async fn insert_artist(conn: &mut SqliteConnection, input: &ArtistInput) -> Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO "Artist" (
            name, city, state, phone,
            image_link, facebook_link, website_link,
            seeking_venue, seeking_description
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(&input.website_link)
    .bind(input.seeking_venue)
    .bind(&input.seeking_description)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    replace_genres(conn, Party::Artist, id, &input.genres).await?;
    Ok(id)
}

/// Overwrite every field of an existing artist
pub async fn update_artist(
    conn: &mut SqliteConnection,
    id: i64,
    input: &ArtistInput,
) -> Result<()> {
    let updated = sqlx::query(
        r#"
        UPDATE "Artist" SET
            name = ?, city = ?, state = ?, phone = ?,
            image_link = ?, facebook_link = ?, website_link = ?,
            seeking_venue = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(&input.website_link)
    .bind(input.seeking_venue)
    .bind(&input.seeking_description)
    .bind(id)
    .execute(&mut *conn)
    .await?
    .rows_affected();

    if updated == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }

    replace_genres(conn, Party::Artist, id, &input.genres).await
}

/// Delete an artist, returning its name; shows and genres cascade
pub async fn delete_artist(conn: &mut SqliteConnection, id: i64) -> Result<String> {
    let name: Option<String> =
        sqlx::query_scalar(r#"SELECT COALESCE(name, '') FROM "Artist" WHERE id = ?"#)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

    let name = name.ok_or_else(|| Error::NotFound(format!("artist {}", id)))?;

    sqlx::query(r#"DELETE FROM "Artist" WHERE id = ?"#)
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(name)
}
