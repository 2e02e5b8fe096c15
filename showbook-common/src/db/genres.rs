//! Ordered genre lists for venues and artists
//!
//! Genres live in `venue_genres` / `artist_genres`, one row per entry with a
//! `position` column, so the list reads back exactly as it was submitted.

use crate::db::Party;
use crate::Result;
use sqlx::{SqliteConnection, SqlitePool};

/// Load the genre list of one venue or artist in submitted order
pub async fn load_genres(pool: &SqlitePool, party: Party, id: i64) -> Result<Vec<String>> {
    let genres = sqlx::query_scalar(&format!(
        "SELECT genre FROM {} WHERE {} = ? ORDER BY position ASC",
        party.genre_table(),
        party.key_column()
    ))
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(genres)
}

/// Replace the genre list of one venue or artist
///
/// Runs on the caller's connection so it joins the caller's transaction.
pub async fn replace_genres(
    conn: &mut SqliteConnection,
    party: Party,
    id: i64,
    genres: &[String],
) -> Result<()> {
    sqlx::query(&format!(
        "DELETE FROM {} WHERE {} = ?",
        party.genre_table(),
        party.key_column()
    ))
    .bind(id)
    .execute(&mut *conn)
    .await?;

    let insert = format!(
        "INSERT INTO {} ({}, position, genre) VALUES (?, ?, ?)",
        party.genre_table(),
        party.key_column()
    );
    for (position, genre) in genres.iter().enumerate() {
        sqlx::query(&insert)
            .bind(id)
            .bind(position as i64)
            .bind(genre)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}

/// Split a legacy comma-joined genres value into its entries
pub fn split_legacy_genres(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_legacy_genres() {
        assert_eq!(split_legacy_genres("Jazz,Reggae"), vec!["Jazz", "Reggae"]);
        assert_eq!(
            split_legacy_genres("Rock n Roll, Hip-Hop"),
            vec!["Rock n Roll", "Hip-Hop"]
        );
    }

    #[test]
    fn test_split_legacy_genres_skips_empty_entries() {
        assert!(split_legacy_genres("").is_empty());
        assert_eq!(split_legacy_genres(",Folk,,"), vec!["Folk"]);
    }
}
