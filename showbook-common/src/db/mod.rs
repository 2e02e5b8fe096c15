//! Database schema, models and queries

pub mod artists;
pub mod genres;
pub mod init;
pub mod migrations;
pub mod models;
pub mod shows;
pub mod venues;

pub use init::*;
pub use migrations::*;
pub use models::*;

use crate::Result;
use sqlx::SqlitePool;

/// One of the two parties a show pairs together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    Venue,
    Artist,
}

impl Party {
    pub(crate) fn parent_table(self) -> &'static str {
        match self {
            Party::Venue => "Venue",
            Party::Artist => "Artist",
        }
    }

    pub(crate) fn genre_table(self) -> &'static str {
        match self {
            Party::Venue => "venue_genres",
            Party::Artist => "artist_genres",
        }
    }

    /// Foreign key column naming this party in `Show` and the genre tables
    pub(crate) fn key_column(self) -> &'static str {
        match self {
            Party::Venue => "venue_id",
            Party::Artist => "artist_id",
        }
    }
}

/// Build a `LIKE ... ESCAPE '\'` pattern matching `term` as a substring
///
/// An empty term yields `%%`, which matches every row.
pub(crate) fn search_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// (id, name) of every `party` row whose name contains `term`, ignoring case
///
/// SQLite's `LIKE` only folds ASCII, so a term with other characters is
/// matched here on Unicode lowercase forms instead. Rows come back in
/// case-insensitive name order.
pub(crate) async fn search_names(
    pool: &SqlitePool,
    party: Party,
    term: &str,
) -> Result<Vec<(i64, String)>> {
    if term.is_ascii() {
        let rows = sqlx::query_as(&format!(
            r#"
            SELECT id, COALESCE(name, '') AS name
            FROM "{}"
            WHERE name LIKE ? ESCAPE '\'
            ORDER BY name COLLATE NOCASE ASC, id ASC
            "#,
            party.parent_table()
        ))
        .bind(search_pattern(term))
        .fetch_all(pool)
        .await?;
        return Ok(rows);
    }

    let rows: Vec<(i64, String)> = sqlx::query_as(&format!(
        r#"
        SELECT id, COALESCE(name, '') AS name
        FROM "{}"
        ORDER BY name COLLATE NOCASE ASC, id ASC
        "#,
        party.parent_table()
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .filter(|(_, name)| name_contains(name, term))
        .collect())
}

fn name_contains(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}
