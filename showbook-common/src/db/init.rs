//! Database initialization
//!
//! Opens (or creates) the SQLite database, creates the current schema for
//! tables that do not exist yet, then runs the versioned migrations that
//! bring older databases up to date.

use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // foreign_keys is per connection: set on the options, not once
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_millis(5000));

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    create_tables(&pool).await?;

    // Bring databases created by older versions up to date
    crate::db::migrations::run_migrations(&pool).await?;

    // Indexes last: migration v2 rebuilds the Show table
    create_indexes(&pool).await?;

    Ok(pool)
}

/// Create every table in its current shape (idempotent)
pub async fn create_tables(pool: &SqlitePool) -> Result<()> {
    create_schema_version_table(pool).await?;
    create_venue_table(pool).await?;
    create_artist_table(pool).await?;
    create_show_table(pool).await?;
    create_genre_tables(pool).await?;
    Ok(())
}

async fn create_schema_version_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_venue_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS "Venue" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            city TEXT,
            state TEXT,
            address TEXT,
            phone TEXT,
            image_link TEXT,
            facebook_link TEXT,
            website_link TEXT,
            seeking_talent INTEGER NOT NULL DEFAULT 0,
            seeking_description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_artist_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS "Artist" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            city TEXT,
            state TEXT,
            phone TEXT,
            image_link TEXT,
            facebook_link TEXT,
            website_link TEXT,
            seeking_venue INTEGER NOT NULL DEFAULT 0,
            seeking_description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Show table DDL, shared with the migration that rebuilds it
pub(crate) const SHOW_TABLE_COLUMNS: &str = r#"
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    start_time TEXT NOT NULL,
    venue_id INTEGER NOT NULL REFERENCES "Venue"(id) ON DELETE CASCADE,
    artist_id INTEGER NOT NULL REFERENCES "Artist"(id) ON DELETE CASCADE
"#;

async fn create_show_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(&format!(
        r#"CREATE TABLE IF NOT EXISTS "Show" ({})"#,
        SHOW_TABLE_COLUMNS
    ))
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_genre_tables(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venue_genres (
            venue_id INTEGER NOT NULL REFERENCES "Venue"(id) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            genre TEXT NOT NULL,
            PRIMARY KEY (venue_id, position)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artist_genres (
            artist_id INTEGER NOT NULL REFERENCES "Artist"(id) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            genre TEXT NOT NULL,
            PRIMARY KEY (artist_id, position)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<()> {
    sqlx::query(r#"CREATE INDEX IF NOT EXISTS idx_show_venue ON "Show"(venue_id, start_time)"#)
        .execute(pool)
        .await?;
    sqlx::query(r#"CREATE INDEX IF NOT EXISTS idx_show_artist ON "Show"(artist_id, start_time)"#)
        .execute(pool)
        .await?;
    sqlx::query(r#"CREATE INDEX IF NOT EXISTS idx_show_start_time ON "Show"(start_time)"#)
        .execute(pool)
        .await?;

    Ok(())
}
