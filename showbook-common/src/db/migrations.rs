//! Database schema migrations
//!
//! Versioned, idempotent migrations for databases created by earlier
//! releases. Fresh databases are created in the current shape by
//! [`crate::db::init`], so every migration first checks whether its change
//! is still needed.
//!
//! # Migration Guidelines
//!
//! 1. **Never modify existing migrations** - they must stay stable for users upgrading
//! 2. **Always add new migrations** - one function per schema change
//! 3. **Check before changing** - inspect `pragma_table_info` so reruns are no-ops

use crate::db::genres::split_legacy_genres;
use crate::db::Party;
use crate::Result;
use sqlx::{Row, SqlitePool};
use tracing::{info, warn};

/// Current schema version
///
/// **IMPORTANT:** Increment this when adding new migrations
pub const CURRENT_SCHEMA_VERSION: i32 = 3;

/// Get current schema version from database
///
/// Returns 0 if schema_version table doesn't exist or has no rows
pub async fn get_schema_version(pool: &SqlitePool) -> Result<i32> {
    if !table_exists(pool, "schema_version").await? {
        return Ok(0);
    }

    let version: Option<i32> =
        sqlx::query_scalar("SELECT version FROM schema_version ORDER BY version DESC LIMIT 1")
            .fetch_optional(pool)
            .await?;

    Ok(version.unwrap_or(0))
}

async fn set_schema_version(pool: &SqlitePool, version: i32) -> Result<()> {
    sqlx::query("INSERT INTO schema_version (version) VALUES (?)")
        .bind(version)
        .execute(pool)
        .await?;

    Ok(())
}

/// Run all pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let current_version = get_schema_version(pool).await?;

    if current_version == CURRENT_SCHEMA_VERSION {
        info!("Database schema is up to date (v{})", current_version);
        return Ok(());
    }

    if current_version > CURRENT_SCHEMA_VERSION {
        warn!(
            "Database schema version ({}) is newer than code version ({})",
            current_version, CURRENT_SCHEMA_VERSION
        );
        return Ok(());
    }

    info!(
        "Running database migrations: v{} -> v{}",
        current_version, CURRENT_SCHEMA_VERSION
    );

    if current_version < 1 {
        migrate_v1(pool).await?;
        set_schema_version(pool, 1).await?;
        info!("✓ Migration v1 completed");
    }

    if current_version < 2 {
        migrate_v2(pool).await?;
        set_schema_version(pool, 2).await?;
        info!("✓ Migration v2 completed");
    }

    if current_version < 3 {
        migrate_v3(pool).await?;
        set_schema_version(pool, 3).await?;
        info!("✓ Migration v3 completed");
    }

    info!("All migrations completed successfully");
    Ok(())
}

/// Migration v1: website_link and seeking_description columns
///
/// Venue's old `website` column is renamed so existing links survive.
async fn migrate_v1(pool: &SqlitePool) -> Result<()> {
    info!("Running migration v1: website_link / seeking_description columns");

    if has_column(pool, "Venue", "website").await?
        && !has_column(pool, "Venue", "website_link").await?
    {
        sqlx::query(r#"ALTER TABLE "Venue" RENAME COLUMN website TO website_link"#)
            .execute(pool)
            .await?;
        info!("  ✓ Renamed Venue.website to website_link");
    }

    for table in ["Venue", "Artist"] {
        for column in ["website_link", "seeking_description"] {
            if !has_column(pool, table, column).await? {
                sqlx::query(&format!(r#"ALTER TABLE "{}" ADD COLUMN {} TEXT"#, table, column))
                    .execute(pool)
                    .await?;
                info!("  ✓ Added {}.{}", table, column);
            }
        }
    }

    Ok(())
}

/// Migration v2: Show.start_time becomes NOT NULL
///
/// SQLite cannot alter a column constraint, so the table is rebuilt. Rows
/// without a start time or without both parents cannot satisfy the new
/// schema and are dropped.
async fn migrate_v2(pool: &SqlitePool) -> Result<()> {
    info!("Running migration v2: Show.start_time NOT NULL");

    let not_null: Option<i64> = sqlx::query_scalar(
        r#"SELECT "notnull" FROM pragma_table_info('Show') WHERE name = 'start_time'"#,
    )
    .fetch_optional(pool)
    .await?;

    if not_null != Some(0) {
        info!("  start_time already NOT NULL - skipping");
        return Ok(());
    }

    let mut tx = pool.begin().await?;

    sqlx::query(r#"DROP TABLE IF EXISTS "Show_v2""#)
        .execute(&mut *tx)
        .await?;
    sqlx::query(&format!(
        r#"CREATE TABLE "Show_v2" ({})"#,
        crate::db::init::SHOW_TABLE_COLUMNS
    ))
    .execute(&mut *tx)
    .await?;

    let copied = sqlx::query(
        r#"
        INSERT INTO "Show_v2" (id, start_time, venue_id, artist_id)
        SELECT id, start_time, venue_id, artist_id FROM "Show"
        WHERE start_time IS NOT NULL
          AND venue_id IN (SELECT id FROM "Venue")
          AND artist_id IN (SELECT id FROM "Artist")
        "#,
    )
    .execute(&mut *tx)
    .await?
    .rows_affected();

    let total: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "Show""#)
        .fetch_one(&mut *tx)
        .await?;

    sqlx::query(r#"DROP TABLE "Show""#).execute(&mut *tx).await?;
    sqlx::query(r#"ALTER TABLE "Show_v2" RENAME TO "Show""#)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    let dropped = total - copied as i64;
    if dropped > 0 {
        warn!("  Dropped {} show rows that violate the new constraints", dropped);
    }
    info!("  ✓ Rebuilt Show table ({} rows kept)", copied);
    Ok(())
}

/// Migration v3: comma-joined genres text moves to ordered genre tables
async fn migrate_v3(pool: &SqlitePool) -> Result<()> {
    info!("Running migration v3: genres text column -> genre tables");

    for owner in [Party::Venue, Party::Artist] {
        let table = owner.parent_table();
        if !has_column(pool, table, "genres").await? {
            info!("  {}.genres not present - skipping", table);
            continue;
        }

        let mut tx = pool.begin().await?;

        let rows = sqlx::query(&format!(
            r#"SELECT id, genres FROM "{}" WHERE genres IS NOT NULL"#,
            table
        ))
        .fetch_all(&mut *tx)
        .await?;

        let mut moved = 0usize;
        for row in &rows {
            let id: i64 = row.get("id");
            let text: String = row.get("genres");
            let genres = split_legacy_genres(&text);
            crate::db::genres::replace_genres(&mut tx, owner, id, &genres).await?;
            moved += genres.len();
        }

        sqlx::query(&format!(r#"ALTER TABLE "{}" DROP COLUMN genres"#, table))
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        info!("  ✓ Moved {} genre entries out of {}.genres", moved, table);
    }

    Ok(())
}

async fn table_exists(pool: &SqlitePool, table: &str) -> Result<bool> {
    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?)",
    )
    .bind(table)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// Check whether `table` currently has `column`
pub async fn has_column(pool: &SqlitePool, table: &str, column: &str) -> Result<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM pragma_table_info(?) WHERE name = ?")
            .bind(table)
            .bind(column)
            .fetch_one(pool)
            .await?;

    Ok(count > 0)
}
