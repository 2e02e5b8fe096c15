//! Tests for the data access layer and directory views against a real
//! SQLite database

use chrono::NaiveDateTime;
use showbook_common::db::init::init_database;
use showbook_common::db::models::{ArtistInput, ShowInput, VenueInput};
use showbook_common::db::{artists, shows, venues};
use showbook_common::directory;
use showbook_common::time::parse_start_time;
use showbook_common::Error;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test helper: fresh database in a temp directory
async fn setup_test_db() -> (TempDir, SqlitePool) {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("showbook.db")).await.unwrap();
    (dir, pool)
}

fn venue(name: &str, city: &str, state: &str) -> VenueInput {
    VenueInput {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: "123-123-1234".to_string(),
        genres: vec!["Jazz".to_string()],
        ..VenueInput::default()
    }
}

fn artist(name: &str) -> ArtistInput {
    ArtistInput {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        genres: vec!["Rock n Roll".to_string()],
        ..ArtistInput::default()
    }
}

async fn add_venue(pool: &SqlitePool, input: VenueInput) -> i64 {
    let mut tx = pool.begin().await.unwrap();
    let id = venues::insert_venue(&mut tx, &input).await.unwrap();
    tx.commit().await.unwrap();
    id
}

async fn add_artist(pool: &SqlitePool, input: ArtistInput) -> i64 {
    let mut tx = pool.begin().await.unwrap();
    let id = artists::insert_artist(&mut tx, &input).await.unwrap();
    tx.commit().await.unwrap();
    id
}

async fn add_show(pool: &SqlitePool, venue_id: i64, artist_id: i64, start_time: &str) -> i64 {
    let mut tx = pool.begin().await.unwrap();
    let id = shows::insert_show(
        &mut tx,
        &ShowInput {
            start_time: start_time.to_string(),
            venue_id,
            artist_id,
        },
    )
    .await
    .unwrap();
    tx.commit().await.unwrap();
    id
}

fn fixed_now() -> NaiveDateTime {
    parse_start_time("2025-01-01 00:00:00").unwrap()
}

/// Three venues, three artists, mixed past and upcoming shows
async fn seed(pool: &SqlitePool) -> (i64, i64, i64) {
    let hop = add_venue(pool, venue("The Musical Hop", "San Francisco", "CA")).await;
    add_venue(pool, venue("The Dueling Pianos Bar", "New York", "NY")).await;
    let park = add_venue(
        pool,
        venue("Park Square Live Music & Coffee", "San Francisco", "CA"),
    )
    .await;

    let guns = add_artist(pool, artist("Guns N Petals")).await;
    let matt = add_artist(pool, artist("Matt Quevedo")).await;
    let sax = add_artist(pool, artist("The Wild Sax Band")).await;

    // Inserted out of order on purpose
    add_show(pool, park, sax, "2035-04-15 20:00:00").await;
    add_show(pool, hop, guns, "2019-05-21 21:30:00").await;
    add_show(pool, park, matt, "2019-06-15 23:00:00").await;
    add_show(pool, park, sax, "2035-04-01 20:00:00").await;
    add_show(pool, park, sax, "2035-04-08 20:00:00").await;

    (hop, park, sax)
}

#[tokio::test]
async fn test_search_hop_finds_musical_hop() {
    let (_dir, pool) = setup_test_db().await;
    seed(&pool).await;

    let results = directory::search_venues(&pool, "Hop", fixed_now()).await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].name, "The Musical Hop");
}

#[tokio::test]
async fn test_search_music_finds_two_venues_case_insensitively() {
    let (_dir, pool) = setup_test_db().await;
    seed(&pool).await;

    let results = directory::search_venues(&pool, "music", fixed_now()).await.unwrap();
    let names: Vec<&str> = results.data.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(results.count, 2);
    assert_eq!(names, vec!["Park Square Live Music & Coffee", "The Musical Hop"]);
}

#[tokio::test]
async fn test_search_reports_upcoming_counts_only() {
    let (_dir, pool) = setup_test_db().await;
    seed(&pool).await;

    let results = directory::search_venues(&pool, "Park", fixed_now()).await.unwrap();
    assert_eq!(results.data[0].num_upcoming_shows, 3);

    let results = directory::search_artists(&pool, "band", fixed_now()).await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].name, "The Wild Sax Band");
    assert_eq!(results.data[0].num_upcoming_shows, 3);
}

#[tokio::test]
async fn test_empty_search_matches_every_row() {
    let (_dir, pool) = setup_test_db().await;
    seed(&pool).await;

    let results = directory::search_venues(&pool, "", fixed_now()).await.unwrap();
    assert_eq!(results.count, 3);
    assert_eq!(results.data.len(), 3);

    let results = directory::search_artists(&pool, "", fixed_now()).await.unwrap();
    assert_eq!(results.count, 3);
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let (_dir, pool) = setup_test_db().await;
    seed(&pool).await;

    let results = directory::search_venues(&pool, "%", fixed_now()).await.unwrap();
    assert_eq!(results.count, 0);
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let (_dir, pool) = setup_test_db().await;
    add_venue(&pool, venue("Café Élysée", "Paris", "NY")).await;
    add_artist(&pool, artist("Björk Ensemble")).await;

    let lower = directory::search_venues(&pool, "élysée", fixed_now()).await.unwrap();
    assert_eq!(lower.count, 1);
    assert_eq!(lower.data[0].name, "Café Élysée");

    let upper = directory::search_venues(&pool, "CAFÉ", fixed_now()).await.unwrap();
    assert_eq!(upper.count, 1);

    let results = directory::search_artists(&pool, "BJÖRK", fixed_now()).await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].name, "Björk Ensemble");
}

#[tokio::test]
async fn test_search_results_ignore_case_when_ordering() {
    let (_dir, pool) = setup_test_db().await;
    add_venue(&pool, venue("the Hop", "San Francisco", "CA")).await;
    add_venue(&pool, venue("Zydeco Hall", "San Francisco", "CA")).await;
    add_venue(&pool, venue("Avalon", "San Francisco", "CA")).await;

    let results = directory::search_venues(&pool, "", fixed_now()).await.unwrap();
    let names: Vec<&str> = results.data.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Avalon", "the Hop", "Zydeco Hall"]);
}

#[tokio::test]
async fn test_venue_areas_grouped_and_sorted() {
    let (_dir, pool) = setup_test_db().await;
    let (hop, park, _) = seed(&pool).await;

    let areas = directory::venue_areas(&pool).await.unwrap();
    let keys: Vec<(&str, &str)> = areas
        .iter()
        .map(|a| (a.state.as_str(), a.city.as_str()))
        .collect();
    assert_eq!(keys, vec![("CA", "San Francisco"), ("NY", "New York")]);

    let sf = &areas[0];
    let ids: Vec<i64> = sf.venues.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![hop, park]);

    // Index counts every show, past ones included
    assert_eq!(sf.venues[0].num_upcoming_shows, 1);
    assert_eq!(sf.venues[1].num_upcoming_shows, 4);
}

#[tokio::test]
async fn test_venue_areas_empty() {
    let (_dir, pool) = setup_test_db().await;
    assert!(directory::venue_areas(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_venue_shows_ordered_by_start_time() {
    let (_dir, pool) = setup_test_db().await;
    let (_, park, _) = seed(&pool).await;

    let times: Vec<String> = venues::venue_shows(&pool, park)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.start_time)
        .collect();
    let mut sorted = times.clone();
    sorted.sort();
    assert_eq!(times, sorted);
    assert_eq!(times.len(), 4);
}

#[tokio::test]
async fn test_venue_detail_partitions_shows() {
    let (_dir, pool) = setup_test_db().await;
    let (_, park, sax) = seed(&pool).await;

    let detail = directory::venue_detail(&pool, park, fixed_now())
        .await
        .unwrap()
        .expect("venue exists");

    assert_eq!(detail.past_shows_count, 1);
    assert_eq!(detail.upcoming_shows_count, 3);
    assert_eq!(detail.past_shows[0].artist_name, "Matt Quevedo");
    assert!(detail.upcoming_shows.iter().all(|s| s.artist_id == sax));
    assert_eq!(detail.upcoming_shows[0].start_time, "2035-04-01 20:00:00");
}

#[tokio::test]
async fn test_artist_detail_denormalizes_venue() {
    let (_dir, pool) = setup_test_db().await;
    let (_, park, sax) = seed(&pool).await;

    let detail = directory::artist_detail(&pool, sax, fixed_now())
        .await
        .unwrap()
        .expect("artist exists");

    assert_eq!(detail.past_shows_count, 0);
    assert_eq!(detail.upcoming_shows_count, 3);
    assert!(detail.upcoming_shows.iter().all(|s| s.venue_id == park));
    assert_eq!(
        detail.upcoming_shows[0].venue_name,
        "Park Square Live Music & Coffee"
    );
}

#[tokio::test]
async fn test_detail_of_missing_entity_is_none() {
    let (_dir, pool) = setup_test_db().await;
    assert!(directory::venue_detail(&pool, 999, fixed_now()).await.unwrap().is_none());
    assert!(directory::artist_detail(&pool, 999, fixed_now()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_seeking_description_hidden_unless_seeking() {
    let (_dir, pool) = setup_test_db().await;

    let mut hidden = venue("Quiet Room", "Austin", "TX");
    hidden.seeking_description = Some("Looking for bands".to_string());
    let hidden_id = add_venue(&pool, hidden).await;

    let mut shown = venue("Loud Room", "Austin", "TX");
    shown.seeking_talent = true;
    shown.seeking_description = Some("Looking for bands".to_string());
    let shown_id = add_venue(&pool, shown).await;

    let detail = directory::venue_detail(&pool, hidden_id, fixed_now())
        .await
        .unwrap()
        .unwrap();
    assert!(detail.seeking_description.is_none());

    let detail = directory::venue_detail(&pool, shown_id, fixed_now())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.seeking_description.as_deref(), Some("Looking for bands"));
}

#[tokio::test]
async fn test_genres_round_trip_in_order() {
    let (_dir, pool) = setup_test_db().await;

    let mut input = venue("Genre Hall", "Boise", "ID");
    input.genres = vec!["Jazz".to_string(), "Reggae".to_string()];
    let id = add_venue(&pool, input).await;

    let stored = venues::find_venue(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.genres, vec!["Jazz", "Reggae"]);

    let mut tx = pool.begin().await.unwrap();
    let mut edit = venue("Genre Hall", "Boise", "ID");
    edit.genres = vec!["Reggae".to_string(), "Folk".to_string(), "Jazz".to_string()];
    venues::update_venue(&mut tx, id, &edit).await.unwrap();
    tx.commit().await.unwrap();

    let stored = venues::find_venue(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.genres, vec!["Reggae", "Folk", "Jazz"]);
}

#[tokio::test]
async fn test_delete_venue_cascades_to_shows() {
    let (_dir, pool) = setup_test_db().await;
    let (_, park, _) = seed(&pool).await;
    assert_eq!(shows::count_shows(&pool).await.unwrap(), 5);

    let mut tx = pool.begin().await.unwrap();
    let name = venues::delete_venue(&mut tx, park).await.unwrap();
    tx.commit().await.unwrap();

    assert_eq!(name, "Park Square Live Music & Coffee");
    assert_eq!(shows::count_shows(&pool).await.unwrap(), 1);
    assert!(venues::find_venue(&pool, park).await.unwrap().is_none());

    let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venue_genres WHERE venue_id = ?")
        .bind(park)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orphans, 0);
}

#[tokio::test]
async fn test_delete_artist_cascades_to_shows() {
    let (_dir, pool) = setup_test_db().await;
    let (_, _, sax) = seed(&pool).await;

    let mut tx = pool.begin().await.unwrap();
    artists::delete_artist(&mut tx, sax).await.unwrap();
    tx.commit().await.unwrap();

    assert_eq!(shows::count_shows(&pool).await.unwrap(), 2);
}

#[tokio::test]
async fn test_delete_missing_venue_is_not_found() {
    let (_dir, pool) = setup_test_db().await;

    let mut tx = pool.begin().await.unwrap();
    let err = venues::delete_venue(&mut tx, 42).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn test_update_missing_artist_is_not_found() {
    let (_dir, pool) = setup_test_db().await;

    let mut tx = pool.begin().await.unwrap();
    let err = artists::update_artist(&mut tx, 42, &artist("Nobody"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn test_show_with_unknown_venue_rejected() {
    let (_dir, pool) = setup_test_db().await;
    let guns = add_artist(&pool, artist("Guns N Petals")).await;

    let mut tx = pool.begin().await.unwrap();
    let result = shows::insert_show(
        &mut tx,
        &ShowInput {
            start_time: "2035-01-01 20:00:00".to_string(),
            venue_id: 999,
            artist_id: guns,
        },
    )
    .await;
    assert!(matches!(result, Err(Error::Database(_))));
}

#[tokio::test]
async fn test_rolled_back_insert_leaves_nothing() {
    let (_dir, pool) = setup_test_db().await;

    let mut tx = pool.begin().await.unwrap();
    venues::insert_venue(&mut tx, &venue("Ghost Venue", "Nowhere", "NV"))
        .await
        .unwrap();
    tx.rollback().await.unwrap();

    let results = directory::search_venues(&pool, "", fixed_now()).await.unwrap();
    assert_eq!(results.count, 0);
}

#[tokio::test]
async fn test_show_listing_ordered_and_denormalized() {
    let (_dir, pool) = setup_test_db().await;
    seed(&pool).await;

    let listing = shows::list_shows(&pool).await.unwrap();
    assert_eq!(listing.len(), 5);
    assert_eq!(listing[0].venue_name, "The Musical Hop");
    assert_eq!(listing[0].artist_name, "Guns N Petals");
    assert!(listing.windows(2).all(|w| w[0].start_time <= w[1].start_time));
}

#[tokio::test]
async fn test_artist_entries_in_id_order() {
    let (_dir, pool) = setup_test_db().await;
    seed(&pool).await;

    let names: Vec<String> = directory::artist_entries(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]);
}

#[tokio::test]
async fn test_find_show_by_id() {
    let (_dir, pool) = setup_test_db().await;
    let hop = add_venue(&pool, venue("The Musical Hop", "San Francisco", "CA")).await;
    let guns = add_artist(&pool, artist("Guns N Petals")).await;
    let id = add_show(&pool, hop, guns, "2019-05-21 21:30:00").await;

    let show = shows::find_show(&pool, id).await.unwrap().expect("show exists");
    assert_eq!(show.venue_id, hop);
    assert_eq!(show.artist_id, guns);
    assert_eq!(show.start_time, "2019-05-21 21:30:00");

    assert!(shows::find_show(&pool, id + 1).await.unwrap().is_none());
}
