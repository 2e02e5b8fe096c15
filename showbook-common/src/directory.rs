//! Directory views
//!
//! Builds the payloads the pages render: the venue index grouped by area,
//! name search results, venue/artist detail pages and the artist list.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::BTreeMap;

use crate::db::models::{ArtistShow, VenueShow};
use crate::db::{artists, shows, venues, Party};
use crate::partition::{count_upcoming, split_past_upcoming};
use crate::Result;

/// One venue line of the grouped index or of a search result
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ListingEntry {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// All venues in one (state, city)
#[derive(Debug, Clone, Serialize)]
pub struct VenueArea {
    pub state: String,
    pub city: String,
    pub venues: Vec<ListingEntry>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<ListingEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub seeking_talent: bool,
    /// Present only while the venue is seeking talent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeking_description: Option<String>,
    pub image_link: String,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub seeking_venue: bool,
    /// Present only while the artist is seeking a venue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeking_description: Option<String>,
    pub image_link: String,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArtistEntry {
    pub id: i64,
    pub name: String,
}

/// Venues grouped by (state, city), groups in ascending order
///
/// `num_upcoming_shows` here is the venue's total show count, past shows
/// included. Search results count only upcoming shows.
pub async fn venue_areas(pool: &SqlitePool) -> Result<Vec<VenueArea>> {
    let rows = venues::venue_index_rows(pool).await?;

    let mut areas: BTreeMap<(String, String), Vec<ListingEntry>> = BTreeMap::new();
    for row in rows {
        areas
            .entry((row.state, row.city))
            .or_default()
            .push(ListingEntry {
                id: row.id,
                name: row.name,
                num_upcoming_shows: row.show_count as usize,
            });
    }

    Ok(areas
        .into_iter()
        .map(|((state, city), venues)| VenueArea { state, city, venues })
        .collect())
}

/// Case-insensitive venue name search with upcoming show counts
pub async fn search_venues(
    pool: &SqlitePool,
    term: &str,
    now: NaiveDateTime,
) -> Result<SearchResults> {
    let matches = venues::search_venues_by_name(pool, term).await?;
    search_results(pool, Party::Venue, matches, now).await
}

/// Case-insensitive artist name search with upcoming show counts
pub async fn search_artists(
    pool: &SqlitePool,
    term: &str,
    now: NaiveDateTime,
) -> Result<SearchResults> {
    let matches = artists::search_artists_by_name(pool, term).await?;
    search_results(pool, Party::Artist, matches, now).await
}

async fn search_results(
    pool: &SqlitePool,
    party: Party,
    matches: Vec<(i64, String)>,
    now: NaiveDateTime,
) -> Result<SearchResults> {
    let mut results = SearchResults::default();
    for (id, name) in matches {
        let start_times = shows::show_start_times(pool, party, id).await?;
        results.data.push(ListingEntry {
            id,
            name,
            num_upcoming_shows: count_upcoming(&start_times, now),
        });
    }
    results.count = results.data.len();
    Ok(results)
}

/// Venue detail page payload; `None` if the venue does not exist
pub async fn venue_detail(
    pool: &SqlitePool,
    id: i64,
    now: NaiveDateTime,
) -> Result<Option<VenueDetail>> {
    let Some(venue) = venues::find_venue(pool, id).await? else {
        return Ok(None);
    };

    let (past_shows, upcoming_shows) =
        split_past_upcoming(venues::venue_shows(pool, id).await?, now);

    Ok(Some(VenueDetail {
        id: venue.id,
        name: venue.name,
        genres: venue.genres,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website_link,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue
            .seeking_description
            .filter(|_| venue.seeking_talent),
        image_link: venue.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }))
}

/// Artist detail page payload; `None` if the artist does not exist
pub async fn artist_detail(
    pool: &SqlitePool,
    id: i64,
    now: NaiveDateTime,
) -> Result<Option<ArtistDetail>> {
    let Some(artist) = artists::find_artist(pool, id).await? else {
        return Ok(None);
    };

    let (past_shows, upcoming_shows) =
        split_past_upcoming(artists::artist_shows(pool, id).await?, now);

    Ok(Some(ArtistDetail {
        id: artist.id,
        name: artist.name,
        genres: artist.genres,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website_link,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist
            .seeking_description
            .filter(|_| artist.seeking_venue),
        image_link: artist.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }))
}

/// Every artist as (id, name), in id order
pub async fn artist_entries(pool: &SqlitePool) -> Result<Vec<ArtistEntry>> {
    Ok(artists::list_artists(pool)
        .await?
        .into_iter()
        .map(|(id, name)| ArtistEntry { id, name })
        .collect())
}
