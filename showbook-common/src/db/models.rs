//! Database models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::partition::StartTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    /// Loaded from `venue_genres` in position order
    #[sqlx(skip)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    /// Loaded from `artist_genres` in position order
    #[sqlx(skip)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Show {
    pub id: i64,
    pub start_time: String,
    pub venue_id: i64,
    pub artist_id: i64,
}

/// Field values for creating or updating a venue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

/// Field values for creating or updating an artist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

/// Field values for creating a show; `start_time` is already normalised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowInput {
    pub start_time: String,
    pub venue_id: i64,
    pub artist_id: i64,
}

/// A venue's show with the performing artist denormalised in
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

/// An artist's show with the hosting venue denormalised in
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: String,
}

/// One row of the global show listing
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ShowListing {
    pub id: i64,
    pub start_time: String,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
}

/// Venue columns needed by the grouped index, with its total show count
#[derive(Debug, Clone, FromRow)]
pub struct VenueIndexRow {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub show_count: i64,
}

impl StartTime for Show {
    fn start_time(&self) -> &str {
        &self.start_time
    }
}

impl StartTime for VenueShow {
    fn start_time(&self) -> &str {
        &self.start_time
    }
}

impl StartTime for ArtistShow {
    fn start_time(&self) -> &str {
        &self.start_time
    }
}

impl StartTime for ShowListing {
    fn start_time(&self) -> &str {
        &self.start_time
    }
}

impl From<Venue> for VenueInput {
    fn from(venue: Venue) -> Self {
        Self {
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            image_link: venue.image_link,
            facebook_link: venue.facebook_link,
            website_link: venue.website_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            genres: venue.genres,
        }
    }
}

impl From<Artist> for ArtistInput {
    fn from(artist: Artist) -> Self {
        Self {
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            image_link: artist.image_link,
            facebook_link: artist.facebook_link,
            website_link: artist.website_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            genres: artist.genres,
        }
    }
}
